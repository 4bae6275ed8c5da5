// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};

use hostnet_common::models::interface::InterfaceInfo;
use hostnet_common::models::subnet::Subnet;
use hostnet_common::utils::ip::broadcast_from_subnet;
use hostnet_core::interface::InterfaceEnumerator;
use hostnet_core::port::{check_port, is_addr_in_use};

#[test]
fn test_interface_by_ip() {
    let enumerator = InterfaceEnumerator::system();
    let ifaces: Vec<InterfaceInfo> = enumerator.list_valid_interfaces().unwrap();

    assert!(!ifaces.is_empty(), "No valid interfaces found on this host");

    for iface in &ifaces {
        assert!(!iface.addresses.is_empty(), "{} has no addresses", iface.name);

        for ip in &iface.addresses {
            let owner = enumerator.find_interface_by_addr(*ip).unwrap();
            assert_eq!(
                owner.as_deref(),
                Some(iface.name.as_str()),
                "{ip} resolved to the wrong interface"
            );
        }
    }
}

#[test]
fn test_collect_all_addrs() {
    let addrs: Vec<IpAddr> = InterfaceEnumerator::system().collect_all_addrs().unwrap();

    assert!(!addrs.is_empty());
}

#[test]
fn test_broadcast_of_live_subnets() {
    let ifaces = InterfaceEnumerator::system().list_valid_interfaces().unwrap();

    for net in ifaces.iter().flat_map(|iface| iface.subnets.iter()) {
        let broadcast = broadcast_from_subnet(&Subnet::from(*net));
        assert_eq!(broadcast.is_ipv4(), net.is_ipv4());
        assert!(net.contains(broadcast), "{broadcast} is outside {net}");
    }
}

#[test]
fn test_check_port_tcp_bound() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    assert_ne!(addr.port(), 0);

    let err = check_port("tcp", addr.ip(), addr.port()).unwrap_err();

    assert_eq!(err.op, "listen");
    assert_eq!(err.addr, addr);
}

#[test]
fn test_check_port_udp_bound() {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let addr = socket.local_addr().unwrap();
    assert_ne!(addr.port(), 0);

    let err = check_port("udp", addr.ip(), addr.port()).unwrap_err();

    assert_eq!(err.op, "listen");
}

#[test]
fn test_check_port_bad_network() {
    assert!(check_port("bad_network", IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0).is_ok());
}

#[test]
fn test_check_port_can_bind() {
    assert!(check_port("udp", IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0).is_ok());
}

#[test]
fn test_is_addr_in_use() {
    let listener = TcpListener::bind("0.0.0.0:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let err = TcpListener::bind(addr).unwrap_err();
    assert!(is_addr_in_use(&err));

    let err = check_port("tcp", addr.ip(), addr.port()).unwrap_err();
    assert!(is_addr_in_use(&err));

    let wrapped = anyhow::Error::new(err).context("starting web server");
    assert!(is_addr_in_use(&*wrapped));
}

#[test]
fn test_is_addr_in_use_another() {
    let err = anyhow::anyhow!("not addr in use");
    assert!(!is_addr_in_use(&*err));
}

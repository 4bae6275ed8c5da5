// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Bind Checks
//!
//! [`check_port`] claims an address/port for an instant to see whether a
//! real listener could take it. [`is_addr_in_use`] tells a port conflict
//! apart from every other reason a bind can fail.

use std::error::Error;
use std::io;
use std::net::{IpAddr, SocketAddr, TcpListener, UdpSocket};

use hostnet_common::debug;
use hostnet_common::error::{BindError, Network};

/// Checks that `ip:port` can be bound for `network` ("tcp" or "udp").
///
/// Unknown networks are not bound and count as available. Port 0 lets the
/// OS pick, which tests the address alone. The socket is closed
/// before this returns.
pub fn check_port(network: &str, ip: IpAddr, port: u16) -> Result<(), BindError> {
    let network: Network = match network.parse() {
        Ok(network) => network,
        Err(e) => {
            debug!("Skipping bind check: {e}");
            return Ok(());
        }
    };

    let addr = SocketAddr::new(ip, port);
    let bound = match network {
        Network::Tcp => TcpListener::bind(addr).map(drop),
        Network::Udp => UdpSocket::bind(addr).map(drop),
    };

    bound.map_err(|e| BindError::listen(network, addr, e))
}

/// Reports whether `err`, or anything in its source chain, is an OS
/// "address already in use" failure.
///
/// Payloads of custom `io::Error`s are inspected too, since
/// `io::Error::source` skips over them.
pub fn is_addr_in_use(err: &(dyn Error + 'static)) -> bool {
    std::iter::successors(Some(err), |&e| e.source()).any(|e| {
        e.downcast_ref::<io::Error>().is_some_and(|io_err| {
            io_err.kind() == io::ErrorKind::AddrInUse
                || io_err.get_ref().is_some_and(|inner| is_addr_in_use(inner))
        })
    })
}

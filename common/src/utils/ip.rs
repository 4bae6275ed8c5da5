// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::{IpAddr, Ipv6Addr};

use crate::models::subnet::Subnet;

/// Octet count of the address as written: 4 for IPv4, 16 for IPv6.
pub fn natural_len(ip_addr: &IpAddr) -> usize {
    match ip_addr {
        IpAddr::V4(_) => 4,
        IpAddr::V6(_) => 16,
    }
}

/// 16-byte form of an address; IPv4 is embedded as `::ffff:a.b.c.d`.
pub fn canonical(ip_addr: IpAddr) -> Ipv6Addr {
    match ip_addr {
        IpAddr::V4(ipv4) => ipv4.to_ipv6_mapped(),
        IpAddr::V6(ipv6) => ipv6,
    }
}

/// Byte-wise equality of the canonical forms, so `1.2.3.4 == ::ffff:1.2.3.4`.
pub fn same_addr(a: IpAddr, b: IpAddr) -> bool {
    canonical(a) == canonical(b)
}

/// Computes the broadcast address of `subnet` by setting every host bit.
///
/// The address is first reduced to its natural length, so a v4-mapped IPv6
/// address is treated as IPv4 and the result comes back as `IpAddr::V4`.
/// Compare against it with [`same_addr`], not `==`, when the input may be
/// in canonical form. Without a usable mask IPv4 falls back to `x.y.z.255`
/// and IPv6 is returned unchanged.
pub fn broadcast_from_subnet(subnet: &Subnet) -> IpAddr {
    let ip = subnet.ip.to_canonical();
    let mask = subnet
        .mask
        .as_ref()
        .and_then(|mask| mask.effective(natural_len(&ip)));

    match (ip, mask) {
        (IpAddr::V4(ipv4), Some(mask)) => {
            let mut octets = ipv4.octets();
            set_host_bits(&mut octets, mask);
            IpAddr::from(octets)
        }
        (IpAddr::V6(ipv6), Some(mask)) => {
            let mut octets = ipv6.octets();
            set_host_bits(&mut octets, mask);
            IpAddr::from(octets)
        }
        (IpAddr::V4(ipv4), None) => {
            let mut octets = ipv4.octets();
            octets[3] = 0xff;
            IpAddr::from(octets)
        }
        (IpAddr::V6(_), None) => ip,
    }
}

fn set_host_bits(octets: &mut [u8], mask: &[u8]) {
    for (octet, mask) in octets.iter_mut().zip(mask) {
        *octet |= !mask;
    }
}

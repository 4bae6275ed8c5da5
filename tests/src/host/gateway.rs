// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(all(test, target_os = "linux"))]
use std::net::{IpAddr, Ipv4Addr};

use hostnet_core::gateway::GatewayResolver;
use hostnet_core::route::IpRoute;

use crate::utils::{HOST_ADDR, NetnsContext, NetnsRunner};

#[test]
fn test_gateway_missing_for_loopback() {
    // `lo` never carries a default route; a missing `ip` binary is a miss too.
    assert_eq!(GatewayResolver::system().gateway_ip("lo"), None);
}

#[test]
fn test_gateway_unknown_interface() {
    let resolver = GatewayResolver::system();
    assert_eq!(resolver.gateway_ip("hostnet-no-such-if0"), None);
}

#[test]
fn test_privileged_gateway_netns() {
    let ctx: NetnsContext = match NetnsContext::new("gw1") {
        Some(c) => c,
        None => {
            eprintln!("Skipping netns test: Requires root privileges or 'ip' command.");
            return;
        }
    };

    let runner = NetnsRunner {
        ns_name: ctx.ns_name.clone(),
    };
    let resolver = GatewayResolver::new(Box::new(runner), Box::new(IpRoute));

    let gateway = resolver
        .gateway_ip(&ctx.target_if)
        .expect("Default route inside the namespace was not found");

    let host: Ipv4Addr = HOST_ADDR.parse().unwrap();
    assert_eq!(gateway, host.to_ipv6_mapped());
    assert_eq!(gateway.to_canonical(), IpAddr::V4(host));
}

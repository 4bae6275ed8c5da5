// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Default-route queries, one per route tool.
//!
//! [`PlatformRoute`] picks the right one at compile time.

use std::net::IpAddr;

use hostnet_common::system::RouteQuery;

/// iproute2: `ip route show dev <iface>`.
///
/// Expected output looks like `default via 192.168.1.1 proto dhcp metric 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpRoute;

impl RouteQuery for IpRoute {
    fn command(&self, iface: &str) -> (&'static str, Vec<String>) {
        (
            "ip",
            vec![
                "route".to_string(),
                "show".to_string(),
                "dev".to_string(),
                iface.to_string(),
            ],
        )
    }

    fn parse_gateway(&self, _iface: &str, output: &str) -> Option<IpAddr> {
        // Only the first default route counts, even if its address is garbage.
        let token = output.lines().find_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("default"), Some("via")) => Some(fields.next()),
                _ => None,
            }
        })??;

        token.parse().ok()
    }
}

/// macOS: `route -n get -ifscope <iface> default`.
///
/// The gateway is reported on its own `gateway: 192.168.1.1` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarwinRoute;

impl RouteQuery for DarwinRoute {
    fn command(&self, iface: &str) -> (&'static str, Vec<String>) {
        (
            "route",
            vec![
                "-n".to_string(),
                "get".to_string(),
                "-ifscope".to_string(),
                iface.to_string(),
                "default".to_string(),
            ],
        )
    }

    fn parse_gateway(&self, _iface: &str, output: &str) -> Option<IpAddr> {
        field(output, "gateway")?.parse().ok()
    }
}

/// FreeBSD, OpenBSD, NetBSD and DragonFly: `route -n get default`.
///
/// Their route(8) can't scope the lookup, so the system-wide default route
/// only counts when its `interface:` line names the requested interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsdRoute;

impl RouteQuery for BsdRoute {
    fn command(&self, _iface: &str) -> (&'static str, Vec<String>) {
        (
            "route",
            vec!["-n".to_string(), "get".to_string(), "default".to_string()],
        )
    }

    fn parse_gateway(&self, iface: &str, output: &str) -> Option<IpAddr> {
        if field(output, "interface")? != iface {
            return None;
        }

        field(output, "gateway")?.parse().ok()
    }
}

/// Value of the first `name: value` line in route(8) output.
fn field<'a>(output: &'a str, name: &str) -> Option<&'a str> {
    output.lines().find_map(|line| {
        let (key, value) = line.trim().split_once(':')?;
        (key == name).then(|| value.trim())
    })
}

#[cfg(target_os = "macos")]
pub type PlatformRoute = DarwinRoute;

#[cfg(any(
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub type PlatformRoute = BsdRoute;

#[cfg(not(any(
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
pub type PlatformRoute = IpRoute;

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Local Interface Model
//!
//! A snapshot of one local network interface, taken from live OS state.
//! Snapshots are rebuilt on every enumeration and never updated in place.
//!
//! The JSON form is what a web layer hands to its UI when offering
//! bind addresses:
//!
//! ```json
//! {
//!   "name": "eth0",
//!   "index": 2,
//!   "hardware_address": "02:42:ac:11:00:02",
//!   "flags": { "up": true, "loopback": false, "broadcast": true, "multicast": true, "point_to_point": false },
//!   "addresses": ["172.17.0.2"],
//!   "subnets": ["172.17.0.2/16"]
//! }
//! ```

use std::fmt::Display;
use std::net::IpAddr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use pnet::util::MacAddr;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceFlags {
    pub up: bool,
    pub loopback: bool,
    pub broadcast: bool,
    pub multicast: bool,
    pub point_to_point: bool,
}

impl From<&NetworkInterface> for InterfaceFlags {
    fn from(iface: &NetworkInterface) -> Self {
        Self {
            up: iface.is_up(),
            loopback: iface.is_loopback(),
            broadcast: iface.is_broadcast(),
            multicast: iface.is_multicast(),
            point_to_point: iface.is_point_to_point(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub index: u32,
    #[serde(rename = "hardware_address", serialize_with = "display_opt")]
    pub hardware_addr: Option<MacAddr>,
    pub flags: InterfaceFlags,
    pub addresses: Vec<IpAddr>,
    #[serde(serialize_with = "display_seq")]
    pub subnets: Vec<IpNetwork>,
}

impl InterfaceInfo {
    /// Takes a snapshot of `iface`, keeping only the networks `keep` accepts.
    ///
    /// `addresses` and `subnets` stay index-aligned.
    pub fn from_interface(iface: &NetworkInterface, keep: impl Fn(&IpNetwork) -> bool) -> Self {
        let subnets: Vec<IpNetwork> = iface.ips.iter().copied().filter(|net| keep(net)).collect();

        Self {
            name: iface.name.clone(),
            index: iface.index,
            hardware_addr: iface.mac,
            flags: InterfaceFlags::from(iface),
            addresses: subnets.iter().map(IpNetwork::ip).collect(),
            subnets,
        }
    }

    pub fn is_up(&self) -> bool {
        self.flags.up
    }

    pub fn is_loopback(&self) -> bool {
        self.flags.loopback
    }

    pub fn is_multicast(&self) -> bool {
        self.flags.multicast
    }

    /// First IPv4 network configured on the interface.
    pub fn ipv4_subnet(&self) -> Option<IpNetwork> {
        self.subnets.iter().copied().find(IpNetwork::is_ipv4)
    }
}

fn display_opt<T: Display, S: Serializer>(value: &Option<T>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.collect_str(v),
        None => s.serialize_none(),
    }
}

fn display_seq<T: Display, S: Serializer>(values: &[T], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().map(ToString::to_string))
}

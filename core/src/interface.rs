// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::net::IpAddr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use hostnet_common::config::Config;
use hostnet_common::error::InterfaceError;
use hostnet_common::models::interface::InterfaceInfo;
use hostnet_common::system::InterfaceSource;
use hostnet_common::utils::ip;
use hostnet_common::{debug, info, warn};

use crate::system::OsInterfaces;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Rejection {
    /// The interface is operationally down.
    IsDown,
    /// Loopback interfaces were excluded by configuration.
    IsLoopback,
    /// Multicast was required but the interface doesn't support it.
    NotMulticast,
    /// Nothing is left after dropping unwanted addresses.
    NoAddresses,
}

/// Lists local interfaces and answers address ownership questions.
///
/// Every call re-reads the OS state; nothing is cached between calls.
pub struct InterfaceEnumerator {
    source: Box<dyn InterfaceSource>,
    config: Config,
}

impl InterfaceEnumerator {
    pub fn new(source: Box<dyn InterfaceSource>, config: Config) -> Self {
        Self { source, config }
    }

    pub fn system() -> Self {
        Self::new(Box::new(OsInterfaces), Config::default())
    }

    /// Returns the interfaces suitable for serving client-facing traffic,
    /// each with at least one address.
    pub fn list_valid_interfaces(&self) -> Result<Vec<InterfaceInfo>, InterfaceError> {
        let interfaces = self.fetch()?;
        let total = interfaces.len();

        let valid: Vec<InterfaceInfo> = interfaces
            .iter()
            .filter_map(|iface| match self.to_valid_info(iface) {
                Ok(info) => Some(info),
                Err(reason) => {
                    debug!("Skipping interface {}: {reason:?}", iface.name);
                    None
                }
            })
            .collect();

        info!(
            verbosity = 1,
            "{} of {} interfaces are valid for serving",
            valid.len(),
            total
        );

        Ok(valid)
    }

    /// Returns the name of the valid interface that owns `addr`.
    pub fn find_interface_by_addr(&self, addr: IpAddr) -> Result<Option<String>, InterfaceError> {
        let owner = self
            .list_valid_interfaces()?
            .into_iter()
            .find(|iface| iface.addresses.iter().any(|&a| ip::same_addr(a, addr)))
            .map(|iface| iface.name);

        if owner.is_none() {
            debug!("No valid interface owns {addr}");
        }

        Ok(owner)
    }

    /// Returns every address on every interface, valid or not, without duplicates.
    pub fn collect_all_addrs(&self) -> Result<Vec<IpAddr>, InterfaceError> {
        let mut seen = HashSet::new();

        Ok(self
            .fetch()?
            .iter()
            .flat_map(|iface| iface.ips.iter().map(IpNetwork::ip))
            .filter(|addr| seen.insert(ip::canonical(*addr)))
            .collect())
    }

    /// Returns the first IPv4 network of the valid interface called `name`.
    pub fn interface_subnet(&self, name: &str) -> Result<Option<IpNetwork>, InterfaceError> {
        Ok(self
            .list_valid_interfaces()?
            .into_iter()
            .find(|iface| iface.name == name)
            .and_then(|iface| iface.ipv4_subnet()))
    }

    fn fetch(&self) -> Result<Vec<NetworkInterface>, InterfaceError> {
        self.source.interfaces().map_err(|e| {
            warn!("Listing network interfaces failed: {e}");
            InterfaceError::Enumeration(e)
        })
    }

    fn to_valid_info(&self, iface: &NetworkInterface) -> Result<InterfaceInfo, Rejection> {
        is_valid_for_web(iface, &self.config)?;

        let info = InterfaceInfo::from_interface(iface, |net| {
            self.config.include_link_local || !is_link_local(&net.ip())
        });
        if info.addresses.is_empty() {
            return Err(Rejection::NoAddresses);
        }

        Ok(info)
    }
}

fn is_valid_for_web(iface: &NetworkInterface, cfg: &Config) -> Result<(), Rejection> {
    if !cfg.include_down && !iface.is_up() {
        return Err(Rejection::IsDown);
    }
    if !cfg.include_loopback && iface.is_loopback() {
        return Err(Rejection::IsLoopback);
    }
    if cfg.require_multicast && !iface.is_multicast() {
        return Err(Rejection::NotMulticast);
    }

    Ok(())
}

fn is_link_local(ip_addr: &IpAddr) -> bool {
    match ip_addr {
        IpAddr::V4(ipv4) => ipv4.is_link_local(),
        IpAddr::V6(ipv6) => ipv6.is_unicast_link_local(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterfaceError {
    /// The OS refused to list its interfaces.
    #[error("failed to enumerate network interfaces")]
    Enumeration(#[source] io::Error),
}

/// Transport family a port check binds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Tcp,
    Udp,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network family: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Network::Tcp),
            "udp" => Ok(Network::Udp),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Tcp => write!(f, "tcp"),
            Network::Udp => write!(f, "udp"),
        }
    }
}

/// A failed attempt to claim a local address for listening.
///
/// The OS cause is kept untouched in `source` so callers can classify it.
#[derive(Debug, Error)]
#[error("{op} {network} {addr}: {source}")]
pub struct BindError {
    pub op: &'static str,
    pub network: Network,
    pub addr: SocketAddr,
    #[source]
    pub source: io::Error,
}

impl BindError {
    pub fn listen(network: Network, addr: SocketAddr, source: io::Error) -> Self {
        Self {
            op: "listen",
            network,
            addr,
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

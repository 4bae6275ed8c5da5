// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Options controlling which interfaces and addresses count as "valid"
/// for serving client-facing traffic.
///
/// Consumers usually build this once from their own settings and pass it to
/// the interface enumerator. The defaults describe what a web UI would offer
/// as bind targets.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keeps loopback interfaces in the valid list.
    ///
    /// # Behavior
    /// * **True** (Default): `lo` and friends are listed, so a service can be
    ///   offered on `127.0.0.1` / `::1`.
    /// * **False**: only interfaces reachable from other hosts are listed.
    pub include_loopback: bool,

    /// Keeps link-local unicast addresses (`169.254.0.0/16`, `fe80::/10`).
    ///
    /// These addresses need a zone to be usable and are rarely what a user
    /// means when picking a listen address, so they are dropped by default.
    pub include_link_local: bool,

    /// Requires the `IFF_MULTICAST` flag on valid interfaces.
    pub require_multicast: bool,

    /// Keeps interfaces that are administratively down.
    pub include_down: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_loopback: true,
            include_link_local: false,
            require_multicast: false,
            include_down: false,
        }
    }
}

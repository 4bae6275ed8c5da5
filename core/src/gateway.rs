// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Default Gateway Lookup
//!
//! Best-effort: every failure (the route tool missing, a non-zero exit,
//! unexpected output) is logged at debug level and reported as "no gateway".

use std::net::Ipv6Addr;

use hostnet_common::debug;
use hostnet_common::system::{CommandRunner, RouteQuery};
use hostnet_common::utils::ip;

use crate::route::PlatformRoute;
use crate::system::ShellRunner;

pub struct GatewayResolver {
    runner: Box<dyn CommandRunner>,
    query: Box<dyn RouteQuery>,
}

impl GatewayResolver {
    pub fn new(runner: Box<dyn CommandRunner>, query: Box<dyn RouteQuery>) -> Self {
        Self { runner, query }
    }

    /// Resolver backed by real child processes and this platform's route tool.
    pub fn system() -> Self {
        Self::new(Box::new(ShellRunner), Box::new(PlatformRoute::default()))
    }

    /// Returns the default-route next hop of `iface` in its 16-byte form,
    /// or `None` if it can't be determined.
    pub fn gateway_ip(&self, iface: &str) -> Option<Ipv6Addr> {
        let (program, args) = self.query.command(iface);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = match self.runner.run(program, &args) {
            Ok(result) => result,
            Err(e) => {
                debug!("Gateway lookup for {iface} could not run {program}: {e:#}");
                return None;
            }
        };

        if !result.success() {
            debug!(
                "Gateway lookup for {iface}: {program} exited with code {}",
                result.code
            );
            return None;
        }

        match self.query.parse_gateway(iface, &result.text()) {
            Some(gateway) => Some(ip::canonical(gateway)),
            None => {
                debug!("Gateway lookup for {iface}: no default route in {program} output");
                None
            }
        }
    }
}

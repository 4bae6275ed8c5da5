// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::IpAddr;

use pnet::datalink::NetworkInterface;

use crate::models::command::CommandOutput;

/// Defines the contract for launching external programs.
///
/// Implementations must return `Err` only when the program could not be run
/// at all. A program that ran and failed is reported through
/// [`CommandOutput::code`].
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and collects its combined stdout/stderr.
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<CommandOutput>;
}

/// Platform strategy for asking the OS about an interface's default route.
///
/// The command and the parser travel together since each route tool prints
/// its own format.
pub trait RouteQuery: Send + Sync {
    /// Returns the program and arguments that print the default route of `iface`.
    fn command(&self, iface: &str) -> (&'static str, Vec<String>);

    /// Extracts the gateway of `iface` from the command's output, if there is one.
    fn parse_gateway(&self, iface: &str, output: &str) -> Option<IpAddr>;
}

/// Abstracts the OS interface-listing primitive.
pub trait InterfaceSource: Send + Sync {
    /// Retrieves every network interface known to the OS, in OS order.
    fn interfaces(&self) -> std::io::Result<Vec<NetworkInterface>>;
}

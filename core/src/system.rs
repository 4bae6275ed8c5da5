// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::process::Command;

use anyhow::Context;
use pnet::datalink::NetworkInterface;

use hostnet_common::models::command::CommandOutput;
use hostnet_common::system::{CommandRunner, InterfaceSource};

/// Runs programs as real child processes and waits for them.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run command `{program} {}`", args.join(" ")))?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        Ok(CommandOutput::new(output.status.code().unwrap_or(-1), combined))
    }
}

/// Lists interfaces straight from the OS through `pnet`.
pub struct OsInterfaces;

impl InterfaceSource for OsInterfaces {
    fn interfaces(&self) -> std::io::Result<Vec<NetworkInterface>> {
        Ok(pnet::datalink::interfaces())
    }
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod host;

#[cfg(target_os = "linux")]
pub mod utils {
    use std::process::Command;

    use hostnet_common::models::command::CommandOutput;
    use hostnet_common::system::CommandRunner;
    use hostnet_core::system::ShellRunner;

    pub const HOST_ADDR: &str = "10.200.0.1";
    pub const TARGET_ADDR: &str = "10.200.0.2";

    /// RAII wrapper for a network namespace whose only interface routes
    /// its default traffic through the host side of a veth pair.
    pub struct NetnsContext {
        pub ns_name: String,
        pub host_if: String,
        pub target_if: String,
    }

    impl NetnsContext {
        pub fn new(suffix: &str) -> Option<Self> {
            let ns_name = format!("hostnet-ns-{}", suffix);
            let host_if = format!("v-host-{}", suffix);
            let target_if = format!("v-targ-{}", suffix);

            Self::cleanup(&ns_name, &host_if);

            if !run_cmd("ip", &["netns", "add", &ns_name]) {
                return None;
            }

            let ctx = Self {
                ns_name,
                host_if,
                target_if,
            };

            let ready = run_cmd(
                "ip",
                &[
                    "link", "add", &ctx.host_if, "type", "veth", "peer", "name", &ctx.target_if,
                ],
            ) && run_cmd("ip", &["link", "set", &ctx.target_if, "netns", &ctx.ns_name])
                && run_cmd(
                    "ip",
                    &["addr", "add", &format!("{HOST_ADDR}/24"), "dev", &ctx.host_if],
                )
                && run_cmd("ip", &["link", "set", &ctx.host_if, "up"])
                && ctx.run_in_ns(&[
                    "ip",
                    "addr",
                    "add",
                    &format!("{TARGET_ADDR}/24"),
                    "dev",
                    &ctx.target_if,
                ])
                && ctx.run_in_ns(&["ip", "link", "set", &ctx.target_if, "up"])
                && ctx.run_in_ns(&["ip", "route", "add", "default", "via", HOST_ADDR]);

            // Dropping `ctx` tears down whatever was created.
            ready.then_some(ctx)
        }

        fn run_in_ns(&self, cmd: &[&str]) -> bool {
            let mut args = vec!["netns", "exec", self.ns_name.as_str()];
            args.extend_from_slice(cmd);
            run_cmd("ip", &args)
        }

        fn cleanup(ns_name: &str, host_if: &str) {
            let _ = Command::new("ip").args(["netns", "del", ns_name]).output();
            let _ = Command::new("ip").args(["link", "del", host_if]).output();
        }
    }

    impl Drop for NetnsContext {
        fn drop(&mut self) {
            Self::cleanup(&self.ns_name, &self.host_if);
        }
    }

    /// Runs every command inside a network namespace.
    pub struct NetnsRunner {
        pub ns_name: String,
    }

    impl CommandRunner for NetnsRunner {
        fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<CommandOutput> {
            let mut full = vec!["netns", "exec", self.ns_name.as_str(), program];
            full.extend_from_slice(args);
            ShellRunner.run("ip", &full)
        }
    }

    fn run_cmd(cmd: &str, args: &[&str]) -> bool {
        let status = Command::new(cmd).args(args).status();
        match status {
            Ok(s) => s.success(),
            Err(_) => false,
        }
    }
}

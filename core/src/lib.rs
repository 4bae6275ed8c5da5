// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Host Network Introspection
//!
//! Answers the questions an application asks before it binds listening
//! sockets:
//!
//! * Which gateway does an interface route through? ([`gateway`])
//! * Which interfaces and addresses can be offered to clients, and which
//!   interface owns a given address? ([`interface`])
//! * Is an address/port free right now, and was a bind failure an
//!   "address in use" conflict? ([`port`])
//!
//! Broadcast math and the data model live in `hostnet_common`.
//! Everything here is synchronous. External programs and OS listings sit
//! behind the traits in `hostnet_common::system`; [`system`] holds the real
//! implementations.

pub mod gateway;
pub mod interface;
pub mod port;
pub mod route;
pub mod system;

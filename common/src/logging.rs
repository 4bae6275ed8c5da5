// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Thin logging layer over the `tracing` crate.
//!
//! Every event carries a `status` field so that whichever subscriber the
//! consuming application installs can style lookups, misses and failures
//! consistently. Callers do not need a direct `tracing` dependency.
//!
//! This library never installs a subscriber itself.

#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::logging::__tracing::info!(status = "info", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::logging::__tracing::debug!(status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::logging::__tracing::warn!(status = "warn", $($arg)+)
    };
}

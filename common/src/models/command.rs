// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

/// What a finished external program left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `-1` when the process was killed by a signal.
    pub code: i32,
    /// Stdout followed by stderr.
    pub output: Vec<u8>,
}

impl CommandOutput {
    pub fn new(code: i32, output: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }
}

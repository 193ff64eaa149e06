// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::scanner::TokenClass;

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_BLUE: &str = "\x1b[34m";

/// Markers placed around substituted spans in the highlighted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Airport names and municipalities.
    pub code: String,
    /// Dates and times.
    pub time: String,
    pub reset: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Palette {
    /// Blue codes, red times.
    pub fn ansi() -> Self {
        Self {
            code: ANSI_BLUE.to_string(),
            time: ANSI_RED.to_string(),
            reset: ANSI_RESET.to_string(),
        }
    }

    /// No markers at all; highlighted output equals plain output.
    pub fn plain() -> Self {
        Self {
            code: String::new(),
            time: String::new(),
            reset: String::new(),
        }
    }

    pub fn colour_for(&self, class: TokenClass) -> &str {
        match class {
            TokenClass::Municipality | TokenClass::Iata | TokenClass::Icao => &self.code,
            TokenClass::Time => &self.time,
        }
    }

    pub fn wrap(&self, class: TokenClass, text: &str) -> String {
        format!("{}{}{}", self.colour_for(class), text, self.reset)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The four annotation grammars recognised in an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `*#LHR`, `*##EGLL`: asks for the city rather than the airport.
    Municipality,
    /// `#LHR`
    Iata,
    /// `##EGLL`
    Icao,
    /// `D(...)`, `T12(...)`, `T24(...)`
    Time,
}

impl TokenClass {
    /// Substitution order. Municipality markers share the `#`/`##` prefix
    /// with the code grammars and must be consumed before them.
    pub const ORDER: [TokenClass; 4] = [
        TokenClass::Municipality,
        TokenClass::Iata,
        TokenClass::Icao,
        TokenClass::Time,
    ];

    pub fn pattern(self) -> &'static Regex {
        static RE_CITY: OnceLock<Regex> = OnceLock::new();
        static RE_IATA: OnceLock<Regex> = OnceLock::new();
        static RE_ICAO: OnceLock<Regex> = OnceLock::new();
        static RE_TIME: OnceLock<Regex> = OnceLock::new();

        match self {
            TokenClass::Municipality => {
                RE_CITY.get_or_init(|| Regex::new(r"\*#+[A-Z]{3,4}(?-u:\b)").unwrap())
            }
            TokenClass::Iata => RE_IATA.get_or_init(|| Regex::new(r"#[A-Z]{3}(?-u:\b)").unwrap()),
            TokenClass::Icao => RE_ICAO.get_or_init(|| Regex::new(r"##[A-Z]{4}(?-u:\b)").unwrap()),
            TokenClass::Time => {
                RE_TIME.get_or_init(|| Regex::new(r"(?:D|T12|T24)\([^)]+\)").unwrap())
            }
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Municipality => "municipality",
            TokenClass::Iata => "iata",
            TokenClass::Icao => "icao",
            TokenClass::Time => "time",
        };
        f.write_str(name)
    }
}

/// A single grammar match. Only valid against the text it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub class: TokenClass,
    pub text: &'a str,
    pub start: usize,
}

/// Finds every non-overlapping, leftmost-first match of `class` in `text`.
pub fn scan(class: TokenClass, text: &str) -> Vec<Token<'_>> {
    class
        .pattern()
        .find_iter(text)
        .map(|m| Token {
            class,
            text: m.as_str(),
            start: m.start(),
        })
        .collect()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Token resolvers. Each one maps a matched token to its replacement and
//! hands the token back untouched when it cannot be resolved.

use crate::airports::AirportIndex;
use crate::scanner::TokenClass;
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::OnceLock;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

pub fn resolve(class: TokenClass, token: &str, index: &AirportIndex) -> String {
    match class {
        TokenClass::Municipality => resolve_municipality(token, index),
        TokenClass::Iata => resolve_iata(token, index),
        TokenClass::Icao => resolve_icao(token, index),
        TokenClass::Time => resolve_time(token),
    }
}

/// `*##EGLL` / `*#LHR` → the airport's municipality.
pub fn resolve_municipality(token: &str, index: &AirportIndex) -> String {
    let code = token.strip_prefix('*').unwrap_or(token);
    let code = code
        .strip_prefix("##")
        .or_else(|| code.strip_prefix('#'))
        .unwrap_or(code);

    index
        .find_by_municipality_key(code)
        .map(|airport| airport.municipality.clone())
        .unwrap_or_else(|| token.to_string())
}

/// `#LHR` → the airport's name.
pub fn resolve_iata(token: &str, index: &AirportIndex) -> String {
    token
        .strip_prefix('#')
        .and_then(|code| index.find_by_iata(code))
        .map(|airport| airport.name.clone())
        .unwrap_or_else(|| token.to_string())
}

/// `##EGLL` → the airport's name.
pub fn resolve_icao(token: &str, index: &AirportIndex) -> String {
    token
        .strip_prefix("##")
        .and_then(|code| index.find_by_icao(code))
        .map(|airport| airport.name.clone())
        .unwrap_or_else(|| token.to_string())
}

/// `D(...)`, `T12(...)`, `T24(...)` → a formatted date or time.
///
/// The payload must look like `2024-05-01T10:00Z` or `2024-05-01T10:00+02:00`.
/// Output is rendered in the payload's own offset.
pub fn resolve_time(token: &str) -> String {
    let Some((prefix, rest)) = token.split_once('(') else {
        return token.to_string();
    };
    let payload = rest.strip_suffix(')').unwrap_or(rest);

    let pattern = match prefix {
        "D" => "%d %b %Y",
        "T12" => "%I:%M%p (%:z)",
        "T24" => "%H:%M (%:z)",
        _ => return token.to_string(),
    };

    match parse_timestamp(payload) {
        Some(time) => time.format(pattern).to_string(),
        None => {
            log::debug!("Unparseable time payload left as-is — token={}", token);
            token.to_string()
        }
    }
}

fn parse_timestamp(payload: &str) -> Option<DateTime<FixedOffset>> {
    // chrono tolerates unpadded fields, stray spaces and `+0200`; the payload
    // format does not.
    static RE_PAYLOAD: OnceLock<Regex> = OnceLock::new();
    let re_payload = RE_PAYLOAD.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2})$").unwrap()
    });
    if !re_payload.is_match(payload) {
        return None;
    }

    // chrono's offset parser has no spelling for a bare `Z`.
    let normalized = match payload.strip_suffix('Z') {
        Some(local) => format!("{local}+00:00"),
        None => payload.to_string(),
    };
    DateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT).ok()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use regex::Regex;
use std::sync::OnceLock;

/// Tidies whitespace left behind by substitution.
///
/// Carriage returns, vertical tabs and form feeds become line feeds first,
/// then runs of spaces shrink to one and runs of three or more line feeds
/// shrink to two.
pub fn normalize_whitespace(text: &str) -> String {
    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    static RE_BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r"[ ]{2,}").unwrap());
    let re_blank_lines = RE_BLANK_LINES.get_or_init(|| Regex::new(r"\n{3,}").unwrap());

    let text = text.replace(['\r', '\x0B', '\x0C'], "\n");
    let text = re_spaces.replace_all(&text, " ");
    re_blank_lines.replace_all(&text, "\n\n").into_owned()
}

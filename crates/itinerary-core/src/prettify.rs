// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airports::AirportIndex;
use crate::normalize::normalize_whitespace;
use crate::palette::Palette;
use crate::resolve::resolve;
use crate::scanner::{scan, TokenClass};
use std::collections::HashSet;

/// The two renderings of a processed itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prettified {
    /// Written to the output file.
    pub plain: String,
    /// Same text with every substituted span wrapped in palette markers.
    pub highlighted: String,
}

pub struct Prettifier<'a> {
    index: &'a AirportIndex,
    palette: Palette,
}

impl<'a> Prettifier<'a> {
    pub fn new(index: &'a AirportIndex) -> Self {
        Self {
            index,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Resolves every annotation in `document`.
    ///
    /// Classes run one after another in [`TokenClass::ORDER`], and each class
    /// scans the plain buffer as the previous class left it. Every distinct
    /// match is resolved once and all of its occurrences are replaced, in both
    /// buffers. Unresolvable tokens stay as written.
    pub fn process(&self, document: &str) -> Prettified {
        let mut plain = document.to_string();
        let mut highlighted = document.to_string();

        for class in TokenClass::ORDER {
            let matches = distinct_matches(class, &plain);
            log::debug!("Substituting {} tokens — distinct={}", class, matches.len());

            for token in matches {
                let replacement = resolve(class, &token, self.index);
                highlighted = highlighted.replace(&token, &self.palette.wrap(class, &replacement));
                plain = plain.replace(&token, &replacement);
            }
        }

        Prettified {
            plain: normalize_whitespace(&plain),
            highlighted: normalize_whitespace(&highlighted),
        }
    }
}

/// Shorthand for a [`Prettifier`] with the ANSI palette.
pub fn process(document: &str, index: &AirportIndex) -> Prettified {
    Prettifier::new(index).process(document)
}

fn distinct_matches(class: TokenClass, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan(class, text)
        .into_iter()
        .filter(|token| seen.insert(token.text))
        .map(|token| token.text.to_string())
        .collect()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Resolves annotated travel itineraries into readable text.
//!
//! Itineraries carry inline tokens: `#LHR` (IATA code), `##EGLL` (ICAO code),
//! `*#LHR` / `*##EGLL` (the airport's city) and `D(...)`, `T12(...)`,
//! `T24(...)` (timestamps). [`process`] swaps each token for its resolved
//! text and returns both a plain rendering and a highlighted one.

pub mod airports;
pub mod normalize;
pub mod palette;
pub mod prettify;
pub mod resolve;
pub mod scanner;

pub use airports::{
    load_airports, load_airports_from_path, AirportIndex, AirportRecord, LoadError,
};
pub use palette::Palette;
pub use prettify::{process, Prettified, Prettifier};
pub use scanner::{scan, Token, TokenClass};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

mod session;

use anyhow::{bail, Context, Result};
use clap::Parser;
use itinerary_core::{load_airports_from_path, AirportIndex, LoadError, Palette, Prettifier};
use session::{Answer, Typewriter};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Annotated itinerary to read
    input: PathBuf,

    /// Where to write the prettified itinerary
    output: PathBuf,

    /// Airport lookup CSV
    #[arg(env = "ITINERARY_AIRPORTS")]
    airports: PathBuf,

    /// Print the result without asking
    #[arg(long, conflicts_with = "no_print")]
    print: bool,

    /// Do not print the result and do not ask
    #[arg(long)]
    no_print: bool,

    /// Disable colours when printing the result (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Delay between printed characters, 0 disables the animation
    #[arg(long, env = "ITINERARY_DELAY_MS", default_value_t = 20)]
    delay_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn preset_answer(&self) -> Option<Answer> {
        if self.print {
            Some(Answer::Print)
        } else if self.no_print {
            Some(Answer::Skip)
        } else {
            None
        }
    }

    fn palette(&self) -> Palette {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.no_color || no_color_env {
            Palette::plain()
        } else {
            Palette::ansi()
        }
    }
}

/// Reads the itinerary; bytes that are not UTF-8 become U+FFFD instead of
/// failing the run.
fn read_document(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Input not found: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let document = read_document(&cli.input)?;

    let airports = match load_airports_from_path(&cli.airports) {
        Ok(airports) => airports,
        Err(LoadError::Io(e)) => {
            return Err(e).with_context(|| {
                format!("Airport lookup not found: {}", cli.airports.display())
            });
        }
        Err(e) => bail!("Airport lookup malformed ({})", e),
    };
    log::debug!(
        "Prettifying itinerary — input={} airports={}",
        cli.input.display(),
        airports.len()
    );

    let index = AirportIndex::new(airports);
    let result = Prettifier::new(&index)
        .with_palette(cli.palette())
        .process(&document);

    fs::write(&cli.output, &result.plain)
        .with_context(|| format!("Error writing output file: {}", cli.output.display()))?;

    let typewriter = Typewriter::new(Duration::from_millis(cli.delay_ms));
    session::finish(
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &typewriter,
        &cli.output,
        &result.highlighted,
        cli.preset_answer(),
    )?;

    Ok(())
}

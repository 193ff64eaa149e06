// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

const GOOD_BYE: &str = "\nThank you for using Anywhere Holidays Prettifier Tool\n\nSee you soon!\n\n";
const PROMPT_PAUSE: Duration = Duration::from_millis(250);
const AFTER_PRINT_PAUSE: Duration = Duration::from_millis(500);

/// Prints text one character at a time.
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn is_animated(&self) -> bool {
        !self.delay.is_zero()
    }

    pub fn type_out<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if !self.is_animated() {
            out.write_all(text.as_bytes())?;
            return out.flush();
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            thread::sleep(self.delay);
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        if self.is_animated() {
            thread::sleep(duration);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Print,
    Skip,
}

/// Announces the written file, optionally shows the highlighted result and
/// says goodbye. With `preset` set the question is not asked.
pub fn finish<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    typewriter: &Typewriter,
    output_file: &Path,
    highlighted: &str,
    preset: Option<Answer>,
) -> io::Result<Answer> {
    let mut announcement = format!(
        "\n-= Output successfully written to -> {} =-\n\n",
        output_file.display()
    );
    if preset.is_none() {
        announcement.push_str("Do you want to print the result in the command line? (Y/N)\n");
    }
    typewriter.type_out(out, &announcement)?;

    let answer = match preset {
        Some(answer) => answer,
        None => ask(input, out, typewriter)?,
    };

    if answer == Answer::Print {
        writeln!(out)?;
        typewriter.type_out(out, highlighted)?;
        writeln!(out)?;
        typewriter.pause(AFTER_PRINT_PAUSE);
    }

    typewriter.type_out(out, GOOD_BYE)?;
    Ok(answer)
}

/// Loops until the user answers Y or N. End of input counts as N.
fn ask<R: BufRead, W: Write>(mut input: R, out: &mut W, typewriter: &Typewriter) -> io::Result<Answer> {
    let mut line = String::new();
    loop {
        typewriter.pause(PROMPT_PAUSE);
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Answer::Skip);
        }
        match line.trim() {
            "y" | "Y" => return Ok(Answer::Print),
            "n" | "N" => return Ok(Answer::Skip),
            _ => writeln!(out, "Invalid answer. Please enter Y or N.")?,
        }
    }
}

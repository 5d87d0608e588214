// File:    pad_file.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Renders generated pads as plain text, saves them to disk and checks saved pads.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{SEPARATOR, index_of};
use log::info;
use std::fmt;
use std::fs::{self, File};
use std::io::{Error, ErrorKind, Write};
use std::path::Path;

/// The result of a save request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The pad was written to disk.
    Saved {
        /// Number of bytes written.
        bytes: usize,
    },
    /// There was no pad text, so no file was created.
    NothingToSave,
}

/// Counts gathered from a well-formed pad text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadSummary {
    /// Number of alphabet symbols, separators excluded.
    pub symbols: usize,
    /// Number of non-blank lines.
    pub lines: usize,
}

/// A character in pad text that is neither a symbol nor a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// The offending character.
    pub found: char,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character {:?} at line {}, column {}",
            self.found, self.line, self.column
        )
    }
}

impl std::error::Error for InvalidSymbol {}

/// Joins pad lines with newlines, the way they are displayed.
#[must_use]
pub fn render(lines: &[String]) -> String {
    lines.join("\n")
}

/// Saves the rendered pad to `path`, with trailing whitespace trimmed.
///
/// An empty pad is not written; [`SaveOutcome::NothingToSave`] is returned
/// instead so the caller can tell the user.
///
/// # Errors
///
/// This function will return an error if the file cannot be created or written to.
pub fn save_pad(path: &Path, lines: &[String]) -> std::io::Result<SaveOutcome> {
    let rendered = render(lines);
    let text = rendered.trim_end();
    if text.is_empty() {
        return Ok(SaveOutcome::NothingToSave);
    }

    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    info!("Saved {} line(s) to '{}'.", lines.len(), path.display());
    Ok(SaveOutcome::Saved { bytes: text.len() })
}

/// Checks that `text` contains only pad symbols, separators and line breaks.
///
/// # Errors
///
/// Returns the first [`InvalidSymbol`] encountered.
pub fn check_pad_text(text: &str) -> Result<PadSummary, InvalidSymbol> {
    let mut summary = PadSummary { symbols: 0, lines: 0 };

    for (line_index, line) in text.lines().enumerate() {
        let mut line_symbols = 0;
        for (column_index, c) in line.chars().enumerate() {
            if index_of(c).is_some() {
                line_symbols += 1;
            } else if c != SEPARATOR {
                return Err(InvalidSymbol {
                    found: c,
                    line: line_index + 1,
                    column: column_index + 1,
                });
            }
        }
        if line_symbols > 0 {
            summary.lines += 1;
            summary.symbols += line_symbols;
        }
    }

    Ok(summary)
}

/// Reads a saved pad from `path` and checks its contents.
///
/// # Errors
///
/// This function will return an error if the file cannot be read, or one of
/// kind [`ErrorKind::InvalidData`] if it holds anything other than pad text.
pub fn verify_pad(path: &Path) -> std::io::Result<PadSummary> {
    let text = fs::read_to_string(path)?;
    check_pad_text(&text).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

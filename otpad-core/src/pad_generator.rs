// File:    pad_generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Provides functionality for generating high-quality one-time pads for cryptographic use.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{ALPHABET, ALPHABET_LEN, SEPARATOR};
use log::debug;
use rand::{TryCryptoRng, TryRngCore, rngs::OsRng};
use std::num::NonZeroUsize;

/// Bytes at or above this bound are discarded so that `byte % 26` is uniform (234 = 9 * 26).
const ACCEPT_BELOW: u8 = 234;

/// Upper bound on how many entropy bytes are requested from the OS at once.
const DRAW_CHUNK: usize = 4096;

/// Generates a new one-time pad and formats it into grouped lines.
///
/// # Arguments
///
/// * `length` - The total number of symbols in the pad.
/// * `group_size` - The number of symbols between separators within a line.
/// * `line_length` - The number of symbols (not counting separators) per line.
///
/// # Returns
///
/// One string per output line. With `length = 1000`, `group_size = 5` and
/// `line_length = 50` this yields 20 lines of ten 5-letter groups.
///
/// # Errors
///
/// This function will return an error if the operating system's random number
/// generator fails. No weaker source is ever substituted.
pub fn generate(
    length: NonZeroUsize,
    group_size: NonZeroUsize,
    line_length: NonZeroUsize,
) -> std::io::Result<Vec<String>> {
    let symbols = draw_symbols(length)?;
    let lines = format_pad(&symbols, group_size, line_length);
    debug!("Generated {length} symbols in {} line(s).", lines.len());
    Ok(lines)
}

/// Draws `length` symbols uniformly from [`ALPHABET`] using the OS random number generator.
///
/// # Errors
///
/// This function will return an error if the random number generator fails.
pub fn draw_symbols(length: NonZeroUsize) -> std::io::Result<String> {
    draw_symbols_from(&mut OsRng, length)
}

/// Draws `length` symbols uniformly from [`ALPHABET`] using `rng`.
///
/// Only cryptographically secure generators are accepted. A failure of `rng`
/// is returned as is; the symbols drawn so far are discarded.
///
/// # Errors
///
/// This function will return an error of kind [`std::io::ErrorKind::Other`]
/// if the random number generator fails.
pub fn draw_symbols_from<R>(rng: &mut R, length: NonZeroUsize) -> std::io::Result<String>
where
    R: TryRngCore + TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let length = length.get();
    let mut symbols = String::with_capacity(length);
    let mut buffer = vec![0u8; length.min(DRAW_CHUNK)];

    while symbols.len() < length {
        // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
        rng.try_fill_bytes(&mut buffer).map_err(std::io::Error::other)?;

        let missing = length - symbols.len();
        symbols.extend(
            buffer
                .iter()
                .filter(|&&byte| byte < ACCEPT_BELOW)
                .take(missing)
                .map(|&byte| char::from(ALPHABET[usize::from(byte) % ALPHABET_LEN])),
        );
    }

    Ok(symbols)
}

/// Splits `symbols` into lines of `line_length` and inserts a separator every `group_size` symbols.
///
/// This is a pure function: removing the separators from the result and
/// concatenating the lines gives back `symbols` unchanged. A `group_size` at
/// least as large as `line_length` leaves each line as a single group.
#[must_use]
pub fn format_pad(
    symbols: &str,
    group_size: NonZeroUsize,
    line_length: NonZeroUsize,
) -> Vec<String> {
    let chars: Vec<char> = symbols.chars().collect();
    let separator = SEPARATOR.to_string();

    chars
        .chunks(line_length.get())
        .map(|line| {
            line.chunks(group_size.get())
                .map(|group| group.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(separator.as_str())
        })
        .collect()
}

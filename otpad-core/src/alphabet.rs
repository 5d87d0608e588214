// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The fixed symbol set that every generated pad is drawn from.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

/// The 26 uppercase Latin letters, in order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Character inserted between groups within a line.
pub const SEPARATOR: char = ' ';

/// Returns `true` if `c` is one of the pad symbols.
#[must_use]
pub const fn is_symbol(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Position of `c` in [`ALPHABET`], or `None` for anything else.
#[must_use]
pub fn index_of(c: char) -> Option<usize> {
    if is_symbol(c) {
        Some(c as usize - 'A' as usize)
    } else {
        None
    }
}

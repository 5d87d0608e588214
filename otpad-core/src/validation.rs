// File:    validation.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Turns raw user input into checked pad generation parameters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Parameter validation for callers that collect pad settings as text.
//!
//! The generator only accepts `NonZeroUsize` values, so everything that can go
//! wrong with user input is reported here, before any entropy is consumed.

use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};

/// Default number of symbols in a pad.
pub const DEFAULT_LENGTH: NonZeroUsize = non_zero(1000);
/// Default number of symbols per group.
pub const DEFAULT_GROUP_SIZE: NonZeroUsize = non_zero(5);
/// Default number of symbols per line.
pub const DEFAULT_LINE_LENGTH: NonZeroUsize = non_zero(50);

/// The reason a pad parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was empty or only whitespace.
    Missing {
        /// Human-readable name of the field.
        field: &'static str,
    },
    /// The field could not be parsed as an integer.
    NotAnInteger {
        /// Human-readable name of the field.
        field: &'static str,
        /// The rejected input, trimmed.
        value: String,
    },
    /// The field was an integer too large to represent.
    TooLarge {
        /// Human-readable name of the field.
        field: &'static str,
        /// The rejected input, trimmed.
        value: String,
    },
    /// The field was an integer, but zero or negative.
    NotPositive {
        /// Human-readable name of the field.
        field: &'static str,
        /// The rejected input, trimmed.
        value: String,
    },
}

impl ValidationError {
    /// The name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotAnInteger { field, .. }
            | Self::TooLarge { field, .. }
            | Self::NotPositive { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::NotAnInteger { field, value } => {
                write!(f, "{field} must be a whole number, got '{value}'")
            }
            Self::TooLarge { field, value } => write!(f, "{field} is too large, got '{value}'"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be a positive integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checked parameters for a single call to [`crate::pad_generator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadParams {
    /// Total number of symbols to generate.
    pub length: NonZeroUsize,
    /// Number of symbols between separators.
    pub group_size: NonZeroUsize,
    /// Number of symbols per line, separators excluded.
    pub line_length: NonZeroUsize,
}

impl PadParams {
    /// Validates the three raw inputs, reporting the first field that is wrong.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any value is missing, not an integer,
    /// out of range, zero or negative.
    pub fn parse(
        length: &str,
        group_size: &str,
        line_length: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            length: parse_positive("Length", length)?,
            group_size: parse_positive("Group Size", group_size)?,
            line_length: parse_positive("Line Length", line_length)?,
        })
    }

    /// Number of lines a pad with these parameters will occupy.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.length.get().div_ceil(self.line_length.get())
    }
}

impl Default for PadParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            group_size: DEFAULT_GROUP_SIZE,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

/// Parses one field as a strictly positive integer.
///
/// Surrounding whitespace is ignored. Negative numbers are reported as
/// [`ValidationError::NotPositive`] rather than as parse failures, so the user
/// sees the more useful message.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing why `raw` was rejected.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<NonZeroUsize, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    match value.parse::<usize>() {
        Ok(n) => NonZeroUsize::new(n).ok_or_else(|| ValidationError::NotPositive {
            field,
            value: value.to_string(),
        }),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            Err(ValidationError::TooLarge {
                field,
                value: value.to_string(),
            })
        }
        Err(_) if is_negative_integer(value) => Err(ValidationError::NotPositive {
            field,
            value: value.to_string(),
        }),
        Err(_) => Err(ValidationError::NotAnInteger {
            field,
            value: value.to_string(),
        }),
    }
}

// Only called in const items, so a zero fails the build.
const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("default pad parameters must be positive"),
    }
}

fn is_negative_integer(value: &str) -> bool {
    value
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

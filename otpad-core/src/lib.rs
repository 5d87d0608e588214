// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for otpad-core, tying together pad generation, validation and pad files.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # otpad Core Library
//!
//! This library generates letter one-time pads: `length` symbols drawn from
//! `A`..`Z` with the operating system's random number generator, formatted
//! into lines of space-separated groups.
//!
//! ```no_run
//! use otpad_core::{pad_generator, validation::PadParams};
//!
//! let params = PadParams::parse("12", "5", "10")?;
//! let lines = pad_generator::generate(params.length, params.group_size, params.line_length)?;
//! assert_eq!(lines.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// The fixed symbol set pads are drawn from.
pub mod alphabet;
/// Rendering, saving and checking pad text files.
pub mod pad_file;
/// Utilities for generating new one-time pads.
pub mod pad_generator;
pub mod validation;

pub use pad_generator::generate;
pub use validation::{PadParams, ValidationError};

#![deny(missing_docs)]
//! A command-line interface for generating letter one-time pads.

use clap::{Parser, Subcommand};
use log::{debug, error, info};
use otpad_core::pad_file::{self, SaveOutcome};
use otpad_core::pad_generator;
use otpad_core::validation::{DEFAULT_GROUP_SIZE, DEFAULT_LENGTH, DEFAULT_LINE_LENGTH, PadParams};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Print a 1000-letter pad in groups of 5, 50 letters per line\notpad generate\n\n# Save a 250-letter pad in groups of 4, 40 letters per line\notpad generate --length 250 --group-size 4 --line-length 40 --output pad.txt\n\n# Check a saved pad\notpad verify pad.txt\n\nNEVER reuse a one-time pad for more than one message."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new one-time pad
    Generate {
        /// Total number of letters in the pad
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_LENGTH.to_string(),
            allow_hyphen_values = true
        )]
        length: String,

        /// Number of letters in each group
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_GROUP_SIZE.to_string(),
            allow_hyphen_values = true
        )]
        group_size: String,

        /// Number of letters (not counting spaces) per line
        #[arg(
            short = 'w',
            long,
            default_value_t = DEFAULT_LINE_LENGTH.to_string(),
            allow_hyphen_values = true
        )]
        line_length: String,

        /// Save the pad to this file instead of only printing it
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        /// Do not print the pad when saving it to a file
        #[arg(short, long, requires = "output")]
        quiet: bool,
    },
    /// Check that a saved pad contains only letters and separators
    Verify {
        /// Path to the pad file
        #[arg()]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            length,
            group_size,
            line_length,
            output,
            quiet,
        } => {
            let params = PadParams::parse(length, group_size, line_length).unwrap_or_else(|e| {
                error!("Invalid input: {e}");
                std::process::exit(1);
            });

            info!(
                "Generating a pad of {} letters in groups of {}, {} letters per line.",
                params.length, params.group_size, params.line_length
            );
            let lines = pad_generator::generate(
                params.length,
                params.group_size,
                params.line_length,
            )
            .unwrap_or_else(|e| {
                error!("Failed to draw randomness from the operating system: {e}");
                std::process::exit(1);
            });
            debug!("Expected {} line(s), got {}.", params.line_count(), lines.len());

            if !quiet {
                println!("{}", pad_file::render(&lines));
            }

            if let Some(path) = output {
                match pad_file::save_pad(path, &lines) {
                    Ok(SaveOutcome::Saved { bytes }) => {
                        info!("Wrote {bytes} bytes.");
                        println!("Pad successfully saved to: {}", path.display());
                    }
                    Ok(SaveOutcome::NothingToSave) => {
                        println!("No one-time pad generated to save.");
                    }
                    Err(e) => {
                        error!("Error saving file '{}': {e}", path.display());
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Verify { input } => match pad_file::verify_pad(input) {
            Ok(summary) => {
                println!("Pad file: {}", input.display());
                println!("{:-<40}", "");
                println!("Symbols: {}", summary.symbols);
                println!("Lines: {}", summary.lines);
            }
            Err(e) => {
                error!("Pad file '{}' failed verification: {e}", input.display());
                std::process::exit(1);
            }
        },
    }
}

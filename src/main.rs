//! tsx-doctor: brace-balance diagnostics and utility-class cleanup for
//! hand-edited TSX files
//!
//! Grew out of debugging a component file whose JSX braces had gone out of
//! sync during manual merges, and whose Tailwind class strings had picked up
//! stray spaces around hyphens along the way.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

mod commands;
mod repair;
mod scanner;

#[derive(Parser)]
#[command(name = "tsx-doctor")]
#[command(about = "Brace-balance diagnostics and utility-class cleanup", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a file and report the first unmatched closing brace, or the final balance
    Check {
        /// File to scan
        file: PathBuf,

        /// Print scan events as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find candidate closing braces for a construct opened at a known point
    Match {
        /// File to scan
        file: PathBuf,

        /// Line of the opening brace to track (1-based)
        #[arg(long, conflicts_with_all = ["start", "end"])]
        open_line: Option<usize>,

        /// First line of the scan range (1-based, inclusive)
        #[arg(long, requires = "end")]
        start: Option<usize>,

        /// Last line of the scan range (1-based, inclusive)
        #[arg(long, requires = "start")]
        end: Option<usize>,

        /// Print scan events as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Repair utility-class spacing (e.g. "panel - bg" -> "panel-bg") in place
    FixClasses {
        /// File to repair
        file: PathBuf,

        /// Show what would change without writing the file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, json } => {
            commands::check::execute(&file, json)?;
        }

        Commands::Match {
            file,
            open_line,
            start,
            end,
            json,
        } => match (open_line, start, end) {
            (Some(line), None, None) => {
                commands::match_close::execute_from_line(&file, line, json)?;
            }
            (None, Some(start), Some(end)) => {
                commands::match_close::execute_range(&file, start, end, json)?;
            }
            (None, None, None) => {
                anyhow::bail!("Either --open-line or --start/--end must be provided");
            }
            _ => {
                // Remaining combinations are prevented by clap's
                // conflicts_with_all / requires declarations.
                unreachable!()
            }
        },

        Commands::FixClasses { file, dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::fix_classes::execute(&file, dry_run)?;
        }
    }

    Ok(())
}

//! Match command - Locate candidate closing braces for a known opening point
//!
//! Two modes: track the construct opened on a specific line, or scan an
//! inclusive line range and track from the first opening brace inside it.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use crate::scanner::{Scan, ScanEvent};

/// Track the construct opened on `open_line` (1-based)
pub fn execute_from_line(file: &Path, open_line: usize, json: bool) -> Result<()> {
    let content = utils::read_source(file)?;
    let events: Vec<ScanEvent> = Scan::from_open_line(&content, open_line)?.collect();
    report(&content, &events, json)
}

/// Scan only lines `start..=end`, tracking from the first opening brace inside
pub fn execute_range(file: &Path, start: usize, end: usize, json: bool) -> Result<()> {
    let content = utils::read_source(file)?;
    let events: Vec<ScanEvent> = Scan::in_range(&content, start, end)?.collect();
    report(&content, &events, json)
}

fn report(content: &str, events: &[ScanEvent], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(events)?);
        return Ok(());
    }

    let mut candidates = 0;
    for event in events {
        match event {
            ScanEvent::ZeroReturn { line } => {
                candidates += 1;
                println!(
                    "{} line {}: {}",
                    "Possible close at".green(),
                    line,
                    utils::line_text(content, *line)
                );
            }
            ScanEvent::NegativeBalance { line } => {
                println!(
                    "{} line {}: {}",
                    "Balance went negative at".red(),
                    line,
                    utils::line_text(content, *line)
                );
            }
            ScanEvent::Finished { balance } => {
                println!("{}", format!("Scan finished with balance {}", balance).dimmed());
            }
        }
    }

    if candidates == 0 {
        println!("{}", "No candidate closing brace found.".yellow());
    }

    Ok(())
}

//! Check command - Report the first unmatched closing brace, or the final balance

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use crate::scanner::{Scan, ScanEvent};

/// Execute the check command
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let content = utils::read_source(file)?;
    let events: Vec<ScanEvent> = Scan::full(&content).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    for event in &events {
        match event {
            ScanEvent::NegativeBalance { line } => {
                println!(
                    "{} line {}: {}",
                    "Balance went negative at".red(),
                    line,
                    utils::line_text(&content, *line)
                );
            }
            ScanEvent::Finished { balance } => {
                if *balance == 0 {
                    println!("Final balance: {}", "0".green());
                } else {
                    println!(
                        "Final balance: {} ({} unclosed)",
                        balance.to_string().yellow(),
                        balance
                    );
                }
            }
            // A full scan has no trigger, so no zero returns.
            ScanEvent::ZeroReturn { .. } => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_balanced_file() {
        let file = temp_source("fn f() {\n}\n");
        assert!(execute(file.path(), false).is_ok());
    }

    #[test]
    fn test_check_json_output() {
        let file = temp_source("{ } }");
        assert!(execute(file.path(), true).is_ok());
    }

    #[test]
    fn test_check_missing_file() {
        assert!(execute(Path::new("/nonexistent/file.tsx"), false).is_err());
    }
}

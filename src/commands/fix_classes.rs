//! Fix-classes command - Repair utility-class spacing in place

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use super::utils;
use crate::repair::RuleSet;

/// Execute the fix-classes command
pub fn execute(file: &Path, dry_run: bool) -> Result<()> {
    let content = utils::read_source(file)?;
    let fixed = RuleSet::new().apply(&content);

    if fixed == content {
        println!("No changes needed.");
        return Ok(());
    }

    // The rules never add or remove lines, so a line-wise diff is exact.
    let changed: Vec<(usize, &str, &str)> = content
        .lines()
        .zip(fixed.lines())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(i, (before, after))| (i + 1, before, after))
        .collect();

    if dry_run {
        for (line, before, after) in &changed {
            println!("  line {}:", line);
            println!("    - {}", before.trim_end().red());
            println!("    + {}", after.trim_end().green());
        }
        println!("\n{}", "(DRY-RUN) No changes made.".blue());
        return Ok(());
    }

    fs::write(file, &fixed).with_context(|| format!("Failed to write: {}", file.display()))?;

    println!(
        "{} {} ({} line(s) changed)",
        "Fixed:".green(),
        file.display(),
        changed.len()
    );

    Ok(())
}

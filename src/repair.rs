//! Utility-class string repair
//!
//! Normalizes spacing mistakes that crept into Tailwind-style class strings
//! during hand editing: stray spaces around hyphens (`panel - bg`), broken
//! arbitrary values (`bg - [#333]`), detached `hover:` variants, and run-on
//! arbitrary values missing the space after the bracket (`bg-[#333]mx-1`).
//!
//! The rules are ordered and idempotent: nothing a rule produces is matched
//! by any rule on a second pass.

use regex::Regex;

/// The fixed repair rule set, compiled once
pub struct RuleSet {
    /// `panel - bg` -> `panel-bg`, `p - 0.5` -> `p-0.5`
    hyphen_gap: Regex,
    /// `bg - [#333]` -> `bg-[#333]`
    bracket_gap: Regex,
    /// `hover: bg-white` -> `hover:bg-white`
    hover_stitch: Regex,
    /// `bg-[var(--x)]mx-1` -> `bg-[var(--x)] mx-1`
    bracket_run_on: Regex,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            hyphen_gap: Regex::new(r"([a-zA-Z0-9]+)\s-\s([a-zA-Z0-9]+)").unwrap(),
            bracket_gap: Regex::new(r"([a-zA-Z0-9]+)\s-\s(\[)").unwrap(),
            hover_stitch: Regex::new(r"hover:\s+bg-").unwrap(),
            bracket_run_on: Regex::new(r"(bg-\[[^\]]+\])([a-zA-Z])").unwrap(),
        }
    }

    /// Apply every rule in order; a rule that matches nothing is a no-op.
    pub fn apply(&self, content: &str) -> String {
        let content = self.hyphen_gap.replace_all(content, "${1}-${2}");
        let content = self.bracket_gap.replace_all(&content, "${1}-${2}");
        let content = self.hover_stitch.replace_all(&content, "hover:bg-");
        let content = self.bracket_run_on.replace_all(&content, "${1} ${2}");
        content.into_owned()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

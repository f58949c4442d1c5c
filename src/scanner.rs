//! Brace balance scanning
//!
//! Scans a text line by line, keeping a running balance of `{` against `}`,
//! and yields diagnostic events: the point where the balance first goes
//! negative (an unmatched closing brace), and each point where a tracked
//! balance returns to zero (a candidate closing brace for a known opening).
//!
//! Counting is deliberately naive: braces inside string literals, comments,
//! or template syntax are counted like any other character. This matches the
//! debugging workflow the scanner exists for (find roughly where a TSX file
//! went structurally wrong) and keeps it from becoming a parser.

use serde::Serialize;
use std::collections::VecDeque;
use std::iter::Enumerate;
use std::str::Lines;
use thiserror::Error;

/// Invalid scan parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("line numbers are 1-based; 0 is not a valid line")]
    ZeroLine,

    #[error("invalid range: start line {start} is past end line {end}")]
    StartPastEnd { start: usize, end: usize },
}

/// A diagnostic event produced during a scan
///
/// Lines are 1-based, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    /// Balance dipped below zero: an unmatched closing brace sits at or
    /// before this line. Halts the scan.
    NegativeBalance { line: usize },

    /// Balance returned to exactly zero after a tracked rise: a candidate
    /// closing brace for the tracked opening. The scan continues, since
    /// several candidates may appear before a real imbalance surfaces.
    ZeroReturn { line: usize },

    /// End of the scanned region, reached without halting.
    Finished { balance: i64 },
}

/// What starts meaningful tracking of zero-return events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// An opening brace on this 1-based line.
    OpenAtLine(usize),
    /// The first opening brace encountered in the scanned region.
    FirstOpen,
}

/// A one-shot scan over the lines of a text
///
/// Iterates [`ScanEvent`]s lazily; the balance at any point is a pure
/// function of the characters scanned so far and is never reset mid-scan.
///
/// # Example
/// ```
/// use tsx_doctor::scanner::{Scan, ScanEvent};
///
/// let events: Vec<_> = Scan::full("{ } }").collect();
/// assert_eq!(events, vec![ScanEvent::NegativeBalance { line: 1 }]);
/// ```
pub struct Scan<'a> {
    lines: Enumerate<Lines<'a>>,
    range: Option<(usize, usize)>,
    trigger: Option<Trigger>,
    /// In range mode, a negative balance only counts once tracking started.
    gate_negative: bool,
    balance: i64,
    triggered: bool,
    pending: VecDeque<ScanEvent>,
    halted: bool,
    finished: bool,
}

impl<'a> Scan<'a> {
    /// Scan the whole text with no tracking: reports the first negative
    /// balance, or the final balance.
    pub fn full(text: &'a str) -> Self {
        Self::build(text, None, None, false)
    }

    /// Scan the whole text, tracking the construct opened on `open_line`
    /// (1-based). Tracking starts at the first opening brace on that line.
    pub fn from_open_line(text: &'a str, open_line: usize) -> Result<Self, ScanError> {
        if open_line == 0 {
            return Err(ScanError::ZeroLine);
        }
        Ok(Self::build(
            text,
            None,
            Some(Trigger::OpenAtLine(open_line)),
            false,
        ))
    }

    /// Scan only lines `start..=end` (1-based, inclusive), tracking from the
    /// first opening brace inside the range. Characters outside the range
    /// are ignored entirely; an `end` past the last line is not an error.
    pub fn in_range(text: &'a str, start: usize, end: usize) -> Result<Self, ScanError> {
        if start == 0 || end == 0 {
            return Err(ScanError::ZeroLine);
        }
        if start > end {
            return Err(ScanError::StartPastEnd { start, end });
        }
        Ok(Self::build(
            text,
            Some((start, end)),
            Some(Trigger::FirstOpen),
            true,
        ))
    }

    fn build(
        text: &'a str,
        range: Option<(usize, usize)>,
        trigger: Option<Trigger>,
        gate_negative: bool,
    ) -> Self {
        Self {
            lines: text.lines().enumerate(),
            range,
            trigger,
            gate_negative,
            balance: 0,
            triggered: false,
            pending: VecDeque::new(),
            halted: false,
            finished: false,
        }
    }

    fn scan_line(&mut self, line_no: usize, line: &str) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    self.balance += 1;
                    if !self.triggered {
                        match self.trigger {
                            Some(Trigger::OpenAtLine(n)) if line_no == n => self.triggered = true,
                            Some(Trigger::FirstOpen) => self.triggered = true,
                            _ => {}
                        }
                    }
                }
                '}' => {
                    self.balance -= 1;
                    if self.balance < 0 && (self.triggered || !self.gate_negative) {
                        self.pending
                            .push_back(ScanEvent::NegativeBalance { line: line_no });
                        self.halted = true;
                        self.finished = true;
                        return;
                    }
                    if self.triggered && self.balance == 0 {
                        self.pending.push_back(ScanEvent::ZeroReturn { line: line_no });
                    }
                }
                _ => {}
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if !self.halted {
            self.pending.push_back(ScanEvent::Finished {
                balance: self.balance,
            });
        }
    }
}

impl Iterator for Scan<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.finished {
                return None;
            }

            match self.lines.next() {
                Some((idx, line)) => {
                    let line_no = idx + 1;
                    if let Some((start, end)) = self.range {
                        if line_no < start {
                            continue;
                        }
                        if line_no > end {
                            self.finish();
                            continue;
                        }
                    }
                    self.scan_line(line_no, line);
                }
                None => self.finish(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(scan: Scan) -> Vec<ScanEvent> {
        scan.collect()
    }

    #[test]
    fn test_balanced_input_final_balance_zero() {
        let text = "function f() {\n  if (x) {\n    y();\n  }\n}\n";
        assert_eq!(
            events(Scan::full(text)),
            vec![ScanEvent::Finished { balance: 0 }]
        );
    }

    #[test]
    fn test_unmatched_close_reported_and_halts() {
        // Balance sequence 1, 0, -1: the second closing brace is unmatched.
        assert_eq!(
            events(Scan::full("{ } }")),
            vec![ScanEvent::NegativeBalance { line: 1 }]
        );
    }

    #[test]
    fn test_negative_detected_within_a_line() {
        // The line nets to zero, but the balance dipped below it mid-line.
        assert_eq!(
            events(Scan::full("} {")),
            vec![ScanEvent::NegativeBalance { line: 1 }]
        );
    }

    #[test]
    fn test_negative_reports_first_offending_line() {
        let text = "{\n}\n}\n{\n";
        assert_eq!(
            events(Scan::full(text)),
            vec![ScanEvent::NegativeBalance { line: 3 }]
        );
    }

    #[test]
    fn test_positive_final_balance() {
        let text = "{\n{\n}\n";
        assert_eq!(
            events(Scan::full(text)),
            vec![ScanEvent::Finished { balance: 1 }]
        );
    }

    #[test]
    fn test_tracked_open_single_zero_return() {
        // Tracking from the first character: exactly one zero return, at the
        // final closing brace (balance 1, 2, 1, 0).
        let scan = Scan::from_open_line("{ { } }", 1).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 1 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_tracked_open_multiline() {
        let text = "const f = () => {\n  {\n  }\n};\nrest();\n";
        let scan = Scan::from_open_line(text, 1).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 4 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_tracked_open_multiple_candidates() {
        // Every return to zero after the trigger is a candidate.
        let text = "{}\n{}\n";
        let scan = Scan::from_open_line(text, 1).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 1 },
                ScanEvent::ZeroReturn { line: 2 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_tracked_open_no_zero_return_before_trigger() {
        // Braces before the trigger line keep counting toward the balance
        // but produce no zero-return events.
        let text = "{}\n{}\n";
        let scan = Scan::from_open_line(text, 2).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 2 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_tracked_open_negative_not_gated() {
        let text = "}\n{\n";
        let scan = Scan::from_open_line(text, 2).unwrap();
        assert_eq!(events(scan), vec![ScanEvent::NegativeBalance { line: 1 }]);
    }

    #[test]
    fn test_trigger_line_without_open_brace_never_fires() {
        let scan = Scan::from_open_line("{}\n", 5).unwrap();
        assert_eq!(events(scan), vec![ScanEvent::Finished { balance: 0 }]);
    }

    #[test]
    fn test_range_ignores_imbalance_outside() {
        // Heavy imbalance before and after the range must not leak in.
        let text = "}}}}\n{\n}\n}}}}\n";
        let scan = Scan::in_range(text, 2, 3).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 3 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_range_negative_only_after_trigger() {
        // A closing brace before any opening brace in the range does not
        // report; once tracking started, dipping below zero does. Balance
        // runs -1, 0 (trigger), -1.
        let text = "}\n{\n}\n";
        let scan = Scan::in_range(text, 1, 3).unwrap();
        assert_eq!(events(scan), vec![ScanEvent::NegativeBalance { line: 3 }]);
    }

    #[test]
    fn test_range_zero_return_then_negative() {
        let text = "{\n}\n}\n";
        let scan = Scan::in_range(text, 1, 3).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 2 },
                ScanEvent::NegativeBalance { line: 3 },
            ]
        );
    }

    #[test]
    fn test_range_end_past_eof_is_ok() {
        let scan = Scan::in_range("{\n}\n", 1, 100).unwrap();
        assert_eq!(
            events(scan),
            vec![
                ScanEvent::ZeroReturn { line: 2 },
                ScanEvent::Finished { balance: 0 },
            ]
        );
    }

    #[test]
    fn test_range_rejects_start_past_end() {
        assert_eq!(
            Scan::in_range("{}", 5, 2).err(),
            Some(ScanError::StartPastEnd { start: 5, end: 2 })
        );
    }

    #[test]
    fn test_zero_line_rejected() {
        assert_eq!(Scan::from_open_line("{}", 0).err(), Some(ScanError::ZeroLine));
        assert_eq!(Scan::in_range("{}", 0, 3).err(), Some(ScanError::ZeroLine));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            events(Scan::full("")),
            vec![ScanEvent::Finished { balance: 0 }]
        );
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&ScanEvent::ZeroReturn { line: 42 }).unwrap();
        assert_eq!(json, r#"{"event":"zero_return","line":42}"#);
    }
}

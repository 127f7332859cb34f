use serde::Serialize;

use super::types::{Counters, Cursor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub total_input_count: usize,
    /// Rounded percentage of correct keystrokes; 100 before any input.
    pub accuracy: u8,
}

impl Statistics {
    pub(crate) fn from_counters(counters: Counters) -> Self {
        let total = counters.correct + counters.incorrect;
        Self {
            correct_count: counters.correct,
            incorrect_count: counters.incorrect,
            total_input_count: total,
            accuracy: rounded_percent(counters.correct, total).unwrap_or(100),
        }
    }
}

/// Share of pattern characters behind the cursor, as a rounded percentage.
///
/// Totals are taken over the current active patterns, so a pattern switch
/// changes the denominator. An empty phrase reports 0.
pub(crate) fn progress_percent(patterns: &[String], cursor: Cursor) -> u8 {
    let total: usize = patterns.iter().map(|p| p.chars().count()).sum();
    let passed = cursor.mora_index.min(patterns.len());
    let consumed: usize = patterns[..passed]
        .iter()
        .map(|p| p.chars().count())
        .sum::<usize>()
        + cursor.pattern_offset;
    rounded_percent(consumed, total).unwrap_or(0)
}

/// `round(part / whole * 100)` with halves rounded up; `None` when `whole == 0`.
fn rounded_percent(part: usize, whole: usize) -> Option<u8> {
    if whole == 0 {
        return None;
    }
    let pct = (part * 200 + whole) / (whole * 2);
    Some(pct.min(100) as u8)
}

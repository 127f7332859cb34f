use serde::Serialize;

use super::statistics::Statistics;
use super::types::{Cursor, TypingStatus};
use super::TypingJudge;

/// Everything a display layer reads after a keystroke, captured at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeSnapshot {
    pub status: TypingStatus,
    pub cursor: Cursor,
    pub current_mora: Option<String>,
    pub current_pattern: Option<String>,
    pub expected_char: Option<char>,
    pub typed: String,
    pub remaining: String,
    pub progress: u8,
    pub statistics: Statistics,
    /// Source text per mora, index-aligned with `patterns`.
    pub labels: Vec<String>,
    pub patterns: Vec<String>,
}

impl TypingJudge {
    pub fn snapshot(&self) -> JudgeSnapshot {
        let (typed, remaining) = self.typed_and_remaining();
        JudgeSnapshot {
            status: self.status(),
            cursor: self.cursor(),
            current_mora: self.current_mora().map(|m| m.source().to_string()),
            current_pattern: self.current_pattern().map(str::to_string),
            expected_char: self.expected_char(),
            typed,
            remaining,
            progress: self.progress(),
            statistics: self.statistics(),
            labels: self
                .phrase()
                .labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            patterns: self.active_patterns().to_vec(),
        }
    }
}

//! Incremental keystroke judge for romaji typing practice.
//!
//! `TypingJudge` owns one target phrase and evaluates each key press against
//! every accepted spelling of the current mora, switching the displayed
//! spelling once typed input rules the default out. Display layers read the
//! observers (or a [`JudgeSnapshot`]) after each `judge()` call.

mod judge;
mod snapshot;
mod statistics;
mod types;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use tracing::debug;

use kana_core::resolve::geminate_consonant;
use kana_core::segment::{Mora, Phrase, Segmenter};

pub use snapshot::JudgeSnapshot;
pub use statistics::Statistics;
pub use types::{Cursor, InputEvent, InputResult, JudgeOptions, KeyInput, TypingStatus};

use statistics::progress_percent;
use types::Counters;

/// Judging state for one practice phrase.
///
/// Not synchronized: callers deliver keystrokes one at a time from a single
/// input loop.
pub struct TypingJudge {
    phrase: Phrase,
    options: JudgeOptions,

    /// Active spelling per mora. Same length as `phrase`; entries are only overwritten.
    patterns: Vec<String>,
    cursor: Cursor,
    status: TypingStatus,
    counters: Counters,
    history: Vec<InputEvent>,
}

impl TypingJudge {
    /// Judge for `text` using the global romaji table and settings.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, JudgeOptions::from_settings())
    }

    pub fn with_options(text: &str, options: JudgeOptions) -> Self {
        Self::from_phrase(Segmenter::global().segment(text), options)
    }

    /// Judge for an already segmented phrase (e.g. from a custom table).
    pub fn from_phrase(phrase: Phrase, options: JudgeOptions) -> Self {
        let patterns = initial_patterns(&phrase);
        debug!(
            text = %phrase.source(),
            morae = phrase.len(),
            ?patterns,
            "typing judge created"
        );
        Self {
            status: initial_status(&phrase),
            phrase,
            options,
            patterns,
            cursor: Cursor::default(),
            counters: Counters::default(),
            history: Vec::new(),
        }
    }

    /// Return to the state right after construction.
    pub fn reset(&mut self) {
        self.patterns = initial_patterns(&self.phrase);
        self.cursor = Cursor::default();
        self.status = initial_status(&self.phrase);
        self.counters = Counters::default();
        self.history.clear();
        debug!("typing judge reset");
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn options(&self) -> JudgeOptions {
        self.options
    }

    pub fn status(&self) -> TypingStatus {
        self.status
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_completed(&self) -> bool {
        self.status == TypingStatus::Completed
    }

    pub fn active_patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn current_mora(&self) -> Option<&Mora> {
        self.phrase.get(self.cursor.mora_index)
    }

    pub fn current_pattern(&self) -> Option<&str> {
        self.patterns
            .get(self.cursor.mora_index)
            .map(String::as_str)
    }

    pub fn expected_char(&self) -> Option<char> {
        self.current_pattern()?
            .chars()
            .nth(self.cursor.pattern_offset)
    }

    /// Percentage of active-pattern characters already typed.
    pub fn progress(&self) -> u8 {
        progress_percent(&self.patterns, self.cursor)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_counters(self.counters)
    }

    /// Every `judge()` outcome in call order, including post-completion input.
    pub fn input_history(&self) -> &[InputEvent] {
        &self.history
    }

    /// Active patterns split at the cursor: (already typed, still to type).
    pub fn typed_and_remaining(&self) -> (String, String) {
        let mut typed = String::new();
        let mut remaining = String::new();
        for (i, pattern) in self.patterns.iter().enumerate() {
            match i.cmp(&self.cursor.mora_index) {
                Ordering::Less => typed.push_str(pattern),
                Ordering::Equal => {
                    let split = pattern
                        .char_indices()
                        .nth(self.cursor.pattern_offset)
                        .map_or(pattern.len(), |(byte, _)| byte);
                    typed.push_str(&pattern[..split]);
                    remaining.push_str(&pattern[split..]);
                }
                Ordering::Greater => remaining.push_str(pattern),
            }
        }
        (typed, remaining)
    }
}

fn initial_status(phrase: &Phrase) -> TypingStatus {
    if phrase.is_empty() {
        TypingStatus::Completed
    } else {
        TypingStatus::Waiting
    }
}

/// Default spellings, with each っ shown as the consonant it doubles.
///
/// A っ followed by another っ, a special glyph, a vowel or a small kana keeps
/// its table spelling.
fn initial_patterns(phrase: &Phrase) -> Vec<String> {
    let mut patterns = phrase.default_patterns();
    let morae = phrase.morae();
    for i in 0..morae.len().saturating_sub(1) {
        let next = &morae[i + 1];
        if !morae[i].is_sokuon() || next.is_sokuon() {
            continue;
        }
        if let Some(consonant) = geminate_consonant(&patterns[i + 1]) {
            if judge::doubles_into(next, consonant) {
                patterns[i] = consonant.to_string();
            }
        }
    }
    patterns
}

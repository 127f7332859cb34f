use serde::Serialize;

use kana_core::settings::settings;

/// Lifecycle of one practice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingStatus {
    /// Nothing typed yet.
    Waiting,
    InProgress,
    /// Cursor is past the last mora. Terminal until `reset()`.
    Completed,
}

/// Position inside the phrase: which mora, and how far into its active pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub mora_index: usize,
    /// Offset in characters into the active pattern of `mora_index`.
    pub pattern_offset: usize,
}

/// Outcome of one `judge()` call, also kept as the history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputEvent {
    pub is_correct: bool,
    /// Pattern character a correct key satisfied (after any switch), or the
    /// character that was expected for an incorrect one. `None` once completed.
    pub expected_char: Option<char>,
    pub input_char: char,
    /// Mora index after the keystroke was applied.
    pub position: usize,
}

pub type InputResult = InputEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JudgeOptions {
    /// Match ASCII letters regardless of case.
    pub ignore_case: bool,
}

impl JudgeOptions {
    /// Options taken from the global settings.
    pub fn from_settings() -> Self {
        Self {
            ignore_case: settings().judge.ignore_case,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    pub(crate) correct: usize,
    pub(crate) incorrect: usize,
}

impl Counters {
    pub(crate) fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }
}

/// One physical key press, already mapped from hardware to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Space,
    Tab,
}

impl KeyInput {
    /// Parse a DOM-style key name (`"Enter"`, `"Space"`, `"a"`, ...).
    ///
    /// Returns `None` for keys that cannot be typed into a phrase
    /// (modifiers, arrows, function keys).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" | "NumpadEnter" | "\n" => Some(Self::Enter),
            "Space" | " " => Some(Self::Space),
            "Tab" | "\t" => Some(Self::Tab),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Char(c) => c,
            Self::Enter => '\n',
            Self::Space => ' ',
            Self::Tab => '\t',
        }
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        match c {
            '\n' => Self::Enter,
            ' ' => Self::Space,
            '\t' => Self::Tab,
            c => Self::Char(c),
        }
    }
}

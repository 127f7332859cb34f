//! Splits target text into morae by greedy longest match against the romaji table.
//!
//! Segmentation is total: every input character ends up in exactly one
//! mora, and characters the table does not know pass through as literal
//! units. There is no backtracking, so label lists derived from the
//! source text stay index-aligned with the pattern list.

use serde::Serialize;
use tracing::debug;

use crate::romaji::{RomajiTable, MAX_UNIT_LEN};
use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoraKind {
    /// A single mapped kana.
    Kana,
    /// A multi-character mapped cluster such as きゃ.
    Youon,
    /// The geminate mark っ.
    Sokuon,
    /// Newline, long-vowel mark, punctuation or space: exact keystroke only.
    Special,
    /// An unmapped character typed as itself.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mora {
    source: String,
    kind: MoraKind,
    candidates: Vec<String>,
}

impl Mora {
    fn new(source: String, kind: MoraKind, candidates: Vec<String>) -> Self {
        debug_assert!(!candidates.is_empty());
        Self {
            source,
            kind,
            candidates,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> MoraKind {
        self.kind
    }

    /// Accepted spellings in display-preference order. Never empty.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn default_pattern(&self) -> &str {
        &self.candidates[0]
    }

    pub fn is_special(&self) -> bool {
        self.kind == MoraKind::Special
    }

    pub fn is_sokuon(&self) -> bool {
        self.kind == MoraKind::Sokuon
    }
}

/// Ordered morae of one target text, fixed for its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    morae: Vec<Mora>,
}

impl Phrase {
    pub fn morae(&self) -> &[Mora] {
        &self.morae
    }

    pub fn get(&self, index: usize) -> Option<&Mora> {
        self.morae.get(index)
    }

    pub fn len(&self) -> usize {
        self.morae.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morae.is_empty()
    }

    /// Concatenated source text; equal to the segmented input.
    pub fn source(&self) -> String {
        self.morae.iter().map(|m| m.source.as_str()).collect()
    }

    /// Display labels, one per mora.
    pub fn labels(&self) -> Vec<&str> {
        self.morae.iter().map(|m| m.source.as_str()).collect()
    }

    pub fn default_patterns(&self) -> Vec<String> {
        self.morae
            .iter()
            .map(|m| m.default_pattern().to_string())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Phrase {
    type Item = &'a Mora;
    type IntoIter = std::slice::Iter<'a, Mora>;

    fn into_iter(self) -> Self::IntoIter {
        self.morae.iter()
    }
}

pub struct Segmenter<'a> {
    table: &'a RomajiTable,
    special_glyphs: &'a [char],
}

impl<'a> Segmenter<'a> {
    pub fn new(table: &'a RomajiTable, special_glyphs: &'a [char]) -> Self {
        Self {
            table,
            special_glyphs,
        }
    }

    pub fn segment(&self, text: &str) -> Phrase {
        let chars: Vec<char> = text.chars().collect();
        let mut morae = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let max_len = MAX_UNIT_LEN.min(chars.len() - i);
            let matched = (1..=max_len).rev().find_map(|len| {
                let unit: String = chars[i..i + len].iter().collect();
                self.table
                    .get(&unit)
                    .map(|entry| (len, unit, entry.candidates.clone()))
            });

            match matched {
                Some((len, unit, candidates)) => {
                    let kind = self.classify(&unit, len);
                    morae.push(Mora::new(unit, kind, candidates));
                    i += len;
                }
                None => {
                    let ch = chars[i];
                    debug!(?ch, index = i, "unmapped character passed through");
                    let kind = if self.special_glyphs.contains(&ch) {
                        MoraKind::Special
                    } else {
                        MoraKind::Literal
                    };
                    morae.push(Mora::new(ch.to_string(), kind, vec![ch.to_string()]));
                    i += 1;
                }
            }
        }

        Phrase { morae }
    }

    fn classify(&self, unit: &str, len: usize) -> MoraKind {
        if len > 1 {
            return MoraKind::Youon;
        }
        match unit.chars().next() {
            Some('っ') => MoraKind::Sokuon,
            Some(c) if self.special_glyphs.contains(&c) => MoraKind::Special,
            _ => MoraKind::Kana,
        }
    }
}

impl Segmenter<'static> {
    /// Segmenter over the global table and settings.
    pub fn global() -> Self {
        Self::new(RomajiTable::global(), settings().segment.special_glyphs())
    }
}

/// Segment `text` with the global table.
pub fn segment(text: &str) -> Phrase {
    Segmenter::global().segment(text)
}

/// Default spelling of every mora in `text`.
pub fn kana_to_romaji(text: &str) -> Vec<String> {
    segment(text).default_patterns()
}

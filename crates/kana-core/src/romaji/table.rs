use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_romaji_toml, RomajiConfigError};

/// Longest kana unit (in characters) the table may contain.
pub const MAX_UNIT_LEN: usize = 3;

const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// One kana unit and its accepted spellings, default first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaEntry {
    pub kana: String,
    pub candidates: Vec<String>,
}

impl KanaEntry {
    pub fn default_romaji(&self) -> &str {
        // parse_romaji_toml rejects empty candidate lists
        &self.candidates[0]
    }
}

/// Immutable kana → romaji table, sorted by unit.
#[derive(Debug, Clone)]
pub struct RomajiTable {
    entries: Vec<KanaEntry>,
}

impl RomajiTable {
    pub(super) fn from_sorted(entries: Vec<KanaEntry>) -> Self {
        Self { entries }
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let table = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            debug!(
                units = table.len(),
                custom = CUSTOM_TOML.get().is_some(),
                "romaji table loaded"
            );
            table
        })
    }

    pub fn get(&self, unit: &str) -> Option<&KanaEntry> {
        self.entries
            .binary_search_by(|e| e.kana.as_str().cmp(unit))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.get(unit).is_some()
    }

    pub fn candidates_for(&self, unit: &str) -> Option<&[String]> {
        self.get(unit).map(|e| e.candidates.as_slice())
    }

    pub fn default_romaji(&self, unit: &str) -> Option<&str> {
        self.get(unit).map(KanaEntry::default_romaji)
    }

    /// All units with at least one candidate starting with `partial`.
    pub fn entries_matching_prefix<'a>(
        &'a self,
        partial: &'a str,
    ) -> impl Iterator<Item = &'a KanaEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.candidates.iter().any(|c| c.starts_with(partial)))
    }

    /// True if `partial` is a prefix of some spelling of `unit`.
    pub fn is_valid_input(&self, unit: &str, partial: &str) -> bool {
        self.candidates_for(unit)
            .is_some_and(|cands| cands.iter().any(|c| c.starts_with(partial)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KanaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::table::{KanaEntry, RomajiTable, MAX_UNIT_LEN};

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("kana unit must be 1 to {max} characters: {0:?}", max = MAX_UNIT_LEN)]
    UnitLength(String),
    #[error("no candidates for unit: {0}")]
    NoCandidates(String),
    #[error("empty candidate for unit: {0}")]
    EmptyCandidate(String),
    #[error("duplicate candidate {candidate:?} for unit {unit}")]
    DuplicateCandidate { unit: String, candidate: String },
    #[error("non-ASCII candidate {candidate:?} for unit {unit}")]
    NonAsciiCandidate { unit: String, candidate: String },
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated [`RomajiTable`].
///
/// Candidate order inside each array is preserved; the first candidate is
/// the unit's default spelling.
pub fn parse_romaji_toml(toml_str: &str) -> Result<RomajiTable, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut entries = Vec::with_capacity(config.mappings.len());
    for (unit, candidates) in config.mappings {
        let unit_len = unit.chars().count();
        if unit_len == 0 || unit_len > MAX_UNIT_LEN {
            return Err(RomajiConfigError::UnitLength(unit));
        }
        if candidates.is_empty() {
            return Err(RomajiConfigError::NoCandidates(unit));
        }
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if candidate.is_empty() {
                return Err(RomajiConfigError::EmptyCandidate(unit));
            }
            if !candidate.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
                return Err(RomajiConfigError::NonAsciiCandidate {
                    unit,
                    candidate: candidate.clone(),
                });
            }
            if !seen.insert(candidate.as_str()) {
                return Err(RomajiConfigError::DuplicateCandidate {
                    unit,
                    candidate: candidate.clone(),
                });
            }
        }
        entries.push(KanaEntry {
            kana: unit,
            candidates,
        });
    }

    // BTreeMap iteration is already sorted by unit, which binary search relies on
    Ok(RomajiTable::from_sorted(entries))
}

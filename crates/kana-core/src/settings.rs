//! Judge and segmenter settings.
//!
//! `[judge] ignore_case` picks the default [`JudgeSettings`] for new judges;
//! `[segment] special_glyphs` lists the characters the segmenter marks as
//! exact-keystroke morae. The embedded `default_settings.toml` applies unless a
//! custom document is installed before the first [`settings()`] lookup.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("custom settings must be installed before the first lookup")]
    AlreadyInitialized,
}

/// Install a custom settings document. Validated now; rejected once
/// [`settings()`] has been read or another document was installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Settings shared by every judge and segmenter in the process.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML.get();
        let source = custom.map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        let loaded = parse_settings_toml(source).expect("settings TOML must be valid");
        debug!(
            custom = custom.is_some(),
            ignore_case = loaded.judge.ignore_case,
            special_glyphs = loaded.segment.special_glyphs().len(),
            "settings loaded"
        );
        loaded
    })
}

/// The embedded `default_settings.toml`, for export.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub judge: JudgeSettings,
    pub segment: SegmentSettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JudgeSettings {
    pub ignore_case: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSettings {
    special_glyphs: Vec<String>,
    #[serde(skip)]
    special_glyphs_parsed: Vec<char>,
}

impl SegmentSettings {
    /// Glyphs that must be matched by an exact keystroke.
    pub fn special_glyphs(&self) -> &[char] {
        &self.special_glyphs_parsed
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.segment.special_glyphs_parsed = parse_special_glyphs(&s.segment.special_glyphs)?;
    Ok(s)
}

fn parse_special_glyphs(raw: &[String]) -> Result<Vec<char>, SettingsError> {
    if raw.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "segment.special_glyphs".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let mut glyphs = Vec::with_capacity(raw.len());
    for (idx, glyph) in raw.iter().enumerate() {
        let mut chars = glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => glyphs.push(c),
            _ => {
                return Err(SettingsError::InvalidValue {
                    field: format!("segment.special_glyphs[{idx}]"),
                    reason: format!("{glyph:?} must be exactly one character"),
                })
            }
        }
    }
    Ok(glyphs)
}

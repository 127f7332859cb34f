//! Kana-to-romaji transliteration table.
//!
//! Each kana unit maps to an ordered list of spellings a typist may use.
//! The first spelling is the one shown before any key has been pressed;
//! the others become active once typed input rules the default out.

mod config;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use table::{default_toml, KanaEntry, RomajiTable, MAX_UNIT_LEN};

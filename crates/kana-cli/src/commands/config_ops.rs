use std::fs;
use std::path::Path;
use std::process;

use kana_core::romaji::{self, RomajiConfigError, RomajiTable};
use kana_core::settings::{self, SettingsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Romaji(#[from] RomajiConfigError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read_file(path: &Path) -> Result<String, ConfigFileError> {
    fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Validate a romaji TOML file and describe it in one line.
pub fn check_romaji_file(path: &Path) -> Result<String, ConfigFileError> {
    let table = romaji::parse_romaji_toml(&read_file(path)?)?;
    Ok(format!("OK: {} mappings", table.len()))
}

/// Validate a settings TOML file and describe it in one line.
pub fn check_settings_file(path: &Path) -> Result<String, ConfigFileError> {
    let s = settings::parse_settings_toml(&read_file(path)?)?;
    Ok(format!(
        "OK: judge.ignore_case={}, segment.special_glyphs={}",
        s.judge.ignore_case,
        s.segment.special_glyphs().len()
    ))
}

/// Install custom configuration files before anything reads the globals.
pub fn install_custom(
    romaji_file: Option<&Path>,
    settings_file: Option<&Path>,
) -> Result<(), ConfigFileError> {
    if let Some(path) = romaji_file {
        RomajiTable::init_custom(read_file(path)?)?;
    }
    if let Some(path) = settings_file {
        settings::init_custom(read_file(path)?)?;
    }
    Ok(())
}

pub fn install_custom_cmd(romaji_file: Option<&str>, settings_file: Option<&str>) {
    die!(
        install_custom(romaji_file.map(Path::new), settings_file.map(Path::new)),
        "Error: {}"
    );
}

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let summary = die!(check_romaji_file(Path::new(file)), "Error: {}");
    println!("{summary}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let summary = die!(check_settings_file(Path::new(file)), "Error: {}");
    println!("{summary}");
}

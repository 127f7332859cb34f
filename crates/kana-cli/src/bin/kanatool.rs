use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, judge_ops, table_ops};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji typing judge diagnostics")]
struct Cli {
    /// Custom romaji table TOML (replaces the embedded table)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings TOML (replaces the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split text into morae and list their spellings
    Segment {
        /// Target text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show every spelling of one kana unit
    Candidates {
        /// Kana unit (1 to 3 characters)
        kana: String,
    },
    /// List units with a spelling starting with the given prefix
    Matching {
        /// Romaji prefix
        partial: String,
    },
    /// Replay keystrokes against a target text
    Judge {
        /// Target text
        text: String,
        /// Keys to type (escapes: \n, \t, \s, \\)
        keys: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded romaji table TOML
    RomajiExport,
    /// Validate a romaji table TOML file
    RomajiValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the embedded settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    config_ops::install_custom_cmd(cli.romaji.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Segment { text, json } => table_ops::segment_cmd(&text, json),
        Command::Candidates { kana } => table_ops::candidates_cmd(&kana),
        Command::Matching { partial } => table_ops::matching_cmd(&partial),
        Command::Judge { text, keys, json } => judge_ops::judge_cmd(&text, &keys, json),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

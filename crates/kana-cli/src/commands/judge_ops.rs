use std::process;

use serde::Serialize;

use kana_session::{InputResult, JudgeSnapshot, TypingJudge};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("unknown escape \\{0} at key {1}")]
    UnknownEscape(char, usize),
    #[error("trailing backslash")]
    TrailingBackslash,
}

/// Split a key string into keystrokes. `\n`, `\t`, `\s` (space) and `\\` are escapes.
pub fn parse_key_sequence(keys: &str) -> Result<Vec<char>, KeyParseError> {
    let mut out = Vec::new();
    let mut chars = keys.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(KeyParseError::UnknownEscape(other, out.len())),
            None => return Err(KeyParseError::TrailingBackslash),
        }
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
pub struct Replay {
    pub results: Vec<InputResult>,
    pub snapshot: JudgeSnapshot,
}

/// Feed `keys` to a fresh judge for `text`.
pub fn replay(text: &str, keys: &[char]) -> Replay {
    let mut judge = TypingJudge::new(text);
    let results = keys.iter().map(|&k| judge.judge(k)).collect();
    Replay {
        results,
        snapshot: judge.snapshot(),
    }
}

fn show_char(c: Option<char>) -> String {
    match c {
        Some(' ') => "' '".to_string(),
        Some(c) => c.escape_debug().to_string(),
        None => "-".to_string(),
    }
}

pub fn format_replay(replay: &Replay) -> String {
    let mut out = String::new();
    for (i, r) in replay.results.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<4} {}  expected={:<4} mora={}\n",
            i + 1,
            show_char(Some(r.input_char)),
            if r.is_correct { "ok" } else { "NG" },
            show_char(r.expected_char),
            r.position,
        ));
    }
    let snap = &replay.snapshot;
    let stats = &snap.statistics;
    out.push_str(&format!(
        "typed: {}|{}\n",
        snap.typed.escape_debug(),
        snap.remaining.escape_debug()
    ));
    out.push_str(&format!(
        "status={:?} correct={} incorrect={} accuracy={}% progress={}%\n",
        snap.status, stats.correct_count, stats.incorrect_count, stats.accuracy, snap.progress,
    ));
    out
}

pub fn judge_cmd(text: &str, keys: &str, json: bool) {
    let keys = parse_key_sequence(keys).unwrap_or_else(|e| {
        eprintln!("Error parsing keys: {e}");
        process::exit(1);
    });
    let replay = replay(text, &keys);
    if json {
        match serde_json::to_string_pretty(&replay) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error serializing replay: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", format_replay(&replay));
    }
}

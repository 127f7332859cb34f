use std::process;

use unicode_width::UnicodeWidthStr;

use kana_core::romaji::RomajiTable;
use kana_core::segment::{MoraKind, Phrase, Segmenter};

fn kind_label(kind: MoraKind) -> &'static str {
    match kind {
        MoraKind::Kana => "kana",
        MoraKind::Youon => "youon",
        MoraKind::Sokuon => "sokuon",
        MoraKind::Special => "special",
        MoraKind::Literal => "literal",
    }
}

/// Source text with control glyphs spelled out (`\n`, `' '`).
fn printable(source: &str) -> String {
    match source {
        " " => "' '".to_string(),
        "　" => "'　'".to_string(),
        _ => source.escape_debug().to_string(),
    }
}

fn pad_to(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// One line per mora: index, source, kind and candidates, columns aligned by display width.
pub fn format_phrase(phrase: &Phrase) -> String {
    let sources: Vec<String> = phrase.morae().iter().map(|m| printable(m.source())).collect();
    let width = sources
        .iter()
        .map(|s| UnicodeWidthStr::width(s.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, (mora, source)) in phrase.morae().iter().zip(&sources).enumerate() {
        let candidates: Vec<String> = mora.candidates().iter().map(|c| printable(c)).collect();
        out.push_str(&format!(
            "{:>3}  {}  {:<7}  {}\n",
            i,
            pad_to(source, width),
            kind_label(mora.kind()),
            candidates.join(", "),
        ));
    }
    out
}

pub fn segment_cmd(text: &str, json: bool) {
    let phrase = Segmenter::global().segment(text);
    if json {
        match serde_json::to_string_pretty(phrase.morae()) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error serializing morae: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", format_phrase(&phrase));
        println!("{} morae", phrase.len());
    }
}

/// Candidates of `kana`, default first, or `None` when the table has no such unit.
pub fn format_candidates(table: &RomajiTable, kana: &str) -> Option<String> {
    let candidates = table.candidates_for(kana)?;
    let mut out = String::new();
    for (i, c) in candidates.iter().enumerate() {
        let marker = if i == 0 { "  (default)" } else { "" };
        out.push_str(&format!("#{:>2}: {}{}\n", i + 1, c, marker));
    }
    Some(out)
}

pub fn candidates_cmd(kana: &str) {
    match format_candidates(RomajiTable::global(), kana) {
        Some(out) => print!("{out}"),
        None => {
            eprintln!("Not in table: {kana}");
            process::exit(1);
        }
    }
}

/// Every unit with a spelling that starts with `partial`.
pub fn format_matching(table: &RomajiTable, partial: &str) -> String {
    let entries: Vec<_> = table.entries_matching_prefix(partial).collect();
    let width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.kana.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for entry in &entries {
        out.push_str(&format!(
            "{}  {}\n",
            pad_to(&entry.kana, width),
            entry.candidates.join(", ")
        ));
    }
    out
}

pub fn matching_cmd(partial: &str) {
    let out = format_matching(RomajiTable::global(), partial);
    if out.is_empty() {
        println!("No units match {partial:?}");
    } else {
        print!("{out}");
    }
}

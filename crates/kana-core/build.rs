use toml::Value;

const SETTINGS: &str = "src/default_settings.toml";
const ROMAJI: &str = "src/romaji/default_romaji.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    println!("cargo:rerun-if-changed={ROMAJI}");

    check_settings(&parse(SETTINGS, include_str!("src/default_settings.toml")));
    check_romaji(&parse(ROMAJI, include_str!("src/romaji/default_romaji.toml")));
}

fn parse(path: &str, content: &str) -> Value {
    content
        .parse::<Value>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn check_settings(doc: &Value) {
    for section in ["judge", "segment"] {
        if !doc.get(section).is_some_and(Value::is_table) {
            panic!("{SETTINGS}: missing [{section}] table");
        }
    }
    if !doc["judge"].get("ignore_case").is_some_and(Value::is_bool) {
        panic!("{SETTINGS}: judge.ignore_case must be a boolean");
    }
    if !doc["segment"].get("special_glyphs").is_some_and(Value::is_array) {
        panic!("{SETTINGS}: segment.special_glyphs must be an array");
    }
}

fn check_romaji(doc: &Value) {
    let Some(mappings) = doc.get("mappings").and_then(Value::as_table) else {
        panic!("{ROMAJI}: missing [mappings] table");
    };
    for (unit, value) in mappings {
        let spellings = value.as_array().filter(|a| !a.is_empty());
        let all_strings = spellings.is_some_and(|a| a.iter().all(Value::is_str));
        if !all_strings {
            panic!("{ROMAJI}: {unit:?} must map to a non-empty array of strings");
        }
    }
}

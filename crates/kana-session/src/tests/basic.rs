use super::*;
use crate::{Cursor, JudgeOptions, KeyInput, TypingStatus};

// --- Construction ---

#[test]
fn test_initial_state() {
    let judge = TypingJudge::new("あり");
    assert_eq!(judge.status(), TypingStatus::Waiting);
    assert_eq!(judge.cursor(), Cursor::default());
    assert_eq!(judge.active_patterns(), ["a", "ri"]);
    assert_eq!(judge.current_mora().map(|m| m.source()), Some("あ"));
    assert_eq!(judge.current_pattern(), Some("a"));
    assert_eq!(judge.expected_char(), Some('a'));
    assert_eq!(judge.progress(), 0);
    assert!(judge.input_history().is_empty());
}

#[test]
fn test_first_input_starts_typing_even_when_wrong() {
    let mut judge = TypingJudge::new("か");
    let r = judge.judge('x');
    assert!(!r.is_correct);
    assert_eq!(judge.status(), TypingStatus::InProgress);
}

// --- Ordinary morae ---

#[test]
fn test_full_word() {
    let mut judge = TypingJudge::new("ありがとう\n");
    let results = type_string(&mut judge, "arigatou\n");
    assert_eq!(results.len(), 9);
    assert!(all_correct(&results));
    let stats = judge.statistics();
    assert_eq!(stats.correct_count, 9);
    assert_eq!(stats.incorrect_count, 0);
    assert_eq!(stats.accuracy, 100);
    assert_eq!(judge.status(), TypingStatus::Completed);
    assert!(judge.is_completed());
}

#[test]
fn test_wrong_key_does_not_advance() {
    let mut judge = TypingJudge::new("か");
    judge.judge('k');
    let r = judge.judge('i');
    assert!(!r.is_correct);
    assert_eq!(r.expected_char, Some('a'));
    assert_eq!(r.position, 0);
    assert_eq!(
        judge.cursor(),
        Cursor {
            mora_index: 0,
            pattern_offset: 1
        }
    );
    let r = judge.judge('a');
    assert!(r.is_correct);
    assert!(judge.is_completed());
}

#[test]
fn test_pattern_switch_shi_to_si() {
    let mut judge = TypingJudge::new("し");
    assert_eq!(judge.current_pattern(), Some("shi"));

    let r = judge.judge('s');
    assert!(r.is_correct);
    assert_eq!(judge.current_pattern(), Some("shi"));
    assert_eq!(judge.expected_char(), Some('h'));

    // Recorded against the switched pattern
    let r = judge.judge('i');
    assert!(r.is_correct);
    assert_eq!(r.expected_char, Some('i'));
    assert_eq!(judge.active_patterns(), ["si"]);
    assert!(judge.is_completed());
    assert_eq!(judge.statistics().correct_count, 2);
}

#[test]
fn test_pattern_switch_at_first_key() {
    let mut judge = TypingJudge::new("しか");
    let r = judge.judge('c');
    assert!(r.is_correct);
    assert_eq!(judge.current_pattern(), Some("ci"));
    judge.judge('i');
    assert_eq!(judge.current_pattern(), Some("ka"));
    type_string(&mut judge, "ca");
    assert_eq!(judge.active_patterns(), ["ci", "ca"]);
    assert!(judge.is_completed());
}

#[test]
fn test_alternative_spellings_of_one_word() {
    for keys in ["chikatetsu", "tikatetu", "chikatetu", "tikatetsu"] {
        let mut judge = TypingJudge::new("ちかてつ");
        let results = type_string(&mut judge, keys);
        assert!(all_correct(&results), "rejected spelling {keys}");
        assert!(judge.is_completed(), "{keys} did not complete");
    }
}

#[test]
fn test_youon() {
    let mut judge = TypingJudge::new("きょう");
    assert!(all_correct(&type_string(&mut judge, "kyou")));
    assert!(judge.is_completed());

    let mut judge = TypingJudge::new("じゃま");
    assert!(all_correct(&type_string(&mut judge, "zyama")));
    assert_eq!(judge.active_patterns(), ["zya", "ma"]);
}

#[test]
fn test_literal_drill() {
    let mut judge = TypingJudge::new("hello");
    let results = type_string(&mut judge, "hello");
    assert!(all_correct(&results));
    assert!(judge.is_completed());
}

#[test]
fn test_literal_is_case_sensitive_by_default() {
    let mut judge = TypingJudge::with_options("Hi", JudgeOptions::default());
    assert!(!judge.judge('h').is_correct);
    assert!(judge.judge('H').is_correct);
}

#[test]
fn test_ignore_case_option() {
    let options = JudgeOptions { ignore_case: true };
    let mut judge = TypingJudge::with_options("かHi", options);
    let results = type_string(&mut judge, "KAhI");
    assert!(all_correct(&results));
    assert!(judge.is_completed());
    // History keeps the key as pressed
    assert_eq!(judge.input_history()[0].input_char, 'K');
}

#[test]
fn test_position_is_mora_index_after_input() {
    let mut judge = TypingJudge::new("かき");
    let positions: Vec<usize> = type_string(&mut judge, "kaki")
        .iter()
        .map(|r| r.position)
        .collect();
    assert_eq!(positions, [0, 1, 1, 2]);
}

// --- Completion ---

#[test]
fn test_input_after_completion_is_inert() {
    let mut judge = TypingJudge::new("あ");
    judge.judge('a');
    let before = judge.statistics();

    let r = judge.judge('b');
    assert!(!r.is_correct);
    assert_eq!(r.expected_char, None);
    assert_eq!(r.input_char, 'b');
    assert_eq!(r.position, 1);
    assert_eq!(judge.statistics(), before);
    assert_eq!(judge.input_history().len(), 2);
    assert_eq!(judge.input_history()[1], r);
    assert_eq!(judge.status(), TypingStatus::Completed);
}

#[test]
fn test_empty_phrase_starts_completed() {
    let mut judge = TypingJudge::new("");
    assert_eq!(judge.status(), TypingStatus::Completed);
    assert_eq!(judge.current_pattern(), None);
    assert_eq!(judge.expected_char(), None);

    let r = judge.judge('a');
    assert!(!r.is_correct);
    assert_eq!(r.expected_char, None);
    assert_eq!(judge.status(), TypingStatus::Completed);
    assert_eq!(judge.statistics().total_input_count, 0);
    assert_eq!(judge.statistics().accuracy, 100);
    assert_eq!(judge.input_history().len(), 1);
}

// --- Reset ---

#[test]
fn test_reset_restores_initial_state() {
    let mut judge = TypingJudge::new("しんぶん");
    let fresh = judge.snapshot();

    type_string(&mut judge, "sixnbu");
    assert_ne!(judge.snapshot(), fresh);

    judge.reset();
    assert_eq!(judge.snapshot(), fresh);
    assert!(judge.input_history().is_empty());
    assert_eq!(judge.active_patterns(), ["shi", "nn", "bu", "nn"]);
    assert_eq!(judge.status(), TypingStatus::Waiting);
}

#[test]
fn test_reset_after_completion_allows_retyping() {
    let mut judge = TypingJudge::new("し");
    type_string(&mut judge, "si");
    assert!(judge.is_completed());
    judge.reset();
    assert_eq!(judge.current_pattern(), Some("shi"));
    assert!(all_correct(&type_string(&mut judge, "shi")));
    assert!(judge.is_completed());
}

// --- Display helpers ---

#[test]
fn test_typed_and_remaining() {
    let mut judge = TypingJudge::new("しか");
    assert_eq!(
        judge.typed_and_remaining(),
        (String::new(), "shika".to_string())
    );
    judge.judge('s');
    assert_eq!(
        judge.typed_and_remaining(),
        ("s".to_string(), "hika".to_string())
    );
    judge.judge('i');
    assert_eq!(
        judge.typed_and_remaining(),
        ("si".to_string(), "ka".to_string())
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut judge = TypingJudge::new("あ。");
    judge.judge('a');
    let json = serde_json::to_value(judge.snapshot()).unwrap();
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["current_mora"], "。");
    assert_eq!(json["expected_char"], ".");
    assert_eq!(json["cursor"]["mora_index"], 1);
    assert_eq!(json["statistics"]["accuracy"], 100);
    assert_eq!(json["labels"][0], "あ");
}

// --- Key input ---

#[test]
fn test_key_names() {
    assert_eq!(KeyInput::from_key_name("Enter"), Some(KeyInput::Enter));
    assert_eq!(KeyInput::from_key_name("NumpadEnter"), Some(KeyInput::Enter));
    assert_eq!(KeyInput::from_key_name("Space"), Some(KeyInput::Space));
    assert_eq!(KeyInput::from_key_name(" "), Some(KeyInput::Space));
    assert_eq!(KeyInput::from_key_name("a"), Some(KeyInput::Char('a')));
    assert_eq!(KeyInput::from_key_name("-"), Some(KeyInput::Char('-')));
    assert_eq!(KeyInput::from_key_name("Shift"), None);
    assert_eq!(KeyInput::from_key_name("ArrowUp"), None);
    assert_eq!(KeyInput::from_key_name(""), None);
    assert_eq!(KeyInput::from('\n'), KeyInput::Enter);
    assert_eq!(KeyInput::Enter.to_char(), '\n');
}

#[test]
fn test_judge_key_enter_completes_line() {
    let mut judge = TypingJudge::new("あ\n");
    assert!(judge.judge_key(KeyInput::Char('a')).is_correct);
    let r = judge.judge_key(KeyInput::Enter);
    assert!(r.is_correct);
    assert_eq!(r.input_char, '\n');
    assert!(judge.is_completed());
}

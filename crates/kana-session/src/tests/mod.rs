mod basic;

use super::{InputResult, TypingJudge};

// Helper: feed a string one character at a time
pub(super) fn type_string(judge: &mut TypingJudge, s: &str) -> Vec<InputResult> {
    s.chars().map(|ch| judge.judge(ch)).collect()
}

pub(super) fn all_correct(results: &[InputResult]) -> bool {
    results.iter().all(|r| r.is_correct)
}

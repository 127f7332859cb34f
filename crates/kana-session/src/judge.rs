use tracing::{debug, debug_span, warn};

use kana_core::resolve::{
    closes_before, complete_candidate, is_geminate_consonant, select_best_pattern,
};
use kana_core::segment::{Mora, MoraKind};

use super::types::{InputEvent, InputResult, KeyInput, TypingStatus};
use super::TypingJudge;

impl TypingJudge {
    pub fn judge_key(&mut self, key: KeyInput) -> InputResult {
        self.judge(key.to_char())
    }

    /// Judge one keystroke against the current mora.
    ///
    /// Always appends exactly one history record. Counters are untouched once
    /// the phrase is completed.
    pub fn judge(&mut self, key: char) -> InputResult {
        let _span = debug_span!("judge", ?key).entered();

        if self.status == TypingStatus::Waiting {
            self.status = TypingStatus::InProgress;
            debug!("typing started");
        }

        if self.status == TypingStatus::Completed {
            warn!("input after completion ignored");
            return self.record(InputEvent {
                is_correct: false,
                expected_char: None,
                input_char: key,
                position: self.cursor.mora_index,
            });
        }

        let expected = self.expected_char();
        let k = match expected {
            Some(e) if self.options.ignore_case && e.eq_ignore_ascii_case(&key) => e,
            _ if self.options.ignore_case => key.to_ascii_lowercase(),
            _ => key,
        };

        let index = self.cursor.mora_index;
        let (is_special, is_sokuon) = {
            let mora = &self.phrase.morae()[index];
            (mora.is_special(), mora.is_sokuon())
        };

        let is_correct = if is_special {
            self.judge_special(k)
        } else if is_sokuon && self.cursor.pattern_offset == 0 {
            self.judge_sokuon(k)
        } else {
            self.judge_ordinary(k)
        };

        self.counters.record(is_correct);
        if !is_correct {
            debug!(?expected, cursor = ?self.cursor, "incorrect input");
        }

        // A correct key is recorded against the pattern character it satisfied,
        // which is not `expected` after a switch or an early close.
        self.record(InputEvent {
            is_correct,
            expected_char: if is_correct { Some(k) } else { expected },
            input_char: key,
            position: self.cursor.mora_index,
        })
    }

    fn record(&mut self, event: InputEvent) -> InputResult {
        self.history.push(event.clone());
        event
    }

    /// Special glyphs match one exact keystroke; a miss leaves the cursor for a retry.
    fn judge_special(&mut self, k: char) -> bool {
        let index = self.cursor.mora_index;
        if self.patterns[index].chars().next() == Some(k) {
            self.advance_mora();
            true
        } else {
            false
        }
    }

    fn judge_sokuon(&mut self, k: char) -> bool {
        if self.try_geminate(k) {
            return true;
        }
        // A doubled-consonant pattern is not a spelling of っ on its own, so
        // standalone spellings are only open when the table default is shown.
        let index = self.cursor.mora_index;
        let mora = &self.phrase.morae()[index];
        if complete_candidate(mora, &self.patterns[index]).is_none() {
            return false;
        }
        self.judge_ordinary(k)
    }

    /// Accept `k` for っ when it begins the following mora.
    ///
    /// The consonant is shared: the following mora still expects it as its
    /// own first keystroke.
    fn try_geminate(&mut self, k: char) -> bool {
        let index = self.cursor.mora_index;
        let next_index = index + 1;
        let Some(next) = self.phrase.get(next_index) else {
            return false;
        };
        if !doubles_into(next, k) {
            return false;
        }

        if !self.patterns[next_index].starts_with(k) {
            let Some(switched) = next.candidates().iter().find(|c| c.starts_with(k)) else {
                return false;
            };
            debug!(
                from = %self.patterns[next_index],
                to = %switched,
                "following pattern switched by geminate"
            );
            self.patterns[next_index] = switched.clone();
        }

        debug!(consonant = %k, "geminate consonant accepted");
        self.patterns[index] = k.to_string();
        self.advance_mora();
        true
    }

    fn judge_ordinary(&mut self, k: char) -> bool {
        let index = self.cursor.mora_index;
        let offset = self.cursor.pattern_offset;
        let typed: String = self.patterns[index].chars().take(offset).collect();
        let mut partial = typed.clone();
        partial.push(k);

        let best = select_best_pattern(&self.phrase.morae()[index], &partial);
        if !best.starts_with(partial.as_str()) {
            return self.try_close_and_carry(&typed, k);
        }

        if best != self.patterns[index] {
            debug!(from = %self.patterns[index], to = %best, "pattern switched");
            self.patterns[index] = best.to_string();
        }

        self.cursor.pattern_offset += 1;
        if self.cursor.pattern_offset >= self.patterns[index].chars().count() {
            self.advance_mora();
        }
        true
    }

    /// Close the current mora with a spelling already typed in full (ん as
    /// `n`) and judge `k` as the first keystroke of the following mora.
    ///
    /// Nothing changes unless the following mora accepts `k`.
    fn try_close_and_carry(&mut self, typed: &str, k: char) -> bool {
        if typed.is_empty() {
            return false;
        }
        let index = self.cursor.mora_index;
        let next_index = index + 1;

        let Some(closing) = complete_candidate(&self.phrase.morae()[index], typed) else {
            return false;
        };
        if !closes_before(closing, k) {
            return false;
        }
        let Some(next) = self.phrase.get(next_index) else {
            return false;
        };
        let Some(next_pattern) = start_pattern(next, &self.patterns[next_index], k) else {
            return false;
        };

        debug!(closed = %closing, carried = %k, "mora closed early");
        self.patterns[index] = closing.to_string();
        self.patterns[next_index] = next_pattern;
        self.advance_mora();

        self.cursor.pattern_offset = 1;
        if self.cursor.pattern_offset >= self.patterns[next_index].chars().count() {
            self.advance_mora();
        }
        true
    }

    fn advance_mora(&mut self) {
        self.cursor.mora_index += 1;
        self.cursor.pattern_offset = 0;
        if self.cursor.mora_index >= self.phrase.len() {
            self.status = TypingStatus::Completed;
            debug!(statistics = ?self.statistics(), "typing completed");
        }
    }
}

/// Pattern `mora` takes if `k` is its first keystroke, or `None` if `k` cannot start it.
fn start_pattern(mora: &Mora, active: &str, k: char) -> Option<String> {
    if mora.is_sokuon() {
        return None;
    }
    if mora.is_special() {
        return (active.chars().next() == Some(k)).then(|| active.to_string());
    }
    let mut partial = String::new();
    partial.push(k);
    let best = select_best_pattern(mora, &partial);
    best.starts_with(k).then(|| best.to_string())
}

/// Whether `k` typed on っ can be the doubled first consonant of `next`.
///
/// `x` and `l` only start standalone small-kana spellings (`xya`, `xtu`) unless
/// `next` is literal text, so they do not double.
pub(crate) fn doubles_into(next: &Mora, k: char) -> bool {
    match next.kind() {
        MoraKind::Special => false,
        MoraKind::Literal => is_geminate_consonant(k),
        _ => is_geminate_consonant(k) && !matches!(k, 'x' | 'l'),
    }
}

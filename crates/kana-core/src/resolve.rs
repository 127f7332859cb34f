//! Picks the spelling of a mora that agrees with what has been typed so far.

use crate::segment::Mora;

/// First candidate of `mora` that starts with `partial`, or the default
/// candidate when none does.
///
/// The fallback only exists so callers can report an expected spelling;
/// check [`accepts`] (or `starts_with`) before treating input as valid.
pub fn select_best_pattern<'a>(mora: &'a Mora, partial: &str) -> &'a str {
    mora.candidates()
        .iter()
        .find(|c| c.starts_with(partial))
        .map(String::as_str)
        .unwrap_or_else(|| mora.default_pattern())
}

/// True if some candidate of `mora` starts with `partial`.
pub fn accepts(mora: &Mora, partial: &str) -> bool {
    select_best_pattern(mora, partial).starts_with(partial)
}

/// The candidate exactly equal to `typed`, if any.
pub fn complete_candidate<'a>(mora: &'a Mora, typed: &str) -> Option<&'a str> {
    mora.candidates()
        .iter()
        .map(String::as_str)
        .find(|c| *c == typed)
}

/// Whether a mora spelled `candidate` may be closed by the following `key`.
///
/// A lone `n` followed by a vowel, `y` or another `n` would spell a
/// different syllable, so ん typed as `n` only closes before other keys.
pub fn closes_before(candidate: &str, key: char) -> bool {
    if candidate == "n" {
        return !matches!(key, 'a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'n');
    }
    true
}

/// Whether `c` can be doubled by っ: an ASCII lowercase consonant other than `n`.
pub fn is_geminate_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'n')
}

/// Consonant a preceding っ doubles, given the next mora's spelling.
pub fn geminate_consonant(next_pattern: &str) -> Option<char> {
    let first = next_pattern.chars().next()?;
    is_geminate_consonant(first).then_some(first)
}

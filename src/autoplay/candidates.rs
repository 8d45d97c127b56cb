//! Candidate filtering against the visible state of a round

use crate::core::{Round, is_letter, normalize};
use rustc_hash::FxHashMap;

/// The word as the player sees it: `None` for a hidden letter
#[must_use]
pub fn visible_pattern(round: &Round) -> Vec<Option<char>> {
    round
        .reveal()
        .chars()
        .step_by(2)
        .map(|ch| if ch == '_' { None } else { Some(ch) })
        .collect()
}

/// Whether `candidate` is consistent with everything the player knows
///
/// Revealed positions must hold the same letter, hidden positions must hold a
/// letter that has not been tried yet.
#[must_use]
pub fn matches(round: &Round, pattern: &[Option<char>], candidate: &str) -> bool {
    if candidate.chars().count() != pattern.len() {
        return false;
    }

    candidate
        .chars()
        .zip(pattern)
        .all(|(ch, shown)| match shown {
            Some(shown) => normalize(ch) == normalize(*shown),
            None => is_letter(ch) && !round.already_tried(ch),
        })
}

/// Words from `words` that could still be the answer
#[must_use]
pub fn filter_candidates<'a>(round: &Round, words: &'a [String]) -> Vec<&'a str> {
    let pattern = visible_pattern(round);
    words
        .iter()
        .map(String::as_str)
        .filter(|word| matches(round, &pattern, word))
        .collect()
}

/// For each untried normalized letter, the number of candidates containing it
#[must_use]
pub fn letter_counts(round: &Round, candidates: &[&str]) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        let mut letters: Vec<char> = word
            .chars()
            .filter(|&ch| is_letter(ch))
            .map(normalize)
            .filter(|&ch| !round.already_tried(ch))
            .collect();
        letters.sort_unstable();
        letters.dedup();

        for letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    counts
}

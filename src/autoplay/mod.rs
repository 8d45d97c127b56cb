//! Automatic guessers used by the simulation command
//!
//! A [`Guesser`] sees a round only the way a player does (the masked word and the
//! letters tried) plus the word list, and proposes the next letter.

pub mod candidates;

use crate::core::{Round, is_letter, normalize};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Letters tried when no candidate word fits, most common first
const FALLBACK_ORDER: &str = "aeioznrwstcykdpmujlbghfvqx";

/// A strategy for picking the next letter
pub trait Guesser {
    /// Propose a letter not tried yet, or `None` if nothing is left to try
    fn next_guess(&self, round: &Round, words: &[String]) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection while keeping static dispatch.
pub enum GuesserType {
    Frequency(FrequencyGuesser),
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_guess(&self, round: &Round, words: &[String]) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_guess(round, words),
            Self::Random(g) => g.next_guess(round, words),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its name
    ///
    /// Supported names: "frequency", "random". Defaults to frequency.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }
}

/// Picks the untried letter found in the most remaining candidate words
///
/// Ties go to the alphabetically first letter so results are reproducible.
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_guess(&self, round: &Round, words: &[String]) -> Option<char> {
        let candidates = candidates::filter_candidates(round, words);
        let counts = candidates::letter_counts(round, &candidates);

        let best = counts
            .into_iter()
            .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then_with(|| l2.cmp(l1)))
            .map(|(letter, _)| letter);

        best.or_else(|| fallback_letter(round))
    }
}

/// Picks any untried letter of the list's alphabet at random
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_guess(&self, round: &Round, words: &[String]) -> Option<char> {
        let mut alphabet: FxHashSet<char> = ('a'..='z').collect();
        alphabet.extend(
            words
                .iter()
                .flat_map(|w| w.chars())
                .filter(|&ch| is_letter(ch))
                .map(normalize),
        );

        let untried: Vec<char> = alphabet
            .into_iter()
            .filter(|&ch| !round.already_tried(ch))
            .collect();

        untried.choose(&mut rand::rng()).copied()
    }
}

fn fallback_letter(round: &Round) -> Option<char> {
    FALLBACK_ORDER.chars().find(|&ch| !round.already_tried(ch))
}

/// Play `round` to the end with `guesser`
///
/// Stops early if the guesser runs out of letters or repeats one.
pub fn play_out<G: Guesser + ?Sized>(guesser: &G, round: &mut Round, words: &[String]) {
    while !round.is_over() {
        let Some(letter) = guesser.next_guess(round, words) else {
            break;
        };
        if !round.guess(letter) {
            break;
        }
    }
}

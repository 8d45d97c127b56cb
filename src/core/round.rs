//! Round state machine
//!
//! A [`Round`] is one play-through of a single word: it tracks guessed and wrong
//! letters, the score, and whether the round is still being played.
//!
//! # Scoring
//! - Correct novel letter: +10
//! - Wrong novel letter: -5 (no floor, scores may go negative)
//! - Winning: +50, plus 5 per remaining attempt at the moment of winning
//!
//! Repeat guesses and guesses after the round is over are rejected without
//! touching the state.

use super::difficulty::Difficulty;
use super::letter::{is_letter, normalize, same_letter};
use rustc_hash::FxHashSet;

/// Points for a correct novel letter
pub const HIT_POINTS: i32 = 10;

/// Points taken for a wrong novel letter
pub const MISS_PENALTY: i32 = 5;

/// Flat bonus for winning a round
pub const WIN_BONUS: i32 = 50;

/// Bonus per attempt left when the round is won
pub const REMAINING_ATTEMPT_BONUS: i32 = 5;

/// Status of a round
///
/// Transitions are one-way: `Playing -> Won` or `Playing -> Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// A single game of hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: String,
    guessed_letters: Vec<char>,
    wrong_letters: Vec<char>,
    max_attempts: usize,
    score: i32,
    status: RoundStatus,
}

impl Round {
    /// Start a new round for `word` at the given difficulty
    ///
    /// The word is lower-cased; its content is not validated.
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::core::{Difficulty, Round, RoundStatus};
    ///
    /// let mut round = Round::new("kot", Difficulty::Medium);
    /// assert!(round.guess('k'));
    /// assert!(round.guess('o'));
    /// assert!(round.guess('t'));
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// assert_eq!(round.score(), 110);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::with_max_attempts(word, difficulty.max_attempts())
    }

    /// Start a new round with an explicit attempt budget
    #[must_use]
    pub fn with_max_attempts(word: impl Into<String>, max_attempts: usize) -> Self {
        Self {
            word: word.into().to_lowercase(),
            guessed_letters: Vec::new(),
            wrong_letters: Vec::new(),
            max_attempts,
            score: 0,
            status: RoundStatus::Playing,
        }
    }

    /// Guess a letter
    ///
    /// Returns `true` when the guess was novel and has been applied, `false` when the
    /// round is already over or the (normalized) letter was guessed before. Rejected
    /// guesses never change the round.
    pub fn guess(&mut self, letter: char) -> bool {
        if self.status != RoundStatus::Playing {
            return false;
        }

        let normalized = normalize(letter);
        if self.is_covered(normalized) || self.is_wrong(normalized) {
            return false;
        }

        let in_word = self.word.chars().any(|ch| same_letter(ch, normalized));

        if in_word {
            self.guessed_letters.push(letter);
            self.score += HIT_POINTS;

            if self.all_letters_covered() {
                self.status = RoundStatus::Won;
                let remaining = self.remaining_attempts() as i32;
                self.score += WIN_BONUS + REMAINING_ATTEMPT_BONUS * remaining;
            }
        } else {
            self.wrong_letters.push(letter);
            self.score -= MISS_PENALTY;

            if self.wrong_letters.len() >= self.max_attempts {
                self.status = RoundStatus::Lost;
            }
        }

        true
    }

    /// The word being guessed (lower-case)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Correct guesses in the order they were made, as typed
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Wrong guesses in the order they were made, as typed
    #[inline]
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Whether the round reached a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    /// Whether the round was won without a single wrong guess
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.status == RoundStatus::Won && self.wrong_letters.is_empty()
    }

    /// Wrong guesses still allowed
    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.wrong_letters.len())
    }

    /// The word with unguessed letters masked as `_`, one space between characters
    ///
    /// Characters that are not letters (hyphens, apostrophes) are always shown.
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::core::{Difficulty, Round};
    ///
    /// let mut round = Round::new("kot", Difficulty::Easy);
    /// round.guess('o');
    /// assert_eq!(round.reveal(), "_ o _");
    /// ```
    #[must_use]
    pub fn reveal(&self) -> String {
        let masked: Vec<String> = self
            .word
            .chars()
            .map(|ch| {
                if !is_letter(ch) || self.is_covered(normalize(ch)) {
                    ch.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();

        masked.join(" ")
    }

    /// Wrong guesses joined by single spaces
    #[must_use]
    pub fn wrong_letters_display(&self) -> String {
        let letters: Vec<String> = self.wrong_letters.iter().map(char::to_string).collect();
        letters.join(" ")
    }

    /// Percentage (0-100) of the word's distinct letters already uncovered
    ///
    /// Returns 0 for a word without letters.
    #[must_use]
    pub fn completion_percentage(&self) -> f64 {
        let distinct = self.distinct_letters();
        if distinct.is_empty() {
            return 0.0;
        }

        let covered = distinct
            .iter()
            .filter(|&&letter| self.is_covered(letter))
            .count();

        covered as f64 / distinct.len() as f64 * 100.0
    }

    /// Distinct normalized letters of the word that are still hidden, in word order
    #[must_use]
    pub fn unrevealed_letters(&self) -> Vec<char> {
        let mut seen = FxHashSet::default();

        self.word
            .chars()
            .filter(|&ch| is_letter(ch))
            .map(normalize)
            .filter(|&letter| !self.is_covered(letter) && seen.insert(letter))
            .collect()
    }

    /// Whether the normalized letter was already tried, right or wrong
    #[must_use]
    pub fn already_tried(&self, letter: char) -> bool {
        let normalized = normalize(letter);
        self.is_covered(normalized) || self.is_wrong(normalized)
    }

    fn is_covered(&self, normalized: char) -> bool {
        self.guessed_letters
            .iter()
            .any(|&guessed| same_letter(guessed, normalized))
    }

    fn is_wrong(&self, normalized: char) -> bool {
        self.wrong_letters
            .iter()
            .any(|&wrong| same_letter(wrong, normalized))
    }

    fn all_letters_covered(&self) -> bool {
        self.word
            .chars()
            .filter(|&ch| is_letter(ch))
            .all(|ch| self.is_covered(normalize(ch)))
    }

    fn distinct_letters(&self) -> FxHashSet<char> {
        self.word
            .chars()
            .filter(|&ch| is_letter(ch))
            .map(normalize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(round: &mut Round, letters: &str) {
        for letter in letters.chars() {
            round.guess(letter);
        }
    }

    #[test]
    fn new_round_starts_playing() {
        let round = Round::new("Kot", Difficulty::Medium);
        assert_eq!(round.word(), "kot");
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.score(), 0);
        assert_eq!(round.max_attempts(), 6);
        assert_eq!(round.remaining_attempts(), 6);
    }

    #[test]
    fn winning_kot_scores_110() {
        let mut round = Round::new("kot", Difficulty::Medium);

        assert!(round.guess('k'));
        assert!(round.guess('o'));
        assert_eq!(round.score(), 20);
        assert_eq!(round.status(), RoundStatus::Playing);

        assert!(round.guess('t'));
        assert_eq!(round.status(), RoundStatus::Won);
        // 10 + 10 + 10 + 50 + 5 * 6
        assert_eq!(round.score(), 110);
        assert!(round.is_perfect());
    }

    #[test]
    fn win_bonus_uses_remaining_attempts() {
        let mut round = Round::new("kot", Difficulty::Medium);
        play(&mut round, "xyko");
        assert_eq!(round.score(), 10);

        round.guess('t');
        // -5 -5 +10 +10 +10 +50 + 5 * 4
        assert_eq!(round.score(), 90);
        assert!(!round.is_perfect());
    }

    #[test]
    fn six_misses_on_medium_loses_with_minus_30() {
        let mut round = Round::new("kot", Difficulty::Medium);
        play(&mut round, "abcdef");

        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.score(), -30);
        assert_eq!(round.remaining_attempts(), 0);
    }

    #[test]
    fn hard_round_loses_after_four_misses() {
        let mut round = Round::new("kot", Difficulty::Hard);
        play(&mut round, "abc");
        assert_eq!(round.status(), RoundStatus::Playing);
        round.guess('d');
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn repeat_guess_is_rejected_without_mutation() {
        let mut round = Round::new("kot", Difficulty::Medium);
        round.guess('k');
        round.guess('x');
        let before = round.clone();

        assert!(!round.guess('k'));
        assert!(!round.guess('K'));
        assert!(!round.guess('x'));
        assert_eq!(round, before);
    }

    #[test]
    fn diacritic_and_base_letter_are_the_same_guess() {
        let mut round = Round::new("żółw", Difficulty::Medium);

        assert!(round.guess('z'));
        assert!(!round.guess('ż'));
        assert!(!round.guess('ź'));
        assert!(round.guess('ó'));
        assert!(!round.guess('o'));
        assert_eq!(round.guessed_letters(), &['z', 'ó']);
        assert_eq!(round.reveal(), "ż ó _ _");
    }

    #[test]
    fn wrong_diacritic_repeat_is_rejected() {
        let mut round = Round::new("kot", Difficulty::Medium);
        assert!(round.guess('ą'));
        assert!(!round.guess('a'));
        assert_eq!(round.wrong_letters(), &['ą']);
        assert_eq!(round.score(), -5);
    }

    #[test]
    fn guesses_after_terminal_state_are_no_ops() {
        let mut won = Round::new("a", Difficulty::Easy);
        assert!(won.guess('a'));
        let snapshot = won.clone();
        assert!(!won.guess('b'));
        assert_eq!(won, snapshot);

        let mut lost = Round::new("kot", Difficulty::Hard);
        play(&mut lost, "abcd");
        let snapshot = lost.clone();
        assert!(!lost.guess('k'));
        assert_eq!(lost, snapshot);
    }

    #[test]
    fn status_never_reverses() {
        let mut round = Round::new("kot", Difficulty::Hard);
        let mut previous = round.status();

        for letter in "abkcdot".chars() {
            round.guess(letter);
            let current = round.status();
            if previous != RoundStatus::Playing {
                assert_eq!(current, previous);
            }
            previous = current;
        }
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn repeated_letters_in_word_need_one_guess() {
        let mut round = Round::new("mama", Difficulty::Medium);
        round.guess('m');
        assert_eq!(round.reveal(), "m _ m _");
        round.guess('a');
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.score(), 10 + 10 + 50 + 30);
    }

    #[test]
    fn reveal_shows_non_letters() {
        let mut round = Round::new("rock-and-roll", Difficulty::Easy);
        round.guess('r');
        assert_eq!(round.reveal(), "r _ _ _ - _ _ _ - r _ _ _");
    }

    #[test]
    fn completion_percentage_counts_distinct_letters() {
        let mut round = Round::new("mamy", Difficulty::Medium);
        assert!((round.completion_percentage() - 0.0).abs() < f64::EPSILON);

        round.guess('m');
        let expected = 100.0 / 3.0;
        assert!((round.completion_percentage() - expected).abs() < 1e-9);

        round.guess('a');
        round.guess('y');
        assert!((round.completion_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completion_percentage_of_letterless_word_is_zero() {
        let round = Round::new("---", Difficulty::Medium);
        assert!((round.completion_percentage() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut round = Round::new("kot", Difficulty::Medium);
        round.guess('k');
        round.guess('z');
        let before = round.clone();

        let _ = round.remaining_attempts();
        let _ = round.reveal();
        let _ = round.completion_percentage();
        let _ = round.unrevealed_letters();
        let _ = round.wrong_letters_display();

        assert_eq!(round, before);
    }

    #[test]
    fn unrevealed_letters_are_distinct_and_ordered() {
        let mut round = Round::new("ananas", Difficulty::Medium);
        assert_eq!(round.unrevealed_letters(), vec!['a', 'n', 's']);
        round.guess('n');
        assert_eq!(round.unrevealed_letters(), vec!['a', 's']);
    }

    #[test]
    fn wrong_letters_display_joins_with_spaces() {
        let mut round = Round::new("kot", Difficulty::Medium);
        play(&mut round, "xyz");
        assert_eq!(round.wrong_letters_display(), "x y z");
    }

    #[test]
    fn already_tried_covers_both_lists() {
        let mut round = Round::new("kot", Difficulty::Medium);
        round.guess('k');
        round.guess('q');
        assert!(round.already_tried('K'));
        assert!(round.already_tried('q'));
        assert!(!round.already_tried('t'));
    }
}

//! Simulate command
//!
//! Plays many rounds with an automatic guesser and summarizes the outcome.

use crate::autoplay::{Guesser, play_out};
use crate::core::{Difficulty, Round, RoundStatus};
use crate::rpg::Progression;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of a single simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SimulatedRound {
    won: bool,
    score: i32,
    wrong_guesses: usize,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub average_score: f64,
    pub min_score: i32,
    pub max_score: i32,
    /// Number of rounds per count of wrong guesses
    pub wrong_guess_distribution: BTreeMap<usize, usize>,
    /// Level a fresh character reaches from the winning scores
    pub final_level: u32,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64 * 100.0
    }
}

/// Play `rounds` random words from `words` at `difficulty`
///
/// Rounds run in parallel. When `show_progress` is set a progress bar is drawn on
/// stderr.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    words: &WordList,
    difficulty: Difficulty,
    rounds: usize,
    show_progress: bool,
) -> SimulationResult {
    info!(rounds, %difficulty, words = words.len(), "starting simulation");
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<SimulatedRound> = (0..rounds)
        .into_par_iter()
        .filter_map(|_| {
            let word = words.random_word(&mut rand::rng())?;
            let mut round = Round::new(word, difficulty);
            play_out(guesser, &mut round, words.words());
            pb.inc(1);

            Some(SimulatedRound {
                won: round.status() == RoundStatus::Won,
                score: round.score(),
                wrong_guesses: round.wrong_letters().len(),
            })
        })
        .collect();

    pb.finish_and_clear();

    summarize(&results, start.elapsed())
}

fn summarize(results: &[SimulatedRound], duration: Duration) -> SimulationResult {
    let mut distribution = BTreeMap::new();
    let mut progression = Progression::new();
    let mut total_score = 0_i64;

    for result in results {
        *distribution.entry(result.wrong_guesses).or_insert(0) += 1;
        total_score += i64::from(result.score);

        if result.won {
            progression.add_experience(u64::try_from(result.score).unwrap_or(0));
        }
    }

    let rounds = results.len();
    SimulationResult {
        rounds,
        wins: results.iter().filter(|r| r.won).count(),
        average_score: if rounds == 0 {
            0.0
        } else {
            total_score as f64 / rounds as f64
        },
        min_score: results.iter().map(|r| r.score).min().unwrap_or(0),
        max_score: results.iter().map(|r| r.score).max().unwrap_or(0),
        wrong_guess_distribution: distribution,
        final_level: progression.level(),
        duration,
    }
}

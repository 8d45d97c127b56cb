//! Core game types
//!
//! Letter normalization, difficulty and the round state machine. Everything here is
//! pure and synchronous: no I/O, no logging, no shared state.

mod difficulty;
mod letter;
mod round;

pub use difficulty::Difficulty;
pub use letter::{is_letter, normalize, same_letter};
pub use round::{
    HIT_POINTS, MISS_PENALTY, REMAINING_ATTEMPT_BONUS, Round, RoundStatus, WIN_BONUS,
};

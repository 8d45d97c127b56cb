//! Gallows drawing
//!
//! Nine stages from the empty scaffold to the finished figure. Every attempt budget
//! is spread over the full table, so the last stage always appears on the losing
//! guess whatever the difficulty.

use crate::core::Round;

/// Rows of every stage
pub const GALLOWS_HEIGHT: usize = 11;

/// Widest row of every stage
pub const GALLOWS_WIDTH: usize = 15;

const STAGES: [&str; 9] = [
    // Scaffold
    "    ╔════════╗
    ║        ║
    ║
    ║
    ║
    ║
    ║
 ╔══╩══╗
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Head
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║
    ║
    ║
 ╔══╩══╗
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Body
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║        ┃
    ║        ┃
    ║
 ╔══╩══╗
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Left arm
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║       ┏┃
    ║       ┃┃
    ║
 ╔══╩══╗
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Right arm
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║       ┏┃┓
    ║       ┃┃┃
    ║
 ╔══╩══╗
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Left leg
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║       ┏┃┓
    ║       ┃┃┃
    ║       ┏┻
 ╔══╩══╗    ┃
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Right leg
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚╤╝
    ║       ┏┃┓
    ║       ┃┃┃
    ║       ┏┻┓
 ╔══╩══╗    ┃ ┃
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Frightened
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚O╝
    ║       ┏┃┓
    ║       ┃┃┃
    ║       ┏┻┓
 ╔══╩══╗    ┃ ┃
 ║     ║
╔╩═════╩╗
╚═══════╝",
    // Hanged
    "    ╔════════╗
    ║        ║
    ║       ╔╧╗
    ║       ╚X╝
    ║       ┏┃┓
    ║       ┃┃┃
    ║       ┏┻┓
 ╔══╩══╗    ┃ ┃
 ║     ║
╔╩═════╩╗
╚═══════╝",
];

const LAST_STAGE: usize = STAGES.len() - 1;

/// Stage for `wrong` misses out of `max_attempts`
///
/// Zero misses is the bare scaffold and an exhausted budget is the final stage;
/// the stages in between are spread evenly. An eight-attempt budget walks through
/// every stage one by one.
///
/// # Examples
/// ```
/// use hangman_rpg::output::gallows::stage_index;
///
/// assert_eq!(stage_index(0, 4), 0);
/// assert_eq!(stage_index(1, 4), 2);
/// assert_eq!(stage_index(4, 4), 8);
/// ```
#[must_use]
pub const fn stage_index(wrong: usize, max_attempts: usize) -> usize {
    if wrong >= max_attempts {
        return LAST_STAGE;
    }
    wrong * LAST_STAGE / max_attempts
}

/// The drawing for `wrong` misses out of `max_attempts`
#[must_use]
pub const fn stage(wrong: usize, max_attempts: usize) -> &'static str {
    STAGES[stage_index(wrong, max_attempts)]
}

/// The drawing matching a round's misses
#[must_use]
pub fn gallows(round: &Round) -> &'static str {
    stage(round.wrong_letters().len(), round.max_attempts())
}

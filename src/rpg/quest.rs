//! Quests: objectives advanced by named game events

use serde::{Deserialize, Serialize};

/// Event keys fired by the session when a round ends
pub mod events {
    /// A round was won
    pub const WIN_GAMES: &str = "win_games";
    /// A round was won without a single wrong guess
    pub const PERFECT_GAME: &str = "perfect_game";
    /// A round was won on hard difficulty
    pub const WIN_HARD: &str = "win_hard";
}

/// A tracked objective with a numeric target and an XP reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Event key that advances this quest
    pub objective: String,
    pub progress: u32,
    pub target: u32,
    pub completed: bool,
    /// Experience awarded on completion
    pub reward: u64,
}

impl Quest {
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        objective: &str,
        target: u32,
        reward: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            objective: objective.to_string(),
            progress: 0,
            target,
            completed: false,
            reward,
        }
    }
}

/// Outcome of feeding one event into a quest list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestUpdate {
    /// Sum of rewards of every quest completed by this update
    pub bonus_xp: u64,
    /// Ids of the quests completed by this update, in list order
    pub completed: Vec<String>,
}

/// Advance every open quest whose objective matches `event_key`
///
/// Quests are processed in list order. A quest reaching its target is clamped to
/// the target, marked completed and contributes its reward to the returned bonus.
/// Completed quests never change again.
///
/// # Examples
/// ```
/// use hangman_rpg::rpg::{Quest, update_quests};
///
/// let mut quests = vec![Quest::new("q", "Q", "", "win_games", 2, 50)];
/// assert_eq!(update_quests(&mut quests, "win_games", 1).bonus_xp, 0);
/// assert_eq!(update_quests(&mut quests, "win_games", 1).bonus_xp, 50);
/// assert!(quests[0].completed);
/// ```
pub fn update_quests(quests: &mut [Quest], event_key: &str, amount: u32) -> QuestUpdate {
    let mut update = QuestUpdate::default();

    for quest in quests
        .iter_mut()
        .filter(|quest| !quest.completed && quest.objective == event_key)
    {
        quest.progress = quest.progress.saturating_add(amount);

        if quest.progress >= quest.target {
            quest.progress = quest.target;
            quest.completed = true;
            update.bonus_xp += quest.reward;
            update.completed.push(quest.id.clone());
        }
    }

    update
}

/// The starting quest set
#[must_use]
pub fn basic_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "quest_novice",
            "Novice Guesser",
            "Guess 3 words correctly",
            events::WIN_GAMES,
            3,
            50,
        ),
        Quest::new(
            "quest_perfect",
            "Perfect Game",
            "Guess a word without a single mistake",
            events::PERFECT_GAME,
            1,
            100,
        ),
        Quest::new(
            "quest_difficult",
            "Master of Difficulty",
            "Win a game on hard difficulty",
            events::WIN_HARD,
            1,
            150,
        ),
    ]
}

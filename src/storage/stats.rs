//! Player statistics: aggregate counters plus the full game history

use super::{StorageError, read_json, write_json};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub word: String,
    #[serde(rename = "result")]
    pub outcome: Outcome,
    #[serde(rename = "points")]
    pub score: i32,
    /// Attempt budget the round was played with
    #[serde(rename = "difficulty")]
    pub max_attempts: usize,
    pub date: DateTime<Local>,
}

impl GameRecord {
    #[must_use]
    pub fn new(word: &str, outcome: Outcome, score: i32, max_attempts: usize) -> Self {
        Self {
            word: word.to_string(),
            outcome,
            score,
            max_attempts,
            date: Local::now(),
        }
    }
}

/// Aggregate statistics over every recorded round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_points: i64,
    pub highest_score: i32,
    pub game_history: Vec<GameRecord>,
}

impl PlayerStats {
    /// Fold a finished round into the aggregate
    pub fn add_result(&mut self, record: GameRecord) {
        self.games_played += 1;
        self.total_points += i64::from(record.score);

        if record.outcome == Outcome::Win {
            self.games_won += 1;
        }

        if record.score > self.highest_score {
            self.highest_score = record.score;
        }

        self.game_history.push(record);
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }

    /// Mean score per game, 0 when nothing was played
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_points as f64 / f64::from(self.games_played)
    }

    /// The last `n` games, oldest first
    #[must_use]
    pub fn last_games(&self, n: usize) -> &[GameRecord] {
        let len = self.game_history.len();
        &self.game_history[len - n.min(len)..]
    }
}

/// File-backed [`PlayerStats`]
///
/// Every change is written through to disk immediately.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    stats: PlayerStats,
}

impl StatsStore {
    /// Open the store, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let stats = read_json(&path)?.unwrap_or_default();
        Ok(Self { path, stats })
    }

    /// A store with no statistics that will overwrite whatever is at `path`
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stats: PlayerStats::default(),
        }
    }

    /// Record a finished round and save
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn record(&mut self, record: GameRecord) -> Result<(), StorageError> {
        info!(
            word = %record.word,
            outcome = ?record.outcome,
            score = record.score,
            "recording game"
        );
        self.stats.add_result(record);
        write_json(&self.path, &self.stats)
    }

    /// Clear all statistics and save
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        info!("resetting statistics");
        self.stats = PlayerStats::default();
        write_json(&self.path, &self.stats)
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(score: i32) -> GameRecord {
        GameRecord::new("kot", Outcome::Win, score, 6)
    }

    fn loss(score: i32) -> GameRecord {
        GameRecord::new("pies", Outcome::Lose, score, 4)
    }

    #[test]
    fn empty_stats() {
        let stats = PlayerStats::default();
        assert_eq!(stats.games_played, 0);
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((stats.average_score() - 0.0).abs() < f64::EPSILON);
        assert!(stats.last_games(5).is_empty());
    }

    #[test]
    fn add_result_updates_aggregate() {
        let mut stats = PlayerStats::default();
        stats.add_result(win(110));
        stats.add_result(loss(-30));
        stats.add_result(win(90));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.total_points, 170);
        assert_eq!(stats.highest_score, 110);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_score() - 170.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn negative_scores_never_become_highest() {
        let mut stats = PlayerStats::default();
        stats.add_result(loss(-30));
        assert_eq!(stats.highest_score, 0);
        assert_eq!(stats.total_points, -30);
    }

    #[test]
    fn last_games_returns_tail() {
        let mut stats = PlayerStats::default();
        for score in [10, 20, 30, 40] {
            stats.add_result(win(score));
        }

        let last: Vec<i32> = stats.last_games(2).iter().map(|g| g.score).collect();
        assert_eq!(last, vec![30, 40]);
        assert_eq!(stats.last_games(10).len(), 4);
        assert!(stats.last_games(0).is_empty());
    }

    #[test]
    fn record_uses_legacy_field_names() {
        let json = serde_json::to_string(&win(110)).unwrap();
        assert!(json.contains("\"result\":\"win\""));
        assert!(json.contains("\"points\":110"));
        assert!(json.contains("\"difficulty\":6"));
    }

    #[test]
    fn store_starts_empty_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let mut store = StatsStore::open(&path).unwrap();
        assert_eq!(store.stats(), &PlayerStats::default());

        store.record(win(110)).unwrap();
        store.record(loss(-10)).unwrap();

        let reopened = StatsStore::open(&path).unwrap();
        assert_eq!(reopened.stats().games_played, 2);
        assert_eq!(reopened.stats().games_won, 1);
        assert_eq!(reopened.stats().game_history[0].word, "kot");
    }

    #[test]
    fn empty_store_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(StatsStore::open(&path).is_err());

        StatsStore::empty(&path).reset().unwrap();
        assert_eq!(StatsStore::open(&path).unwrap().stats(), &PlayerStats::default());
    }

    #[test]
    fn reset_clears_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let mut store = StatsStore::open(&path).unwrap();
        store.record(win(50)).unwrap();
        store.reset().unwrap();

        let reopened = StatsStore::open(&path).unwrap();
        assert_eq!(reopened.stats(), &PlayerStats::default());
    }
}

//! Game session: ties rounds to the character
//!
//! A [`Session`] owns the player's [`Profile`] and the chosen [`Difficulty`]. The
//! front ends create rounds through it and hand finished rounds back, which is where
//! experience, level-ups and quest progress are applied. Nothing here touches the
//! terminal or the filesystem.

mod shop;

pub use shop::{Purchase, shop_catalogue};

use crate::core::{Difficulty, Round, RoundStatus};
use crate::rpg::{Attributes, Effect, Item, Profile, Quest, events, update_quests};
use crate::storage::{GameRecord, Outcome};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// Everything that happened when a round was folded into the character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub score: i32,
    /// Experience from the score plus quest rewards
    pub xp_gained: u64,
    pub levels_gained: u32,
    /// Level after all experience was applied
    pub level: u32,
    /// Quests completed by this round
    pub completed_quests: Vec<Quest>,
    /// Entry for the statistics store
    pub record: GameRecord,
}

impl RoundReport {
    #[must_use]
    pub const fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Result of activating an inventory item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    /// The item as it was before activation
    pub item: Item,
    /// Letters guessed on the player's behalf
    pub revealed: Vec<char>,
    /// Effects that had nothing to act on
    pub unapplied: Vec<Effect>,
}

/// Outcome of asking the session to activate an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Used(ItemUse),
    /// No unused item with that id
    NotFound,
    /// A reveal consumable with no round in progress; nothing was consumed
    NeedsRound,
}

#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    difficulty: Difficulty,
}

impl Session {
    #[must_use]
    pub const fn new(profile: Profile, difficulty: Difficulty) -> Self {
        Self {
            profile,
            difficulty,
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "difficulty changed");
        self.difficulty = difficulty;
    }

    /// Start a round for `word` at the session's difficulty
    #[must_use]
    pub fn start_round(&self, word: &str) -> Round {
        debug!(difficulty = %self.difficulty, len = word.chars().count(), "starting round");
        Round::new(word, self.difficulty)
    }

    /// Fold a finished round into the character
    ///
    /// A won round turns its score into experience and fires the `win_games`
    /// event, plus `perfect_game` without wrong guesses and `win_hard` on a
    /// hard-budget round. Quest rewards go through the same experience path.
    /// A lost round only produces a statistics record.
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::core::Difficulty;
    /// use hangman_rpg::rpg::Profile;
    /// use hangman_rpg::session::Session;
    ///
    /// let mut session = Session::new(Profile::new(), Difficulty::Medium);
    /// let mut round = session.start_round("kot");
    /// for letter in ['k', 'o', 't'] {
    ///     round.guess(letter);
    /// }
    ///
    /// let report = session.finish_round(&round);
    /// // 110 points plus the perfect-game quest reward of 100
    /// assert_eq!(report.xp_gained, 210);
    /// assert_eq!(report.level, 2);
    /// ```
    pub fn finish_round(&mut self, round: &Round) -> RoundReport {
        let won = round.status() == RoundStatus::Won;
        let outcome = if won { Outcome::Win } else { Outcome::Lose };
        let record = GameRecord::new(round.word(), outcome, round.score(), round.max_attempts());

        let mut report = RoundReport {
            outcome,
            score: round.score(),
            xp_gained: 0,
            levels_gained: 0,
            level: self.profile.progression.level(),
            completed_quests: Vec::new(),
            record,
        };

        if !won {
            info!(word = round.word(), score = round.score(), "round lost");
            return report;
        }

        let mut fired = vec![events::WIN_GAMES];
        if round.wrong_letters().is_empty() {
            fired.push(events::PERFECT_GAME);
        }
        if Difficulty::from_max_attempts(round.max_attempts()) == Some(Difficulty::Hard) {
            fired.push(events::WIN_HARD);
        }

        let mut xp = u64::try_from(round.score()).unwrap_or(0);
        for event in fired {
            let update = update_quests(&mut self.profile.quests, event, 1);
            xp += update.bonus_xp;

            for id in &update.completed {
                if let Some(quest) = self.profile.quests.iter().find(|q| &q.id == id) {
                    info!(quest = %quest.id, reward = quest.reward, "quest completed");
                    report.completed_quests.push(quest.clone());
                }
            }
        }

        let level_up = self.profile.progression.add_experience(xp);
        if level_up.leveled_up {
            info!(
                level = self.profile.progression.level(),
                gained = level_up.levels_gained,
                "level up"
            );
        }

        info!(word = round.word(), score = round.score(), xp, "round won");

        report.xp_gained = xp;
        report.levels_gained = level_up.levels_gained;
        report.level = self.profile.progression.level();
        report
    }

    /// Activate the first unused inventory item with `item_id`
    ///
    /// `RevealLetter(n)` guesses up to `n` random hidden letters of `round` with normal
    /// scoring. A consumable reveal is refused without a round in progress, so it is
    /// not wasted. Extra lives cannot change a running round's budget and are reported
    /// back as unapplied. Attribute boosts are passive and need no activation.
    pub fn use_item<R: Rng + ?Sized>(
        &mut self,
        item_id: &str,
        mut round: Option<&mut Round>,
        rng: &mut R,
    ) -> Activation {
        let Some(item) = self
            .profile
            .inventory
            .items()
            .iter()
            .find(|item| item.id == item_id && !item.used)
        else {
            return Activation::NotFound;
        };

        let live_round = round.as_deref().is_some_and(|round| !round.is_over());
        let reveals = item
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::RevealLetter(_)));
        if item.is_consumable() && reveals && !live_round {
            debug!(item = item_id, "reveal refused outside a round");
            return Activation::NeedsRound;
        }

        let item = item.clone();
        let Some(effects) = self.profile.inventory.use_item(item_id) else {
            return Activation::NotFound;
        };

        let mut result = ItemUse {
            item,
            revealed: Vec::new(),
            unapplied: Vec::new(),
        };

        for effect in effects {
            match effect {
                Effect::RevealLetter(n) => match round.as_deref_mut() {
                    Some(round) if !round.is_over() => {
                        for _ in 0..n {
                            let hidden = round.unrevealed_letters();
                            let Some(&letter) = hidden.choose(rng) else {
                                break;
                            };
                            if round.guess(letter) {
                                result.revealed.push(letter);
                            }
                        }
                    }
                    _ => result.unapplied.push(effect),
                },
                Effect::ExtraLife(_) => result.unapplied.push(effect),
                Effect::IntelligenceBoost(_)
                | Effect::LuckBoost(_)
                | Effect::PerceptionBoost(_)
                | Effect::ResilienceBoost(_) => {}
            }
        }

        info!(item = item_id, revealed = result.revealed.len(), "item used");
        Activation::Used(result)
    }

    /// Base attributes plus the boosts of all carried equipment
    #[must_use]
    pub fn effective_attributes(&self) -> Attributes {
        let mut attributes = *self.profile.progression.attributes();
        attributes.add(&self.profile.inventory.equipment_bonus());
        attributes
    }

    /// Buy an item, paying its price in current-level experience
    pub fn buy(&mut self, item: &Item) -> Purchase {
        shop::buy(&mut self.profile, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::{ItemKind, basic_items};

    fn session(difficulty: Difficulty) -> Session {
        Session::new(Profile::new(), difficulty)
    }

    fn play(round: &mut Round, letters: &str) {
        for letter in letters.chars() {
            round.guess(letter);
        }
    }

    fn used(activation: Activation) -> ItemUse {
        match activation {
            Activation::Used(used) => used,
            other => panic!("item was not used: {other:?}"),
        }
    }

    fn item(id: &str) -> Item {
        basic_items().into_iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn start_round_uses_session_difficulty() {
        let s = session(Difficulty::Hard);
        let round = s.start_round("Kot");
        assert_eq!(round.max_attempts(), 4);
        assert_eq!(round.word(), "kot");
    }

    #[test]
    fn lost_round_earns_nothing() {
        let mut s = session(Difficulty::Medium);
        let mut round = s.start_round("kot");
        play(&mut round, "abcdeg");
        assert_eq!(round.status(), RoundStatus::Lost);

        let report = s.finish_round(&round);
        assert_eq!(report.outcome, Outcome::Lose);
        assert_eq!(report.xp_gained, 0);
        assert_eq!(report.score, -30);
        assert_eq!(report.record.outcome, Outcome::Lose);
        assert_eq!(s.profile().progression.experience(), 0);
        assert!(s.profile().quests.iter().all(|q| q.progress == 0));
    }

    #[test]
    fn imperfect_win_on_medium() {
        let mut s = session(Difficulty::Medium);
        let mut round = s.start_round("kot");
        play(&mut round, "xkot");
        // 3 hits, 1 miss, win bonus with 5 attempts left
        assert_eq!(round.score(), 30 - 5 + 50 + 25);

        let report = s.finish_round(&round);
        assert_eq!(report.xp_gained, 100);
        assert_eq!(report.levels_gained, 1);
        assert_eq!(report.level, 2);
        assert!(report.completed_quests.is_empty());
        assert_eq!(s.profile().quests[0].progress, 1);
        assert_eq!(s.profile().progression.experience(), 0);
    }

    #[test]
    fn perfect_hard_win_completes_two_quests() {
        let mut s = session(Difficulty::Hard);
        let mut round = s.start_round("kot");
        play(&mut round, "kot");
        // 30 + 50 + 5 * 4
        assert_eq!(round.score(), 100);

        let report = s.finish_round(&round);
        assert_eq!(report.xp_gained, 100 + 100 + 150);
        let ids: Vec<&str> = report.completed_quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["quest_perfect", "quest_difficult"]);
        assert!(report.completed_quests.iter().all(|q| q.completed));
        assert!(report.leveled_up());
        assert_eq!(report.record.max_attempts, 4);
    }

    #[test]
    fn novice_quest_completes_on_third_win() {
        let mut s = session(Difficulty::Easy);
        for n in 1..=3 {
            let mut round = s.start_round("dom");
            play(&mut round, "xdom");
            let report = s.finish_round(&round);
            assert_eq!(report.completed_quests.len(), usize::from(n == 3));
        }
        assert!(s.profile().quests[0].completed);
    }

    #[test]
    fn reveal_potion_guesses_a_hidden_letter() {
        let mut s = session(Difficulty::Medium);
        s.profile.inventory.add_item(item("potion_hint"));

        let mut round = s.start_round("kot");
        round.guess('k');

        let used = used(s.use_item("potion_hint", Some(&mut round), &mut rand::rng()));
        assert_eq!(used.item.id, "potion_hint");
        assert_eq!(used.revealed.len(), 1);
        assert!(used.unapplied.is_empty());
        assert!(['o', 't'].contains(&used.revealed[0]));
        assert_eq!(round.guessed_letters().len(), 2);
        assert_eq!(round.score(), 20);
        assert!(s.profile().inventory.items()[0].used);

        assert_eq!(
            s.use_item("potion_hint", Some(&mut round), &mut rand::rng()),
            Activation::NotFound
        );
    }

    #[test]
    fn reveal_can_win_the_round() {
        let mut s = session(Difficulty::Medium);
        s.profile.inventory.add_item(item("potion_hint"));

        let mut round = s.start_round("kot");
        play(&mut round, "ko");
        used(s.use_item("potion_hint", Some(&mut round), &mut rand::rng()));
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn reveal_potion_is_kept_without_a_round() {
        let mut s = session(Difficulty::Medium);
        s.profile.inventory.add_item(item("potion_hint"));

        assert_eq!(
            s.use_item("potion_hint", None, &mut rand::rng()),
            Activation::NeedsRound
        );
        assert!(!s.profile().inventory.items()[0].used);

        let mut finished = s.start_round("kot");
        play(&mut finished, "kot");
        assert_eq!(
            s.use_item("potion_hint", Some(&mut finished), &mut rand::rng()),
            Activation::NeedsRound
        );
        assert!(!s.profile().inventory.items()[0].used);

        let mut round = s.start_round("kot");
        used(s.use_item("potion_hint", Some(&mut round), &mut rand::rng()));
        assert!(s.profile().inventory.items()[0].used);
    }

    #[test]
    fn extra_life_is_unapplied() {
        let mut s = session(Difficulty::Medium);
        s.profile.inventory.add_item(item("scroll_extra_life"));

        let mut round = s.start_round("kot");
        let used = used(s.use_item("scroll_extra_life", Some(&mut round), &mut rand::rng()));
        assert_eq!(used.unapplied, vec![Effect::ExtraLife(1)]);
        assert_eq!(round.max_attempts(), 6);
    }

    #[test]
    fn equipment_stays_usable_and_boosts_attributes() {
        let mut s = session(Difficulty::Medium);
        let amulet = item("amulet_wisdom");
        assert_eq!(amulet.kind, ItemKind::Equipment);
        s.profile.inventory.add_item(amulet);

        used(s.use_item("amulet_wisdom", None, &mut rand::rng()));
        used(s.use_item("amulet_wisdom", None, &mut rand::rng()));

        let attrs = s.effective_attributes();
        assert_eq!(attrs.intelligence, 3);
        assert_eq!(attrs.luck, 1);
        assert_eq!(s.profile().progression.attributes().intelligence, 1);
    }

    #[test]
    fn unknown_item_is_not_found() {
        let mut s = session(Difficulty::Medium);
        assert_eq!(s.use_item("nope", None, &mut rand::rng()), Activation::NotFound);
    }
}

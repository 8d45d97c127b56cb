//! Formatting utilities for terminal output

use crate::i18n::Texts;
use crate::rpg::{Attributes, Effect, Rarity};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Item name colored by rarity
#[must_use]
pub fn rarity_colored(name: &str, rarity: Rarity) -> ColoredString {
    match rarity {
        Rarity::Common => name.white(),
        Rarity::Uncommon => name.green(),
        Rarity::Rare => name.bright_blue(),
        Rarity::Epic => name.magenta(),
        Rarity::Legendary => name.bright_yellow().bold(),
    }
}

/// Short human-readable description of an effect
#[must_use]
pub fn describe_effect(effect: Effect) -> String {
    let n = effect.magnitude();
    match effect.attribute() {
        Some(attr) => format!("{} +{n}", attr.abbrev()),
        None if matches!(effect, Effect::RevealLetter(_)) => format!("reveal {n}"),
        None => format!("+{n} life"),
    }
}

/// One line per attribute with its derived bonus
#[must_use]
pub fn attribute_lines(attributes: &Attributes, texts: &Texts) -> [String; 4] {
    [
        format!(
            "{} {} (+{:.0}% {})",
            texts.intelligence,
            attributes.intelligence,
            attributes.hint_chance() * 100.0,
            texts.hint_chance
        ),
        format!(
            "{} {} (+{:.1}% {})",
            texts.luck,
            attributes.luck,
            attributes.mistake_avoidance_chance() * 100.0,
            texts.mistake_avoidance
        ),
        format!(
            "{} {} (+{} {})",
            texts.perception,
            attributes.perception,
            attributes.hit_bonus(),
            texts.points_per_hit
        ),
        format!(
            "{} {} (+{} {})",
            texts.resilience,
            attributes.resilience,
            attributes.extra_attempts(),
            texts.extra_attempts
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn effects_are_described() {
        assert_eq!(describe_effect(Effect::RevealLetter(1)), "reveal 1");
        assert_eq!(describe_effect(Effect::ExtraLife(1)), "+1 life");
        assert_eq!(describe_effect(Effect::LuckBoost(3)), "LCK +3");
        assert_eq!(describe_effect(Effect::IntelligenceBoost(2)), "INT +2");
    }

    #[test]
    fn attribute_lines_show_bonuses() {
        let mut attributes = Attributes::new();
        attributes.intelligence = 5;
        attributes.resilience = 6;

        let lines = attribute_lines(&attributes, Language::English.texts());
        assert_eq!(lines[0], "Intelligence: 5 (+10% hint chance)");
        assert_eq!(lines[3], "Resilience: 6 (+2 extra attempts)");
    }
}

//! Display functions for game state and command results

use super::formatters::{attribute_lines, create_progress_bar, describe_effect, rarity_colored};
use super::gallows::gallows;
use crate::commands::SimulationResult;
use crate::core::Round;
use crate::i18n::Texts;
use crate::rpg::{Inventory, Item, Profile};
use crate::session::{Activation, Purchase, RoundReport, Session};
use crate::storage::{Outcome, PlayerStats};
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the running state of a round
pub fn print_round(round: &Round, texts: &Texts) {
    println!("\n{}", "─".repeat(60).cyan());
    let drawing = gallows(round);
    if round.wrong_letters().is_empty() {
        println!("{drawing}");
    } else {
        println!("{}", drawing.red());
    }
    println!();
    println!("{} {}", texts.word, round.reveal().bright_yellow().bold());
    println!(
        "{} {}",
        texts.wrong_guesses,
        round.wrong_letters_display().red()
    );
    println!(
        "{} {}/{}",
        texts.remaining_attempts,
        round.remaining_attempts(),
        round.max_attempts()
    );
    println!("{} {}", texts.points, round.score());

    let pct = round.completion_percentage();
    println!(
        "{} [{}] {pct:.0}%",
        texts.progress,
        create_progress_bar(pct, 100.0, 20).green()
    );
}

/// Print how a round ended and what it earned
pub fn print_round_report(round: &Round, report: &RoundReport, texts: &Texts) {
    println!();
    match report.outcome {
        Outcome::Win => {
            println!("{}", texts.congratulations.green().bold());
            println!("{} {}", texts.you_won, round.word().bright_yellow().bold());
            println!(
                "{} {} {}",
                texts.you_earned,
                report.xp_gained.to_string().bright_yellow(),
                texts.points_suffix
            );
        }
        Outcome::Lose => {
            println!(
                "{} {}",
                texts.you_lost.red().bold(),
                round.word().bright_yellow().bold()
            );
        }
    }

    for quest in &report.completed_quests {
        println!(
            "🏆 {}: {}",
            texts.quest_completed.bright_magenta().bold(),
            texts.quest_name(quest)
        );
    }

    if report.leveled_up() {
        println!(
            "⬆  {}! {} {}",
            texts.level_up.bright_green().bold(),
            texts.level,
            report.level
        );
    }
}

/// Print the result of activating an item
pub fn print_activation(activation: &Activation, texts: &Texts) {
    let used = match activation {
        Activation::Used(used) => used,
        Activation::NotFound => {
            println!("{}", texts.item_not_found.red());
            return;
        }
        Activation::NeedsRound => {
            println!("{}", texts.item_needs_round.yellow());
            return;
        }
    };

    println!("{} {}", texts.item_used, texts.item_name(&used.item).bright_cyan());

    if !used.revealed.is_empty() {
        let letters: Vec<String> = used.revealed.iter().map(char::to_string).collect();
        println!("{} {}", texts.revealed, letters.join(" ").bright_yellow());
    }

    if !used.unapplied.is_empty() && used.revealed.is_empty() {
        println!("{}", texts.item_no_effect.yellow());
    }
}

/// Print level, experience and attributes
pub fn print_character(session: &Session, texts: &Texts) {
    header(texts.character);

    let progression = &session.profile().progression;
    println!("{} {}", texts.level, progression.level().to_string().bold());
    println!(
        "{} [{}] {}/{}",
        texts.experience,
        create_progress_bar(progression.xp_progress(), 1.0, 20).bright_green(),
        progression.experience(),
        progression.next_level_threshold()
    );
    println!();

    for line in attribute_lines(&session.effective_attributes(), texts) {
        println!("   {line}");
    }
}

/// Print open and finished quests
pub fn print_quest_log(profile: &Profile, texts: &Texts) {
    header(texts.quest_log);

    println!("{}", texts.active_quests.bright_cyan().bold());
    let mut any_active = false;
    for quest in profile.active_quests() {
        any_active = true;
        println!(
            "   {} - {} [{}/{}] {} {} XP",
            texts.quest_name(quest).bold(),
            texts.quest_description(quest),
            quest.progress,
            quest.target,
            texts.reward,
            quest.reward
        );
    }
    if !any_active {
        println!("   {}", texts.no_active_quests.bright_black());
    }

    let completed: Vec<_> = profile.completed_quests().collect();
    if !completed.is_empty() {
        println!("\n{}", texts.completed_quests.bright_cyan().bold());
        for quest in completed {
            println!("   {} {}", "✔".green(), texts.quest_name(quest));
        }
    }
}

fn print_item_line(index: usize, item: &Item, texts: &Texts) {
    let effects: Vec<String> = item.effects.iter().map(|&e| describe_effect(e)).collect();
    let used = if item.used {
        format!(" ({})", texts.used).bright_black().to_string()
    } else {
        String::new()
    };

    println!(
        "   {}. {} [{}] {}{}",
        index + 1,
        rarity_colored(texts.item_name(item), item.rarity),
        texts.rarity_name(item.rarity),
        effects.join(", "),
        used
    );
}

/// Print the inventory with 1-based slot numbers
pub fn print_inventory(inventory: &Inventory, texts: &Texts) {
    header(texts.inventory);

    if inventory.is_empty() {
        println!("   {}", texts.empty_inventory.bright_black());
        return;
    }

    for (i, item) in inventory.items().iter().enumerate() {
        print_item_line(i, item, texts);
    }
    println!("   ({}/{})", inventory.len(), inventory.capacity());
}

/// Print the shop catalogue with prices
pub fn print_shop(catalogue: &[Item], experience: u64, texts: &Texts) {
    header(texts.shop);
    println!("{} {}\n", texts.your_xp, experience.to_string().bright_yellow());

    for (i, item) in catalogue.iter().enumerate() {
        print_item_line(i, item, texts);
        println!(
            "      {} - {} {} XP",
            texts.item_description(item),
            texts.price,
            item.rarity.price()
        );
    }
}

/// Print the outcome of a purchase
pub fn print_purchase(purchase: Purchase, item: &Item, texts: &Texts) {
    match purchase {
        Purchase::Bought => println!("{} {}", texts.bought.green(), texts.item_name(item)),
        Purchase::NotEnoughXp => println!("{}", texts.not_enough_xp.red()),
        Purchase::InventoryFull => println!("{}", texts.inventory_full.red()),
    }
}

/// Print aggregate statistics and the most recent games
pub fn print_stats(stats: &PlayerStats, texts: &Texts) {
    header(texts.statistics);

    println!("   {} {}", texts.games_played, stats.games_played);
    println!("   {} {}", texts.games_won, stats.games_won);
    println!(
        "   {} {}",
        texts.win_rate,
        format!("{:.1}%", stats.win_rate()).bright_yellow()
    );
    println!("   {} {}", texts.total_points, stats.total_points);
    println!("   {} {:.1}", texts.average_score, stats.average_score());
    println!("   {} {}", texts.highest_score, stats.highest_score);

    let recent = stats.last_games(5);
    if recent.is_empty() {
        return;
    }

    println!("\n{}", texts.recent_games.bright_cyan().bold());
    for game in recent.iter().rev() {
        let outcome = match game.outcome {
            Outcome::Win => texts.won.green(),
            Outcome::Lose => texts.lost.red(),
        };
        println!(
            "   {} {:<12} {:>10} {:>5} {}",
            game.date.format("%Y-%m-%d %H:%M"),
            game.word,
            outcome,
            game.score,
            texts.points_suffix
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    header("SIMULATION RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average score:    {:.1}", result.average_score);
    println!("   Best score:       {}", result.max_score.to_string().green());
    println!("   Worst score:      {}", result.min_score.to_string().yellow());
    println!("   Level reached:    {}", result.final_level);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for (&wrong, &count) in &result.wrong_guess_distribution {
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong}: {bar} {count:4} ({pct:5.1}%)");
    }
}

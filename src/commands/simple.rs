//! Simple interactive CLI mode
//!
//! The full game without the TUI: a numbered main menu and a line-by-line round loop.

use super::context::GameContext;
use crate::core::{Difficulty, Round, is_letter};
use crate::i18n::Language;
use crate::output::{
    print_activation, print_character, print_inventory, print_purchase, print_quest_log,
    print_round, print_round_report, print_shop, print_stats,
};
use crate::session::{Activation, shop_catalogue};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundInput {
    Letter(char),
    Item(usize),
    Invalid,
}

fn parse_round_input(input: &str) -> RoundInput {
    if let Ok(slot) = input.parse::<usize>() {
        return RoundInput::Item(slot);
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_letter(ch) => RoundInput::Letter(ch),
        _ => RoundInput::Invalid,
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading input or saving progress.
pub fn run_simple(ctx: &mut GameContext) -> Result<()> {
    loop {
        let texts = ctx.texts();

        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("  {}", texts.title.bright_yellow().bold());
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!("{}", texts.main_menu.bright_cyan().bold());
        let options = [
            texts.new_game,
            texts.difficulty,
            texts.statistics,
            texts.inventory,
            texts.quest_log,
            texts.shop,
            texts.character,
            texts.language,
            texts.exit,
        ];
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        match get_user_input(texts.select_option)?.as_str() {
            "1" => play_round(ctx)?,
            "2" => choose_difficulty(ctx)?,
            "3" => {
                print_stats(ctx.stats().stats(), texts);
                pause(ctx)?;
            }
            "4" => inventory_menu(ctx)?,
            "5" => {
                print_quest_log(ctx.session().profile(), texts);
                pause(ctx)?;
            }
            "6" => shop_menu(ctx)?,
            "7" => {
                print_character(ctx.session(), texts);
                pause(ctx)?;
            }
            "8" => choose_language(ctx)?,
            "9" | "q" | "quit" | "exit" => {
                println!("\n👋\n");
                return Ok(());
            }
            _ => println!("{}", texts.invalid_option.red()),
        }
    }
}

fn play_round(ctx: &mut GameContext) -> Result<()> {
    let texts = ctx.texts();
    let Some(mut round) = ctx.new_round() else {
        anyhow::bail!("the word list is empty");
    };

    if !ctx.session().profile().inventory.is_empty() {
        println!("{}", texts.item_hint.bright_black());
    }

    while !round.is_over() {
        print_round(&round, texts);

        match parse_round_input(&get_user_input(texts.enter_letter)?) {
            RoundInput::Letter(letter) => {
                if !round.guess(letter) {
                    println!("{}", texts.already_guessed.yellow());
                }
            }
            RoundInput::Item(slot) => {
                let activation = ctx.use_slot(slot, Some(&mut round))?;
                print_activation(&activation, texts);
            }
            RoundInput::Invalid => println!("{}", texts.invalid_character.red()),
        }
    }

    finish(ctx, &round)
}

fn finish(ctx: &mut GameContext, round: &Round) -> Result<()> {
    let report = ctx.finish_round(round)?;
    print_round(round, ctx.texts());
    print_round_report(round, &report, ctx.texts());
    pause(ctx)
}

fn choose_difficulty(ctx: &mut GameContext) -> Result<()> {
    let texts = ctx.texts();
    println!("\n{}", texts.difficulty.bright_cyan().bold());
    for difficulty in Difficulty::ALL {
        println!("  {}. {}", difficulty.selector(), texts.difficulty_name(difficulty));
    }

    let input = get_user_input(texts.select_option)?;
    let selector = input.parse::<i64>().unwrap_or(0);
    let difficulty = Difficulty::from_selector(selector);

    if Difficulty::ALL.iter().all(|d| i64::from(d.selector()) != selector) {
        println!("{}", texts.default_difficulty.yellow());
    }

    ctx.set_difficulty(difficulty)?;
    println!("{} {}", texts.difficulty_set, texts.difficulty_name(difficulty).green());
    Ok(())
}

fn choose_language(ctx: &mut GameContext) -> Result<()> {
    let texts = ctx.texts();
    println!("\n{}", texts.language.bright_cyan().bold());
    for (i, language) in Language::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, language.self_name());
    }

    let input = get_user_input(texts.select_option)?;
    let chosen = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Language::ALL.get(i).copied());

    match chosen {
        Some(language) => ctx.set_language(language)?,
        None => println!("{}", texts.invalid_option.red()),
    }
    Ok(())
}

fn inventory_menu(ctx: &mut GameContext) -> Result<()> {
    let texts = ctx.texts();
    print_inventory(&ctx.session().profile().inventory, texts);
    if ctx.session().profile().inventory.is_empty() {
        return pause(ctx);
    }

    let input = get_user_input(texts.select_item)?;
    if input.is_empty() {
        return Ok(());
    }

    let activation = match input.parse::<usize>() {
        Ok(slot) => ctx.use_slot(slot, None)?,
        Err(_) => Activation::NotFound,
    };
    print_activation(&activation, texts);
    pause(ctx)
}

fn shop_menu(ctx: &mut GameContext) -> Result<()> {
    loop {
        let texts = ctx.texts();
        let catalogue = shop_catalogue();
        print_shop(
            &catalogue,
            ctx.session().profile().progression.experience(),
            texts,
        );

        let input = get_user_input(texts.select_purchase)?;
        if input.is_empty() {
            return Ok(());
        }

        let bought = match input.parse::<usize>() {
            Ok(slot) => ctx.buy_slot(slot)?,
            Err(_) => None,
        };
        match bought {
            Some((item, purchase)) => print_purchase(purchase, &item, texts),
            None => println!("{}", texts.invalid_option.red()),
        }
    }
}

fn pause(ctx: &GameContext) -> Result<()> {
    get_user_input(ctx.texts().press_enter)?;
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_guesses() {
        assert_eq!(parse_round_input("k"), RoundInput::Letter('k'));
        assert_eq!(parse_round_input("Ż"), RoundInput::Letter('Ż'));
    }

    #[test]
    fn numbers_are_item_slots() {
        assert_eq!(parse_round_input("1"), RoundInput::Item(1));
        assert_eq!(parse_round_input("10"), RoundInput::Item(10));
    }

    #[test]
    fn everything_else_is_invalid() {
        assert_eq!(parse_round_input(""), RoundInput::Invalid);
        assert_eq!(parse_round_input("ab"), RoundInput::Invalid);
        assert_eq!(parse_round_input("?"), RoundInput::Invalid);
        assert_eq!(parse_round_input("-1"), RoundInput::Invalid);
    }
}

//! Hangman RPG - CLI
//!
//! Word-guessing game with experience, levels, quests and items. Plays in a TUI by
//! default, or line by line with `simple`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_rpg::{
    autoplay::GuesserType,
    commands::{GameContext, run_simple, run_simulation},
    core::Difficulty,
    i18n::Language,
    output::{print_simulation_result, print_stats},
    storage::{DataDir, Preferences, StatsStore},
    wordlists::WordList,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word game with RPG progression",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: 1 = easy (8 attempts), 2 = medium (6), 3 = hard (4)
    #[arg(short, long, global = true)]
    difficulty: Option<i64>,

    /// Interface and word list language: pl or en
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Custom word list file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for statistics, preferences and the character profile
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode with the full menu, no TUI
    Simple,

    /// Play many rounds automatically and report the results
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,
    },

    /// Show saved statistics
    Stats,

    /// Delete all saved statistics
    ResetStats,
}

/// Send logs to stderr, or to a file while the TUI owns the terminal
///
/// The filter comes from `RUST_LOG` and defaults to `warn`.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .without_time()
                .init();
        }
    }

    Ok(())
}

/// Stored preferences with command-line overrides applied
fn resolve_preferences(cli: &Cli, data_dir: &DataDir) -> Result<Preferences> {
    let path = data_dir.preferences_path();
    let stored = Preferences::load_or_default(&path);

    let mut prefs = stored;
    if let Some(selector) = cli.difficulty {
        prefs.difficulty = Difficulty::from_selector(selector);
    }
    if let Some(language) = cli.language {
        prefs.language = language;
    }

    if prefs != stored {
        prefs.save(&path).context("failed to save preferences")?;
    }

    Ok(prefs)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
    data_dir
        .ensure_exists()
        .context("failed to create data directory")?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then(|| data_dir.log_path());
    init_logging(log_file.as_deref())?;
    debug!(data_dir = %data_dir.root().display(), "starting");

    let prefs = resolve_preferences(&cli, &data_dir)?;

    match command {
        Commands::Play => run_play_command(&data_dir, prefs, cli.wordlist.as_deref()),
        Commands::Simple => run_simple_command(&data_dir, prefs, cli.wordlist.as_deref()),
        Commands::Simulate { rounds, guesser } => {
            run_simulate_command(prefs, cli.wordlist.as_deref(), rounds, &guesser)
        }
        Commands::Stats => run_stats_command(&data_dir, prefs),
        Commands::ResetStats => run_reset_stats_command(&data_dir),
    }
}

fn run_play_command(
    data_dir: &DataDir,
    prefs: Preferences,
    wordlist: Option<&Path>,
) -> Result<()> {
    use hangman_rpg::interactive::{App, run_tui};

    let ctx = GameContext::open(data_dir, prefs, wordlist)?;
    run_tui(App::new(ctx))
}

fn run_simple_command(
    data_dir: &DataDir,
    prefs: Preferences,
    wordlist: Option<&Path>,
) -> Result<()> {
    let mut ctx = GameContext::open(data_dir, prefs, wordlist)?;
    run_simple(&mut ctx)
}

fn run_simulate_command(
    prefs: Preferences,
    wordlist: Option<&Path>,
    rounds: usize,
    guesser_name: &str,
) -> Result<()> {
    let words = match wordlist {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(prefs.language),
    };

    println!(
        "Simulating {rounds} rounds on {} ({} words, {guesser_name} guesser)...",
        prefs.difficulty,
        words.len()
    );

    let guesser = GuesserType::from_name(guesser_name);
    let result = run_simulation(&guesser, &words, prefs.difficulty, rounds, true);
    print_simulation_result(&result);
    Ok(())
}

fn run_stats_command(data_dir: &DataDir, prefs: Preferences) -> Result<()> {
    let store = StatsStore::open(data_dir.stats_path()).context("failed to load statistics")?;
    print_stats(store.stats(), prefs.language.texts());
    Ok(())
}

fn run_reset_stats_command(data_dir: &DataDir) -> Result<()> {
    let mut store = StatsStore::open(data_dir.stats_path()).unwrap_or_else(|e| {
        info!(error = %e, "replacing unreadable statistics");
        StatsStore::empty(data_dir.stats_path())
    });
    store.reset().context("failed to reset statistics")?;
    println!("Statistics cleared.");
    Ok(())
}

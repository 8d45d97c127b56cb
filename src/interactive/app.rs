//! TUI application state and logic

use crate::commands::GameContext;
use crate::core::{Round, is_letter};
use crate::session::{Activation, RoundReport};
use crate::storage::Outcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App {
    pub ctx: GameContext,
    pub round: Option<Round>,
    pub last_report: Option<RoundReport>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start the first round
    #[must_use]
    pub fn new(ctx: GameContext) -> Self {
        let mut app = Self {
            ctx,
            round: None,
            last_report: None,
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        self.last_report = None;
        self.round = self.ctx.new_round();

        if self.round.is_some() {
            self.input_mode = InputMode::Guessing;
            let texts = self.ctx.texts();
            self.add_message(texts.enter_letter, MessageStyle::Info);
            if !self.ctx.session().profile().inventory.is_empty() {
                self.add_message(texts.item_hint, MessageStyle::Info);
            }
        } else {
            self.input_mode = InputMode::RoundOver;
            self.add_message("The word list is empty.", MessageStyle::Error);
        }
    }

    pub fn handle_letter(&mut self, letter: char) {
        let texts = self.ctx.texts();
        let Some(round) = self.round.as_mut() else {
            return;
        };

        if !is_letter(letter) {
            self.add_message(texts.invalid_character, MessageStyle::Error);
            return;
        }

        if !round.guess(letter) {
            self.add_message(texts.already_guessed, MessageStyle::Error);
            return;
        }

        self.check_round_over();
    }

    /// Use the item in 1-based inventory `slot` on the current round
    pub fn use_slot(&mut self, slot: usize) {
        let texts = self.ctx.texts();
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match self.ctx.use_slot(slot, Some(round)) {
            Ok(Activation::Used(used)) => {
                let mut text = format!("{} {}", texts.item_used, texts.item_name(&used.item));
                if !used.revealed.is_empty() {
                    let letters: Vec<String> = used.revealed.iter().map(char::to_string).collect();
                    text = format!("{text}. {} {}", texts.revealed, letters.join(" "));
                } else if !used.unapplied.is_empty() {
                    text = format!("{text}. {}", texts.item_no_effect);
                }
                self.add_message(&text, MessageStyle::Success);
                self.check_round_over();
            }
            Ok(Activation::NotFound) => self.add_message(texts.item_not_found, MessageStyle::Error),
            Ok(Activation::NeedsRound) => {
                self.add_message(texts.item_needs_round, MessageStyle::Error);
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn check_round_over(&mut self) {
        let Some(round) = self.round.clone().filter(Round::is_over) else {
            return;
        };

        let texts = self.ctx.texts();
        match self.ctx.finish_round(&round) {
            Ok(report) => {
                match report.outcome {
                    Outcome::Win => self.add_message(
                        &format!(
                            "{} {} {} {}",
                            texts.congratulations,
                            texts.you_earned,
                            report.xp_gained,
                            texts.points_suffix
                        ),
                        MessageStyle::Success,
                    ),
                    Outcome::Lose => self.add_message(
                        &format!("{} {}", texts.you_lost, round.word()),
                        MessageStyle::Error,
                    ),
                }
                for quest in &report.completed_quests {
                    self.add_message(
                        &format!("{}: {}", texts.quest_completed, texts.quest_name(quest)),
                        MessageStyle::Success,
                    );
                }
                if report.leveled_up() {
                    self.add_message(
                        &format!("{}! {} {}", texts.level_up, texts.level, report.level),
                        MessageStyle::Success,
                    );
                }
                self.last_report = Some(report);
            }
            Err(e) => self.report_error(&e),
        }

        self.add_message(texts.round_over_hint, MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    fn report_error(&mut self, e: &anyhow::Error) {
        error!(error = %e, "failed to save progress");
        self.add_message(&format!("Error: {e}"), MessageStyle::Error);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if let Some(slot) = c.to_digit(10) {
                        self.use_slot(slot as usize);
                    } else {
                        self.handle_letter(c);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("tui started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("tui closed");
    Ok(())
}

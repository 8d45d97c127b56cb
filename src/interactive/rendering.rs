//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::describe_effect;
use crate::output::gallows::{GALLOWS_HEIGHT, GALLOWS_WIDTH, gallows};
use crate::rpg::AttributeType;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(17),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round
            Constraint::Percentage(40), // Character
        ])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_character_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let title = format!(
        "{}  |  {}",
        texts.title,
        texts.difficulty_name(app.ctx.session().difficulty())
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GALLOWS_HEIGHT as u16 + 2), // Gallows and word
            Constraint::Min(4),                             // Messages
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GALLOWS_WIDTH as u16 + 4), // Gallows
            Constraint::Min(20),                          // Word and gauges
        ])
        .split(rows[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Word
            Constraint::Length(3), // Attempts
            Constraint::Length(3), // Completion
        ])
        .split(columns[1]);

    render_gallows(f, app, columns[0]);
    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_completion(f, app, chunks[2]);
    render_messages(f, app, rows[1]);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let (drawing, color) = app.round.as_ref().map_or(("", Color::White), |round| {
        let color = if round.wrong_letters().is_empty() {
            Color::White
        } else {
            Color::Red
        };
        (gallows(round), color)
    });

    let paragraph = Paragraph::new(drawing)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let block = Block::default()
        .title(format!(" {} ", texts.word))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(round) = &app.round else {
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    // Show the full word once the round is over
    let word = if round.is_over() {
        round.word().chars().map(String::from).collect::<Vec<_>>().join(" ")
    } else {
        round.reveal()
    };

    let content = vec![
        Line::from(Span::styled(
            word.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{} ", texts.wrong_guesses)),
            Span::styled(
                round.wrong_letters_display().to_uppercase(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(format!("{} {}", texts.points, round.score())),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let (remaining, max) = app
        .round
        .as_ref()
        .map_or((0, 0), |r| (r.remaining_attempts(), r.max_attempts()));

    let ratio = if max == 0 {
        0.0
    } else {
        remaining as f64 / max as f64
    };
    let color = match ratio {
        r if r > 0.5 => Color::Green,
        r if r > 0.25 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", texts.remaining_attempts))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_completion(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let pct = app
        .round
        .as_ref()
        .map_or(0.0, crate::core::Round::completion_percentage);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", texts.progress))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{pct:.0}%"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_character_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // XP gauge
            Constraint::Length(6), // Attributes
            Constraint::Min(4),    // Quests
            Constraint::Min(4),    // Inventory
        ])
        .split(area);

    render_experience(f, app, chunks[0]);
    render_attributes(f, app, chunks[1]);
    render_quests(f, app, chunks[2]);
    render_inventory(f, app, chunks[3]);
}

fn render_experience(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let progression = &app.ctx.session().profile().progression;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} {} ", texts.level, progression.level()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(progression.xp_progress())
        .label(format!(
            "{}/{} XP",
            progression.experience(),
            progression.next_level_threshold()
        ));

    f.render_widget(gauge, area);
}

fn render_attributes(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let attributes = app.ctx.session().effective_attributes();

    let lines: Vec<Line> = AttributeType::all()
        .into_iter()
        .map(|attr| {
            Line::from(vec![
                Span::raw(format!("{:<16}", texts.attribute_name(attr))),
                Span::styled(
                    attributes.get(attr).to_string(),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", texts.character))
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_quests(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let profile = app.ctx.session().profile();

    let mut items: Vec<ListItem> = profile
        .active_quests()
        .map(|q| {
            ListItem::new(format!(
                "{} [{}/{}]",
                texts.quest_name(q),
                q.progress,
                q.target
            ))
        })
        .collect();
    items.extend(profile.completed_quests().map(|q| {
        ListItem::new(format!("✔ {}", texts.quest_name(q)))
            .style(Style::default().fg(Color::DarkGray))
    }));

    if items.is_empty() {
        items.push(ListItem::new(texts.no_active_quests));
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", texts.quest_log))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_inventory(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let inventory = &app.ctx.session().profile().inventory;

    let items: Vec<ListItem> = if inventory.is_empty() {
        vec![ListItem::new(texts.empty_inventory).style(Style::default().fg(Color::DarkGray))]
    } else {
        inventory
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let effects: Vec<String> =
                    item.effects.iter().map(|&e| describe_effect(e)).collect();
                let style = if item.used {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!(
                    "{}. {} ({})",
                    i + 1,
                    texts.item_name(item),
                    effects.join(", ")
                ))
                    .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(
                " {} {}/{} ",
                texts.inventory,
                inventory.len(),
                inventory.capacity()
            ))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let texts = app.ctx.texts();
    let stats = app.ctx.stats().stats();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "{} {} | {} {:.0}%",
        texts.games_played,
        stats.games_played,
        texts.win_rate,
        stats.win_rate()
    );
    let stats_line = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(stats_line, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: guess | 1-9: use item | Esc: quit",
        InputMode::RoundOver => texts.round_over_hint,
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

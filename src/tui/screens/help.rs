//! Help screen: scrollable keybinding and field-rule reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static ADD_CAR_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter / Ctrl+S", "save car"),
    ("Ctrl+R", "reset all fields"),
    ("Enter / Esc", "dismiss message"),
    ("Esc", "quit"),
    ("F1", "help"),
];

static FIELD_RULES: &[(&str, &str)] = &[
    ("Manufacturer", "3-15 letters, no spaces or digits"),
    ("Model", "2-10 characters, one word longer than two"),
    ("Year", "four digits, 1901-2021"),
    ("Price", "whole number, 9,999-100,000,000"),
    ("Km Traveled", "0-500000, at most one decimal place"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc / F1", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => {
                self.scroll = 0;
                Action::Navigate(Screen::AddCar)
            }
            _ => Action::None,
        }
    }
}

fn section<'a>(title: &'a str, rows: &'a [(&'a str, &'a str)]) -> Vec<Line<'a>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Yellow);

    let mut lines = vec![Line::from(Span::styled(title, heading))];
    lines.extend(rows.iter().map(|(k, desc)| {
        Line::from(vec![
            Span::styled(format!("  {k:<18}"), key),
            Span::raw(*desc),
        ])
    }));
    lines.push(Line::from(""));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = section("Add a Car", ADD_CAR_KEYS);
    lines.extend(section("Field rules", FIELD_RULES));
    lines.extend(section("Help", HELP_KEYS));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((state.scroll(), 0));
    frame.render_widget(paragraph, area);
}

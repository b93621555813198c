//! Add-car screen: form for entering a new car record.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::collection::CapacityError;
use crate::model::CarEntry;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::notice::{Notice, NoticeKind, NoticeQueue, draw_notice};

/// Field index for manufacturer.
const MANUFACTURER: usize = 0;
/// Field index for model.
const MODEL: usize = 1;
/// Field index for free-text notes.
const INFO: usize = 2;
/// Field index for model year.
const YEAR: usize = 3;
/// Field index for price.
const PRICE: usize = 4;
/// Field index for kilometers traveled.
const KILOMETERS: usize = 5;

/// State for the add-car screen.
#[derive(Debug, Clone)]
pub struct AddCarState {
    form: Form,
    notices: NoticeQueue,
}

impl Default for AddCarState {
    fn default() -> Self {
        Self::new()
    }
}

impl AddCarState {
    /// Creates an empty add-car form with focus on the manufacturer.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Manufacturer").with_hint("letters only"),
                FormField::new("Model"),
                FormField::new("Extra Info"),
                FormField::new("Year").with_hint("YYYY"),
                FormField::new("Price"),
                FormField::new("Km Traveled"),
            ]),
            notices: NoticeQueue::new(),
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the pending notices.
    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Returns the raw text of all six fields.
    pub fn entry(&self) -> CarEntry {
        CarEntry {
            manufacturer: self.form.value(MANUFACTURER).to_string(),
            model: self.form.value(MODEL).to_string(),
            info: self.form.value(INFO).to_string(),
            year: self.form.value(YEAR).to_string(),
            price: self.form.value(PRICE).to_string(),
            kilometers: self.form.value(KILOMETERS).to_string(),
        }
    }

    /// Clears all six fields and returns focus to the manufacturer field.
    pub fn reset(&mut self) {
        self.form.reset();
        self.form.set_focus(MANUFACTURER);
    }

    /// Reports the collection's answer to a submitted car.
    ///
    /// On success a confirmation is queued and the form is cleared. A refusal
    /// queues a warning and leaves the fields as typed.
    pub fn show_add_result(&mut self, result: Result<(), CapacityError>) {
        match result {
            Ok(()) => {
                self.notices
                    .push(Notice::new(NoticeKind::Information, "Record added."));
                self.reset();
            }
            Err(e) => self.notices.push(e),
        }
    }

    /// Validates the form and, if it passes, asks the app to add the car.
    fn save(&mut self) -> Action {
        match self.entry().validate() {
            Ok(car) => Action::AddCar(car),
            Err(errors) => {
                debug!("car entry rejected: {errors:?}");
                for e in errors {
                    self.notices.push(e);
                }
                Action::None
            }
        }
    }
}

impl ScreenState for AddCarState {
    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// While a notice is shown only Enter and Esc do anything: they dismiss it.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if !self.notices.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.dismiss();
            }
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => {
                debug!("form reset");
                self.reset();
                Action::None
            }
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char(_) if ctrl => Action::None,
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Enter => self.save(),
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the add-car screen, with the front notice on top if one is pending.
#[mutants::skip]
pub fn draw_add_car(state: &AddCarState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Add a Car ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, buttons_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(18),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    let button = Style::default().add_modifier(Modifier::BOLD);
    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[ Reset ]", button),
        Span::raw("   "),
        Span::styled("[ Save ]", button),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(buttons, buttons_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: save  Ctrl+R: reset  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(notice) = state.notices().front() {
        draw_notice(notice, state.notices().len() - 1, frame, area);
    }
}

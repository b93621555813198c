//! Modal notices: queued messages that block the form until dismissed.

use std::collections::VecDeque;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::collection::CapacityError;
use crate::model::ValidationError;

/// Severity of a [`Notice`]; decides its title and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// A field failed validation.
    Error,
    /// The collection refused a car.
    Warning,
    /// An action succeeded.
    Information,
}

impl NoticeKind {
    /// Title shown in the notice border.
    pub fn title(self) -> &'static str {
        match self {
            Self::Error => "Invalid field",
            Self::Warning => "Problem adding car",
            Self::Information => "Confirmation",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
            Self::Information => Color::Green,
        }
    }
}

/// A single message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Creates a notice of the given kind.
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Self::new(NoticeKind::Error, err.to_string())
    }
}

impl From<CapacityError> for Notice {
    fn from(err: CapacityError) -> Self {
        Self::new(NoticeKind::Warning, err.to_string())
    }
}

/// First-in, first-out queue of pending notices.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notice behind any already pending.
    pub fn push(&mut self, notice: impl Into<Notice>) {
        self.pending.push_back(notice.into());
    }

    /// Returns the notice currently shown, if any.
    pub fn front(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Removes the notice currently shown.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Renders `notice` as a centred modal box over `area`.
///
/// `remaining` is the number of notices queued behind this one.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_notice(notice: &Notice, remaining: usize, frame: &mut Frame, area: Rect) {
    let message_lines: Vec<Line> = notice.message.lines().map(Line::from).collect();
    let height = u16::try_from(message_lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(row);

    let footer = if remaining > 0 {
        format!(" Enter: OK ({remaining} more) ")
    } else {
        " Enter: OK ".to_string()
    };

    let block = Block::default()
        .title(format!(" {} ", notice.kind.title()))
        .title_bottom(Line::from(footer).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(notice.kind.color()));

    let paragraph = Paragraph::new(message_lines)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

//! Status bar widget: one-line collection summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::collection::CarSystem;

/// Data passed to the status bar widget; decoupled from the collection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Total cars in the collection.
    pub car_count: usize,
    /// Distinct manufacturers in the collection.
    pub manufacturer_count: usize,
}

impl StatusBarContext {
    /// Snapshots the counts from `system`.
    pub fn from_system(system: &impl CarSystem) -> Self {
        Self {
            car_count: system.car_count(),
            manufacturer_count: system.manufacturer_count(),
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Empty collection: `No cars in stock`
/// - Otherwise:        `3 cars  2 manufacturers` (singular when the count is 1)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let line = if ctx.car_count == 0 {
        Line::from(Span::styled("No cars in stock", cyan))
    } else {
        Line::from(vec![
            Span::styled(plural(ctx.car_count, "car"), cyan),
            Span::styled("  ", cyan),
            Span::styled(plural(ctx.manufacturer_count, "manufacturer"), cyan),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

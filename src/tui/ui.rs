//! UI rendering helpers for TUI
//!
//! Common UI utilities and layout helpers.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Cut `text` so it occupies at most `max_width` terminal columns.
///
/// Wide characters (CJK, emoji) count as two columns and are never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Render a single footer line of key hints at the bottom of `area`.
pub fn render_footer_text(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let footer_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let footer = Paragraph::new(Line::from(text.to_string()))
        .style(theme.afterglow_style())
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, footer_area);
}

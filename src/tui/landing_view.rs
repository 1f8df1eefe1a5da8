//! Landing screen shown in konami mode while the terminal is closed.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::ui::{centered_rect, render_footer_text};
use crate::landing::{self, LineKind};
use crate::theme::Theme;

const FOOTER: &str = "↑/↓ PgUp/PgDn: scroll  q: quit";

fn style_for(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Banner | LineKind::Heading => theme.heading_style(),
        LineKind::Title => theme.beam_style(),
        LineKind::Body | LineKind::Bullet | LineKind::Blank => theme.phosphor_style(),
        LineKind::Detail | LineKind::Hint => theme.afterglow_style(),
    }
}

/// Draw the page starting `scroll` rows from the top.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, scroll: u16) {
    let body = Rect {
        height: area.height.saturating_sub(1),
        ..centered_rect(90, 100, area)
    };
    let lines: Vec<Line> = landing::page()
        .into_iter()
        .map(|line| {
            let alignment = match line.kind {
                LineKind::Banner | LineKind::Heading | LineKind::Hint => Alignment::Center,
                _ => Alignment::Left,
            };
            let style = style_for(line.kind, theme);
            Line::from(Span::styled(line.text, style)).alignment(alignment)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        body,
    );
    render_footer_text(frame, area, FOOTER, theme);
}

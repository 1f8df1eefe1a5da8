//! Terminal screen rendering.
//!
//! The transcript is always scrolled to the bottom: only the last lines
//! that fit are drawn, with the input line under them.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ui::truncate_to_width;
use crate::shell::{Mode, TerminalSession};
use crate::theme::Theme;

/// The input line as displayed, with a block cursor.
pub fn input_line(session: &TerminalSession) -> String {
    format!("{} $ {}_", session.prompt(), session.input())
}

/// Lines that fit in a `width` x `height` viewport, bottom-aligned.
///
/// Multi-line transcript entries are split. The input line is only shown
/// while the session accepts commands.
pub fn visible_lines(session: &TerminalSession, width: usize, height: usize) -> Vec<String> {
    let mut lines: Vec<&str> = session
        .transcript()
        .iter()
        .flat_map(|entry| entry.split('\n'))
        .collect();
    let input = input_line(session);
    if session.mode() == Mode::Repl {
        lines.push(&input);
    }
    let skip = lines.len().saturating_sub(height);
    lines[skip..]
        .iter()
        .map(|line| truncate_to_width(line, width))
        .collect()
}

/// Render the session into `area`. `closable` adds the Esc hint.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &TerminalSession,
    theme: &Theme,
    closable: bool,
) {
    let hint = if closable {
        " Esc: close | Ctrl-C: quit "
    } else {
        " Ctrl-C: quit "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.afterglow_style())
        .title(Span::styled(
            format!(" {} ", session.prompt()),
            theme.heading_style(),
        ))
        .title_bottom(Line::from(hint).style(theme.afterglow_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = visible_lines(session, inner.width as usize, inner.height as usize);
    let last = lines.len().saturating_sub(1);
    let styled: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == last && session.mode() == Mode::Repl {
                theme.beam_style()
            } else {
                theme.phosphor_style()
            };
            Line::from(Span::styled(line, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(styled), inner);
}

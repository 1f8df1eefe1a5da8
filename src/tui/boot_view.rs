//! Boot screen rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use super::ui::{centered_rect, render_footer_text};
use crate::boot::{BootState, Scene, LOGIN_MASK};
use crate::shell::content::OWNER;
use crate::theme::Theme;

/// Shown on every scene that can still be skipped.
pub const SKIP_HINT: &str = "Press ESC or click to skip";

/// Text lines of a scene, without the progress bar.
pub fn scene_lines(state: &BootState) -> Vec<String> {
    match state.scene {
        Scene::Crash => vec![
            ":(".to_string(),
            String::new(),
            "Your portfolio has run into a problem and needs to restart.".to_string(),
            "We're just collecting some info, and then we'll restart for you.".to_string(),
            String::new(),
            format!("{}% complete", state.progress),
        ],
        Scene::Restart => vec![
            "Restarting...".to_string(),
            String::new(),
            "Configuring updates".to_string(),
            "Do not turn off your computer".to_string(),
            "Update 1 of 3...".to_string(),
        ],
        Scene::Loading => vec!["Loading Portfolio...".to_string()],
        Scene::Login => {
            let typed: String = LOGIN_MASK.chars().take(state.typed).collect();
            vec![
                OWNER.to_string(),
                String::new(),
                format!("Password: {}_", typed),
            ]
        }
    }
}

/// Render the current boot scene into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &BootState, theme: &Theme) {
    let crashed = state.scene == Scene::Crash;
    let background = if crashed {
        theme.crash_style()
    } else {
        Style::default()
    };
    frame.render_widget(Block::default().style(background), area);

    let content = centered_rect(80, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(content);

    let lines: Vec<Line> = scene_lines(state).into_iter().map(Line::from).collect();
    let text_style = if crashed {
        background
    } else {
        theme.phosphor_style()
    };
    frame.render_widget(
        Paragraph::new(lines)
            .style(text_style)
            .alignment(Alignment::Center),
        chunks[0],
    );

    if state.scene.has_progress() {
        let gauge = Gauge::default()
            .gauge_style(theme.beam_style())
            .percent(u16::from(state.progress.min(100)))
            .label("");
        frame.render_widget(gauge, chunks[1]);
    }

    if state.scene < Scene::TERMINAL {
        render_footer_text(frame, area, SKIP_HINT, theme);
    }
}

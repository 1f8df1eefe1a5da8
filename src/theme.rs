//! Screen palettes for the TUI and colored CLI output.
//!
//! Each palette describes a monitor: the glyph color of its phosphor, the
//! faded afterglow used for hints, the bright beam used for prompts and
//! progress, and the colors of the crash screen. CLI output uses the same
//! palette through 24-bit or 256-color escape codes.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named themes selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// P1 green phosphor
    #[default]
    Matrix,
    /// P3 amber phosphor
    Amber,
    /// Blue-white glow on a deep navy crash screen
    Ocean,
}

/// Colors of the crash scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashColors {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Transcript and scene text
    pub phosphor: Color,
    /// Hints, footers, borders, details
    pub afterglow: Color,
    /// Prompt, paddles, headings and gauge fill
    pub beam: Color,
    /// Confirmations in CLI output
    pub ok: Color,
    pub crash: CrashColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Matrix => Self::matrix(),
            ThemeName::Amber => Self::amber(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    pub fn matrix() -> Self {
        Self {
            phosphor: Color::Rgb(0x33, 0xff, 0x66),
            afterglow: Color::Rgb(0x1a, 0x80, 0x33),
            beam: Color::Rgb(0xb3, 0xff, 0xc6),
            ok: Color::Rgb(0x33, 0xff, 0x66),
            // The blue of a modern stop screen
            crash: CrashColors {
                background: Color::Rgb(0x00, 0x78, 0xd7),
                foreground: Color::White,
            },
        }
    }

    pub fn amber() -> Self {
        Self {
            phosphor: Color::Rgb(0xff, 0xb0, 0x00),
            afterglow: Color::Rgb(0x80, 0x58, 0x00),
            beam: Color::Rgb(0xff, 0xd8, 0x80),
            ok: Color::Rgb(0xff, 0xcc, 0x33),
            // Older, darker stop-screen blue
            crash: CrashColors {
                background: Color::Rgb(0x00, 0x00, 0xaa),
                foreground: Color::Rgb(0xff, 0xff, 0xff),
            },
        }
    }

    /// 256-color palette, for terminals without 24-bit color.
    pub fn ocean() -> Self {
        Self {
            phosphor: Color::Indexed(81),
            afterglow: Color::Indexed(31),
            beam: Color::Indexed(195),
            ok: Color::Indexed(85),
            crash: CrashColors {
                background: Color::Indexed(17),
                foreground: Color::Indexed(195),
            },
        }
    }

    pub fn phosphor_style(&self) -> Style {
        Style::default().fg(self.phosphor)
    }

    pub fn afterglow_style(&self) -> Style {
        Style::default().fg(self.afterglow)
    }

    pub fn beam_style(&self) -> Style {
        Style::default().fg(self.beam)
    }

    /// Bold beam, for titles and the prompt.
    pub fn heading_style(&self) -> Style {
        self.beam_style().add_modifier(Modifier::BOLD)
    }

    pub fn crash_style(&self) -> Style {
        Style::default()
            .bg(self.crash.background)
            .fg(self.crash.foreground)
    }

    pub fn phosphor_text(&self, text: &str) -> String {
        paint(self.phosphor, text)
    }

    pub fn afterglow_text(&self, text: &str) -> String {
        paint(self.afterglow, text)
    }

    pub fn beam_text(&self, text: &str) -> String {
        paint(self.beam, text)
    }

    pub fn ok_text(&self, text: &str) -> String {
        paint(self.ok, text)
    }
}

/// Wrap `text` in a foreground escape for `color`, unless NO_COLOR is set.
fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    match foreground_sgr(color) {
        Some(sgr) => format!("\x1b[{sgr}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

/// SGR parameters selecting `color` as the foreground.
///
/// Named colors go through their slot in the 16-color table so every
/// color is emitted as either `38;5;n` or `38;2;r;g;b`.
fn foreground_sgr(color: Color) -> Option<String> {
    if let Color::Rgb(r, g, b) = color {
        return Some(format!("38;2;{r};{g};{b}"));
    }
    palette_slot(color).map(|slot| format!("38;5;{slot}"))
}

fn palette_slot(color: Color) -> Option<u8> {
    const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];
    match color {
        Color::Indexed(slot) => Some(slot),
        named => NAMED
            .iter()
            .position(|candidate| *candidate == named)
            .and_then(|slot| u8::try_from(slot).ok()),
    }
}

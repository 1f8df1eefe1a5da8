//! Konami-code activation.
//!
//! Watches key presses made outside any text input and raises an
//! activation flag when the last ten match ↑ ↑ ↓ ↓ ← → ← → B A.

use std::collections::VecDeque;

use crossterm::event::KeyCode;
use tracing::info;

/// Key identifiers the detector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Letter keys, stored lower-case
    Char(char),
    /// Any other key; never part of the sequence but still breaks it
    Other,
}

impl Key {
    /// Map a crossterm key code. Every press maps to something, so keys
    /// outside the sequence still occupy a slot in the window.
    pub fn from_key_code(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
            _ => Key::Other,
        }
    }
}

/// The activation sequence.
pub const SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Sliding-window matcher over the last ten keys.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<Key>,
    activated: bool,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns `true` when it completes the sequence;
    /// the buffer is cleared on a match.
    pub fn push(&mut self, key: Key) -> bool {
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.buffer.push_back(key);
        if self.buffer.len() > SEQUENCE.len() {
            self.buffer.pop_front();
        }

        if self.buffer.iter().eq(SEQUENCE.iter()) {
            info!("konami code entered");
            self.buffer.clear();
            self.activated = true;
            return true;
        }
        false
    }

    /// Whether the sequence has been entered since the last deactivation.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Reset the flag and forget buffered keys.
    pub fn deactivate(&mut self) {
        self.activated = false;
        self.buffer.clear();
    }
}

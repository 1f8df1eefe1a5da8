//! Easter-egg shell
//!
//! A closed command vocabulary evaluated against static content, and the
//! session that keeps the transcript and hands over to the hockey engine.
//!
//! - `command`: parsing into [`Command`] and evaluation into [`Outcome`]
//! - `content`: every pre-authored line the shell can print
//! - `session`: [`TerminalSession`], the transcript owner
//! - `script`: [`run_lines`], feeding a session from a reader

mod command;
pub mod content;
mod script;
mod session;

pub use command::{evaluate, Command, Outcome};
pub use content::Document;
pub use script::run_lines;
pub use session::{Mode, SessionOptions, SessionSignal, TerminalSession, DEFAULT_PROMPT};

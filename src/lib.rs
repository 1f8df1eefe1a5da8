//! Folio - terminal portfolio
//!
//! A boot sequence, a small command interpreter with pre-authored content,
//! an ASCII air-hockey animation and a Konami-code gate, driven by a
//! ratatui host. Every timed component is polled against an injectable
//! clock, so the library is fully testable without sleeping.

pub mod boot;
pub mod cli;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod hockey;
pub mod konami;
pub mod landing;
pub mod shell;
pub mod theme;
pub mod tui;

pub use config::Config;

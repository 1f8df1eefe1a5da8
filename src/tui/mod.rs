//! TUI (Text User Interface) module for folio
//!
//! This module provides the interactive host using ratatui/crossterm:
//! the boot screen, the landing screen and the terminal screen.

pub mod app;
mod boot_view;
mod host;
mod landing_view;
mod terminal_view;
pub mod ui;

pub use app::{run, App};
pub use host::{Host, HostOptions, Screen};

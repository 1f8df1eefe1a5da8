//! Subcommand handlers

pub mod config;
pub mod exec;
pub mod hockey;
pub mod run;

//! Integration tests for the folio binary

mod config_test;
mod exec_test;
mod helpers;
mod hockey_test;
mod run_test;

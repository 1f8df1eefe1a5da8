//! Folio CLI entry point

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Install a file-backed subscriber so log lines never reach the TUI.
///
/// Logging is silently disabled when the log file cannot be opened.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|dir| dir.join("folio")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))
    else {
        return;
    };

    let filter =
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=info".into()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        None => commands::run::handle(false, None, None),
        Some(Commands::Run {
            no_boot,
            variant,
            mode,
        }) => commands::run::handle(no_boot, variant, mode),
        Some(Commands::Exec { line, json }) => commands::exec::handle(&line.join(" "), json),
        Some(Commands::Hockey) => commands::hockey::handle(),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}

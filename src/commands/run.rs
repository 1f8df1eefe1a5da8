//! Run command handler

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use folio::boot::BootVariant;
use folio::clock::RealTimeSource;
use folio::config::HostMode;
use folio::shell::{run_lines, TerminalSession};
use folio::tui::{self, Host, HostOptions};
use folio::Config;

/// Redraw and poll interval of the TUI.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Run the portfolio, or the line REPL when stdin is not a terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    no_boot: bool,
    variant: Option<BootVariant>,
    mode: Option<HostMode>,
) -> Result<()> {
    let mut config = Config::load().context("Failed to load config")?;
    if no_boot {
        config.boot.enabled = false;
    }
    if let Some(variant) = variant {
        config.boot.variant = variant;
    }
    if let Some(mode) = mode {
        config.host.mode = mode;
    }

    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        info!("not a terminal, reading commands from stdin");
        let mut session = TerminalSession::new(RealTimeSource::shared(), config.session_options());
        return run_lines(&mut session, io::stdin().lock(), io::stdout().lock())
            .context("Failed to run commands from stdin");
    }

    info!(variant = ?config.boot.variant, mode = ?config.host.mode, "starting host");
    let mut host = Host::new(RealTimeSource::shared(), HostOptions::from_config(&config));
    tui::run(&mut host, FRAME_INTERVAL)
}

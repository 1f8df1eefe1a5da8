//! Hockey command handler

use anyhow::{Context, Result};

use folio::clock::RealTimeSource;
use folio::hockey::{AirHockey, VecSink};
use folio::theme::Theme;
use folio::Config;

/// Play the air-hockey animation to the end and print every frame.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let theme = Theme::named(config.ui.theme);
    let options = config.session_options();

    let mut game = AirHockey::new(RealTimeSource::shared(), options.tick, options.home_name);
    let mut sink = VecSink::default();
    let result = game.run_to_end(&mut sink);

    let (frames, message) = sink.lines.split_at(sink.lines.len().saturating_sub(1));
    for line in frames {
        println!("{}", theme.phosphor_text(line));
    }
    for line in message {
        println!("{}", theme.beam_text(line));
    }
    println!(
        "{}",
        theme.afterglow_text(&format!("{} ticks, {:?}", game.field().ticks, result))
    );
    Ok(())
}

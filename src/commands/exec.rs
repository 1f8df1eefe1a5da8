//! Exec command handler

use anyhow::{Context, Result};

use folio::clock::RealTimeSource;
use folio::hockey::{AirHockey, VecSink};
use folio::shell::{evaluate, Outcome};
use folio::Config;

/// Evaluate a single command line and print the result.
#[cfg(not(tarpaulin_include))]
pub fn handle(line: &str, json: bool) -> Result<()> {
    let outcome = evaluate(line);

    if json {
        let out = serde_json::to_string_pretty(&outcome).context("Failed to encode outcome")?;
        println!("{}", out);
        return Ok(());
    }

    match outcome {
        Outcome::Output { lines } => {
            for line in lines {
                println!("{}", line);
            }
        }
        Outcome::EnterSimulation => {
            let config = Config::load().context("Failed to load config")?;
            let options = config.session_options();
            let mut game = AirHockey::new(RealTimeSource::shared(), options.tick, options.home_name);
            let mut sink = VecSink::default();
            game.run_to_end(&mut sink);
            for line in sink.lines {
                println!("{}", line);
            }
        }
        Outcome::Clear | Outcome::Exit => {}
    }
    Ok(())
}

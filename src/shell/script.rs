//! Line-oriented driver for non-interactive use.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::session::{Mode, SessionSignal, TerminalSession};

/// Feed `input` to `session` line by line, writing every transcript
/// addition to `out`.
///
/// Simulations run to completion without waiting. Stops at `exit` or at
/// end of input. Entries already in the transcript (the banner) are
/// written first.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut TerminalSession,
    input: R,
    mut out: W,
) -> io::Result<()> {
    write_entries(&mut out, session.transcript())?;
    for line in input.lines() {
        let line = line?;
        let before = session.transcript().len();
        let signal = session.execute(&line);
        if session.mode() == Mode::Simulation {
            session.finish_simulation();
        }
        let transcript = session.transcript();
        write_entries(&mut out, &transcript[before.min(transcript.len())..])?;
        if signal == SessionSignal::Exit {
            debug!("exit read from input");
            break;
        }
    }
    out.flush()
}

fn write_entries<W: Write>(out: &mut W, entries: &[String]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

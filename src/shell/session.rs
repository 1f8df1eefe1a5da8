//! Terminal session: transcript, input buffer and mode.

use std::mem;
use std::time::Duration;

use tracing::{debug, info};

use super::command::{evaluate, Outcome};
use super::content;
use crate::clock::SharedTimeSource;
use crate::hockey::{AirHockey, FrameSink, GameResult, DEFAULT_TICK};

/// Prompt path shown before every echoed line.
pub const DEFAULT_PROMPT: &str = "~/portfolio";

/// Whether typed lines are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Lines are evaluated on submit
    #[default]
    Repl,
    /// The hockey engine owns the transcript; submits are ignored
    Simulation,
}

/// What the owner of the session must do after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// Keep going
    Continue,
    /// Invoke the close callback
    Exit,
    /// Submission refused because a simulation is running
    Ignored,
}

/// Knobs for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    /// Print the banner when the session opens
    pub welcome: bool,
    pub tick: Duration,
    /// Name in the home-goal message
    pub home_name: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: true,
            tick: DEFAULT_TICK,
            home_name: content::OWNER.to_string(),
        }
    }
}

/// Transcript-backed frame sink.
struct TranscriptSink<'a> {
    transcript: &'a mut Vec<String>,
    completed: bool,
}

impl FrameSink for TranscriptSink<'_> {
    fn push_lines(&mut self, lines: Vec<String>) {
        self.transcript.extend(lines);
    }

    fn complete(&mut self) {
        self.completed = true;
    }
}

/// One mounted terminal.
///
/// The transcript is only ever appended to, except by `clear`, which
/// replaces it with an empty one.
#[derive(Debug)]
pub struct TerminalSession {
    clock: SharedTimeSource,
    options: SessionOptions,
    transcript: Vec<String>,
    input: String,
    mode: Mode,
    game: Option<AirHockey>,
}

impl TerminalSession {
    /// Open a session, printing the banner if enabled.
    pub fn new(clock: SharedTimeSource, options: SessionOptions) -> Self {
        let transcript = if options.welcome {
            content::welcome_lines()
        } else {
            Vec::new()
        };
        Self {
            clock,
            options,
            transcript,
            input: String::new(),
            mode: Mode::Repl,
            game: None,
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }

    /// Append a character to the input line.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character of the input line.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the current input line.
    ///
    /// While a simulation runs nothing is evaluated and the input is kept.
    pub fn submit(&mut self) -> SessionSignal {
        if self.mode == Mode::Simulation {
            debug!("submit ignored during simulation");
            return SessionSignal::Ignored;
        }
        let line = mem::take(&mut self.input);
        self.execute(&line)
    }

    /// Evaluate `line` and apply the transcript rules for its outcome.
    pub fn execute(&mut self, line: &str) -> SessionSignal {
        if self.mode == Mode::Simulation {
            return SessionSignal::Ignored;
        }
        match evaluate(line) {
            Outcome::Output { lines } => {
                self.transcript.push(self.echo(line));
                self.transcript.extend(lines);
                SessionSignal::Continue
            }
            Outcome::Clear => {
                self.transcript.clear();
                SessionSignal::Continue
            }
            Outcome::Exit => {
                info!("terminal exit requested");
                SessionSignal::Exit
            }
            Outcome::EnterSimulation => {
                self.transcript.push(self.echo(line));
                self.mode = Mode::Simulation;
                self.game = Some(AirHockey::new(
                    self.clock.clone(),
                    self.options.tick,
                    self.options.home_name.clone(),
                ));
                SessionSignal::Continue
            }
        }
    }

    /// Drive a running simulation; returns its result on the poll that
    /// ends it.
    pub fn poll(&mut self) -> Option<GameResult> {
        let game = self.game.as_mut()?;
        let mut sink = TranscriptSink {
            transcript: &mut self.transcript,
            completed: false,
        };
        let result = game.poll(&mut sink);
        if sink.completed {
            self.end_simulation();
        }
        result
    }

    /// Play a running simulation to the end without waiting.
    pub fn finish_simulation(&mut self) -> Option<GameResult> {
        let game = self.game.as_mut()?;
        let mut sink = TranscriptSink {
            transcript: &mut self.transcript,
            completed: false,
        };
        let result = game.run_to_end(&mut sink);
        if sink.completed {
            self.end_simulation();
        }
        Some(result)
    }

    fn end_simulation(&mut self) {
        self.game = None;
        self.mode = Mode::Repl;
    }

    fn echo(&self, line: &str) -> String {
        format!("{} $ {}", self.options.prompt, line)
    }
}

//! Command parsing and evaluation.
//!
//! A line is trimmed, lower-cased and split on whitespace. The first token
//! picks a [`Command`]; `cat` is the only command that reads an argument.
//! Evaluation is an exhaustive match with no shell features at all.

use serde::Serialize;

use super::content::{self, Document};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    Whoami,
    Skills,
    Contact,
    Clear,
    Exit,
    /// `cat <name>`; carries the requested name
    Cat(String),
    AirHockey,
    /// Blank line
    Empty,
    /// Anything else; carries the first token
    Unknown(String),
}

impl Command {
    /// Parse one line of user input.
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        let mut tokens = normalized.split_whitespace();

        let Some(name) = tokens.next() else {
            return Command::Empty;
        };

        match name {
            "help" => Command::Help,
            "ls" => Command::Ls,
            "whoami" => Command::Whoami,
            "skills" => Command::Skills,
            "contact" => Command::Contact,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            "airhockey" => Command::AirHockey,
            // Bare `cat` is not the parameterized form
            "cat" => match tokens.next() {
                Some(arg) => Command::Cat(arg.to_string()),
                None => Command::Unknown(name.to_string()),
            },
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What the caller must do with an evaluated line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Append the echo line followed by `lines`
    Output { lines: Vec<String> },
    /// Replace the transcript with an empty one
    Clear,
    /// Invoke the owner's close callback
    Exit,
    /// Echo the line, then hand over to the hockey engine
    EnterSimulation,
}

impl Outcome {
    fn from_static(lines: &[&str]) -> Self {
        Outcome::Output {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Evaluate one line against the command table.
///
/// Never fails: unknown commands and unknown documents are ordinary
/// single-line output.
pub fn evaluate(line: &str) -> Outcome {
    match Command::parse(line) {
        Command::Help => Outcome::from_static(content::HELP),
        Command::Ls => Outcome::from_static(content::LS),
        Command::Whoami => Outcome::from_static(content::WHOAMI),
        Command::Skills => Outcome::from_static(content::SKILLS),
        Command::Contact => Outcome::from_static(content::CONTACT),
        Command::Clear => Outcome::Clear,
        Command::Exit => Outcome::Exit,
        Command::AirHockey => Outcome::EnterSimulation,
        Command::Cat(name) => match Document::from_name(&name) {
            Some(doc) => Outcome::Output { lines: doc.lines() },
            None => Outcome::Output {
                lines: vec![format!("cat: {}: No such file or directory", name)],
            },
        },
        Command::Empty => Outcome::Output { lines: Vec::new() },
        Command::Unknown(name) => Outcome::Output {
            lines: vec![format!("bash: {}: command not found", name)],
        },
    }
}

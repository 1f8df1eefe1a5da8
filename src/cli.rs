//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::sync::OnceLock;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::boot::BootVariant;
use crate::config::HostMode;

/// Version string with git SHA and build date for dev builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        match (option_env!("VERGEN_GIT_SHA"), option_env!("FOLIO_BUILD_DATE")) {
            (Some(sha), Some(date)) if sha != "unknown" => {
                format!("{} ({} {})", version, sha, date)
            }
            _ => version.to_string(),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version = version(), about = "Terminal portfolio with a boot sequence and a hidden shell")]
#[command(long_about = "Folio - a terminal portfolio.

Plays a short boot sequence, then opens a small command interpreter with
pre-authored content (projects, skills, contact) and an ASCII air-hockey
animation. In konami mode the interpreter stays hidden behind a landing
screen until the Konami code is entered.

QUICK START:
    folio                     Boot and open the terminal
    folio run --no-boot       Skip straight to the terminal
    folio exec help           Print the help text and exit
    folio hockey              Play the air-hockey animation headless

CONFIGURATION:
    Config file: ~/.config/folio/config.toml (override with FOLIO_CONFIG)
    Run 'folio config show' to see current settings.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive portfolio (default)
    #[command(long_about = "Run the interactive portfolio.

When stdin is not a terminal, lines are read from stdin and evaluated one
by one instead, printing what each adds to the transcript.

EXAMPLES:
    folio run
    folio run --variant extended
    folio run --mode konami
    printf 'ls\\nwhoami\\n' | folio")]
    Run {
        /// Skip the boot sequence
        #[arg(long)]
        no_boot: bool,
        /// Boot sequence variant (overrides config)
        #[arg(long, value_enum)]
        variant: Option<BootVariant>,
        /// Host mode (overrides config)
        #[arg(long, value_enum)]
        mode: Option<HostMode>,
    },

    /// Evaluate one terminal command and print its output
    #[command(long_about = "Evaluate one terminal command and print its output.

The words are joined with single spaces into one command line. Options
may appear before or after the words; words that start with '-' go
after `--`.

EXAMPLES:
    folio exec help
    folio exec cat readume
    folio exec skills --json
    folio exec -- echo -n")]
    Exec {
        /// Command line to evaluate
        #[arg(required = true)]
        line: Vec<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the air-hockey animation without waiting between frames
    Hockey,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completions.

EXAMPLES:
    folio completions bash > ~/.local/share/bash-completion/completions/folio
    folio completions zsh > ~/.zfunc/_folio")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
    /// Add missing fields to the config file
    #[command(long_about = "Add missing fields to the config file.

Existing values and comments are preserved. A preview of the additions is
shown before anything is written.")]
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_flags_parse() {
        let cli =
            Cli::try_parse_from(["folio", "run", "--no-boot", "--variant", "minimal", "--mode", "konami"])
                .unwrap();
        match cli.command {
            Some(Commands::Run {
                no_boot,
                variant,
                mode,
            }) => {
                assert!(no_boot);
                assert_eq!(variant, Some(BootVariant::Minimal));
                assert_eq!(mode, Some(HostMode::Konami));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn exec_collects_words() {
        let cli = Cli::try_parse_from(["folio", "exec", "--json", "cat", "readume"]).unwrap();
        match cli.command {
            Some(Commands::Exec { line, json }) => {
                assert!(json);
                assert_eq!(line, ["cat", "readume"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn exec_json_flag_after_words() {
        let cli = Cli::try_parse_from(["folio", "exec", "skills", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Exec { line, json }) => {
                assert!(json);
                assert_eq!(line, ["skills"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn exec_words_after_double_dash_are_literal() {
        let cli = Cli::try_parse_from(["folio", "exec", "--", "echo", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Exec { line, json }) => {
                assert!(!json);
                assert_eq!(line, ["echo", "--json"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn exec_requires_a_line() {
        assert!(Cli::try_parse_from(["folio", "exec"]).is_err());
    }

    #[test]
    fn migrate_accepts_yes() {
        let cli = Cli::try_parse_from(["folio", "config", "migrate", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Migrate { yes: true }))
        ));
    }
}

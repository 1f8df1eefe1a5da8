//! Config subcommands handler

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use folio::config::migrate_config;
use folio::theme::Theme;
use folio::Config;

/// Theme for CLI output, from the config when it can be read.
fn cli_theme() -> Theme {
    Config::load()
        .map(|config| Theme::named(config.ui.theme))
        .unwrap_or_default()
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::named(config.ui.theme);
    println!("{}", theme.phosphor_text(&toml_str));
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Write the default config, leaving an existing file alone.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let theme = cli_theme();
    let config_path = Config::config_path()?;

    if config_path.exists() {
        println!(
            "{}",
            theme.afterglow_text(&format!(
                "Config already exists at {}. Use 'folio config migrate' to add new fields.",
                config_path.display()
            ))
        );
        return Ok(());
    }

    Config::default()
        .save_to(&config_path)
        .context("Failed to write default config")?;
    println!(
        "{}",
        theme.ok_text(&format!("Created {}", config_path.display()))
    );
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the current default config, shows a preview of
/// changes, and asks for confirmation unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = cli_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.phosphor_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        let total_fields = result.added_fields.len();
        let total_sections = result.sections_added.len();
        let summary = if total_sections > 0 {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            )
        } else {
            format!("Found {} missing field(s):", total_fields)
        };
        println!("{}", theme.phosphor_text(&summary));
    } else {
        println!(
            "{}",
            theme.phosphor_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    print_diff_preview(&theme, &result.content, &result.added_fields);
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&theme, &question)? {
        println!("{}", theme.phosphor_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    let done = if file_exists {
        "Config updated successfully."
    } else {
        "Config file created successfully."
    };
    println!("{}", theme.ok_text(done));

    Ok(())
}

/// Print the added fields with a `+` prefix, under their section headers.
fn print_diff_preview(theme: &Theme, new_content: &str, added_fields: &[String]) {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let mut section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].to_string();
            pending_header = Some(line);
            continue;
        }

        let Some(eq_pos) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq_pos].trim();
        if added.contains(format!("{}.{}", section, key).as_str()) {
            if let Some(header) = pending_header.take() {
                println!("  {}", theme.afterglow_text(header));
            }
            println!("{}", theme.ok_text(&format!("+ {}", line)));
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(theme: &Theme, message: &str) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.afterglow_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.phosphor_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

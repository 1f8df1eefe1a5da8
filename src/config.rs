//! Configuration file handling
//!
//! Settings live in a TOML file at `$FOLIO_CONFIG`, or
//! `<config dir>/folio/config.toml` when that is unset. Every field has a
//! default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};

use crate::boot::BootVariant;
use crate::shell::{content, SessionOptions, DEFAULT_PROMPT};
use crate::theme::ThemeName;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Errors raised while reading, writing or migrating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config is not valid TOML: {0}")]
    Document(#[from] toml_edit::TomlError),
}

/// What the host shows once the boot sequence is over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Straight into the terminal; `exit` quits
    #[default]
    Terminal,
    /// Landing screen; the Konami code opens the terminal
    Konami,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Play the boot sequence at startup
    pub enabled: bool,
    pub variant: BootVariant,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            variant: BootVariant::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub prompt: String,
    /// Print the banner when the terminal opens
    pub welcome: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HockeyConfig {
    /// Milliseconds per simulation tick
    pub tick_ms: u64,
    /// Name credited for a right-hand goal
    pub home_name: String,
}

impl Default for HockeyConfig {
    fn default() -> Self {
        Self {
            tick_ms: 120,
            home_name: content::OWNER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub mode: HostMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeName,
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub boot: BootConfig,
    pub terminal: TerminalConfig,
    pub hockey: HockeyConfig,
    pub host: HostConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Terminal session settings derived from this config.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: self.terminal.prompt.clone(),
            welcome: self.terminal.welcome,
            tick: Duration::from_millis(self.hockey.tick_ms.max(1)),
            home_name: self.hockey.home_name.clone(),
        }
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content
    pub content: String,
    /// Added keys as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every key missing from `content`, keeping existing values,
/// comments and formatting untouched.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }
        // A scalar where a section belongs is left for the user to fix
        let Some(target) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            continue;
        };

        for (key, value) in default_table.iter() {
            if !target.contains_key(key) {
                target.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = Config::default();
        assert!(config.boot.enabled);
        assert_eq!(config.boot.variant, BootVariant::Standard);
        assert_eq!(config.terminal.prompt, "~/portfolio");
        assert_eq!(config.hockey.tick_ms, 120);
        assert_eq!(config.host.mode, HostMode::Terminal);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [boot]
            variant = "extended"

            [host]
            mode = "konami"
            "#,
        )
        .unwrap();
        assert_eq!(config.boot.variant, BootVariant::Extended);
        assert!(config.boot.enabled);
        assert_eq!(config.host.mode, HostMode::Konami);
        assert_eq!(config.hockey, HockeyConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.terminal.prompt = "guest@folio".to_string();
        config.ui.theme = ThemeName::Ocean;
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.hockey.home_name = "Ada".to_string();

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[boot]\nvariant = \"turbo\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn session_options_follow_config() {
        let mut config = Config::default();
        config.hockey.tick_ms = 0;
        config.terminal.welcome = false;
        config.hockey.home_name = "Ada".to_string();
        let options = config.session_options();
        assert_eq!(options.tick, Duration::from_millis(1));
        assert!(!options.welcome);
        assert_eq!(options.home_name, "Ada");
    }

    #[test]
    fn migrate_empty_adds_everything() {
        let result = migrate_config("").unwrap();
        assert!(result.has_changes());
        assert_eq!(
            result.sections_added,
            ["boot", "terminal", "hockey", "host", "ui"]
        );
        assert!(result.added_fields.contains(&"hockey.tick_ms".to_string()));
        let config: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn migrate_keeps_user_values_and_comments() {
        let original = "# my settings\n[terminal]\nprompt = \"me@box\" # short\n";
        let result = migrate_config(original).unwrap();

        assert!(result.content.contains("# my settings"));
        assert!(result.content.contains("prompt = \"me@box\" # short"));
        assert!(result.added_fields.contains(&"terminal.welcome".to_string()));
        assert!(!result.added_fields.contains(&"terminal.prompt".to_string()));
        assert!(!result.sections_added.contains(&"terminal".to_string()));

        let config: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(config.terminal.prompt, "me@box");
    }

    #[test]
    fn migrate_complete_config_is_noop() {
        let full = toml::to_string_pretty(&Config::default()).unwrap();
        let result = migrate_config(&full).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.content, full);
    }

    #[test]
    fn migrate_rejects_broken_toml() {
        assert!(matches!(
            migrate_config("[boot"),
            Err(ConfigError::Document(_))
        ));
    }
}

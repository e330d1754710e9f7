//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cltools/cltools.toml`
//! 3. Environment variables: `CLTOOLS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_DELIMITER;

/// Line terminator used when writing lines and expanding newline tokens.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Name as written in config files.
    pub fn name(self) -> &'static str {
        match self {
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
        }
    }
}

/// Unified configuration for cltools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Delimiter for list options (exactly one character)
    pub list_delimiter: String,
    /// Line terminator for written lines
    pub line_ending: LineEnding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            list_delimiter: DEFAULT_DELIMITER.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

/// Get the XDG config directory for cltools.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cltools").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cltools.toml"))
}

impl Settings {
    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file (missing file is fine).
    pub fn load_from(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("list_delimiter", defaults.list_delimiter.clone())
            .map_err(config_err)?
            .set_default("line_ending", defaults.line_ending.name())
            .map_err(config_err)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("CLTOOLS")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        let mut chars = self.list_delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some('\\'), None) => Err(ApplicationError::Config {
                message: "list_delimiter cannot be the escape character '\\'".into(),
            }),
            (Some(_), None) => Ok(()),
            _ => Err(ApplicationError::Config {
                message: format!(
                    "list_delimiter must be exactly one character, got '{}'",
                    self.list_delimiter
                ),
            }),
        }
    }

    /// Delimiter as a character.
    pub fn delimiter(&self) -> char {
        self.list_delimiter.chars().next().unwrap_or(DEFAULT_DELIMITER)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

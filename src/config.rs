//! Configuration loading for bibkeywords.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. Project config (`.bibkeywords/config.toml`)
//! 3. User config (`~/.bibkeywords/config.toml`)
//! 4. Defaults (lowest priority)
//!
//! All configuration is optional.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FailOpen, KeywordsError, Result};

/// Separator used when none is configured or the configured one is unusable.
pub const DEFAULT_KEYWORD_SEPARATOR: char = ',';

/// Source of the keyword separator.
pub trait KeywordPreferences {
    /// The character that separates keywords inside a keyword field.
    fn keyword_separator(&self) -> char;
}

impl KeywordPreferences for char {
    fn keyword_separator(&self) -> char {
        *self
    }
}

impl<T: KeywordPreferences + ?Sized> KeywordPreferences for &T {
    fn keyword_separator(&self) -> char {
        (**self).keyword_separator()
    }
}

impl<T: KeywordPreferences + ?Sized> KeywordPreferences for Arc<T> {
    fn keyword_separator(&self) -> char {
        (**self).keyword_separator()
    }
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Keyword field handling.
    pub keywords: KeywordsConfig,
}

/// Keyword field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeywordsConfig {
    /// Keyword separator. Must be exactly one character.
    pub separator: String,
}

impl KeywordsConfig {
    /// Check if a separator value is usable.
    pub fn is_valid_separator(value: &str) -> bool {
        value.chars().count() == 1
    }
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_KEYWORD_SEPARATOR.to_string(),
        }
    }
}

impl KeywordPreferences for Config {
    fn keyword_separator(&self) -> char {
        let mut chars = self.keywords.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                tracing::warn!(
                    separator = %self.keywords.separator,
                    "keyword separator must be one character, using '{}'",
                    DEFAULT_KEYWORD_SEPARATOR
                );
                DEFAULT_KEYWORD_SEPARATOR
            }
        }
    }
}

impl Config {
    /// Load configuration with full precedence chain.
    pub fn load() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::load_from_cwd(&cwd),
            Err(_) => {
                let mut config = Config::default();
                if let Some(user_config) = Self::load_user_config() {
                    config = config.merge(user_config);
                }
                config.apply_env_overrides();
                config
            }
        }
    }

    /// Load configuration with a specific working directory.
    pub fn load_from_cwd(cwd: &Path) -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = config.merge(user_config);
        }

        if let Some(project_config) = Self::load_project_config(cwd) {
            config = config.merge(project_config);
        }

        config.apply_env_overrides();

        config
    }

    /// Load user config from `<home>/config.toml`.
    fn load_user_config() -> Option<Config> {
        let home = bibkeywords_home()?;
        let config_path = home.join("config.toml");
        Self::load_optional(&config_path)
    }

    /// Load project config from `.bibkeywords/config.toml` in the given directory.
    fn load_project_config(cwd: &Path) -> Option<Config> {
        let config_path = project_config_dir(cwd).join("config.toml");
        Self::load_optional(&config_path)
    }

    /// Load a config file that may legitimately be absent.
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    fn load_optional(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        Self::load_from_file(path)
            .map(Some)
            .fail_open_with(&format!("loading {}", path.display()), None)
    }

    /// Load config from a specific file path.
    fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| KeywordsError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| KeywordsError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("BIBKEYWORDS_SEPARATOR") {
            if KeywordsConfig::is_valid_separator(&val) {
                self.keywords.separator = val;
            } else {
                tracing::warn!(
                    "BIBKEYWORDS_SEPARATOR must be exactly one character, ignoring '{}'",
                    val
                );
            }
        }
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` win when they differ from the default.
    fn merge(mut self, other: Config) -> Self {
        if other.keywords.separator != KeywordsConfig::default().separator {
            self.keywords.separator = other.keywords.separator;
        }
        self
    }
}

/// Get the user config directory.
///
/// `BIBKEYWORDS_HOME` if set and non-empty, otherwise `~/.bibkeywords`.
pub fn bibkeywords_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("BIBKEYWORDS_HOME") {
        if home.is_empty() {
            tracing::warn!("BIBKEYWORDS_HOME is empty, using default");
        } else {
            return Some(PathBuf::from(home));
        }
    }

    dirs::home_dir().map(|home| home.join(".bibkeywords"))
}

/// Get the project config directory for a given working directory.
pub fn project_config_dir(cwd: &Path) -> PathBuf {
    cwd.join(".bibkeywords")
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::ui::Style;

/// Built-in DeepLX endpoint used when neither the CLI nor the config file sets one.
pub const DEFAULT_API_URL: &str = "https://deeplx.vercel.app/translate";

/// Built-in source language (let the endpoint detect it).
pub const DEFAULT_SOURCE_LANG: &str = "auto";

/// Built-in target language.
pub const DEFAULT_TARGET_LANG: &str = "EN";

/// The configuration file structure.
///
/// Corresponds to `~/.deeplx-cli.yml`. Every field is optional; empty values
/// are treated the same as missing ones when settings are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// DeepLX API endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Default source language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    /// Default target language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
}

impl Config {
    /// The document written on first run.
    pub fn with_defaults() -> Self {
        Self {
            url: Some(DEFAULT_API_URL.to_string()),
            source_lang: Some(DEFAULT_SOURCE_LANG.to_string()),
            target_lang: Some(DEFAULT_TARGET_LANG.to_string()),
        }
    }
}

/// Manages loading and generating the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `~/.deeplx-cli.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        // serde_yaml rejects an empty document, but an empty file is just "no settings"
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let contents = serde_yaml::to_string(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, generating a default one on first run.
    ///
    /// Never fails: a missing file is replaced by the defaults (written to disk
    /// if possible), and an unreadable or malformed file yields an empty config
    /// so that CLI flags and built-in defaults take over.
    pub fn load_or_init(&self) -> Config {
        if !self.config_path.exists() {
            crate::status!(
                "Config file {} does not exist, generating default config.",
                Style::value(self.config_path.display())
            );
            let defaults = Config::with_defaults();
            if let Err(e) = self.save(&defaults) {
                crate::warn!("{e:#}");
            } else {
                crate::status!(
                    "Default config file generated: {}",
                    Style::value(self.config_path.display())
                );
            }
            return defaults;
        }

        match self.load() {
            Ok(config) => config,
            Err(e) => {
                crate::warn!("{e:#}\nUsing default values and command-line arguments.");
                Config::default()
            }
        }
    }
}

//! Configuration management for pdftext.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default command used to invoke the Tesseract OCR engine.
pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Command used to invoke the Tesseract OCR engine.
    /// Set via TESSERACT_CMD env var or config file.
    pub tesseract_cmd: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from config file and environment.
    ///
    /// Precedence, lowest to highest: defaults, config file, TESSERACT_CMD
    /// environment variable. Never fails; a missing or unparseable config
    /// file leaves the defaults in place.
    pub fn load() -> Self {
        let config = Config::load();

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        // TESSERACT_CMD environment variable takes precedence over config
        if let Some(cmd) = std::env::var("TESSERACT_CMD")
            .ok()
            .filter(|s| !s.is_empty())
        {
            tracing::debug!("Using TESSERACT_CMD from environment: {}", cmd);
            settings.tesseract_cmd = cmd;
        }

        settings.tesseract_cmd = shellexpand::tilde(&settings.tesseract_cmd).to_string();
        settings
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Command used to invoke the Tesseract OCR engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesseract_cmd: Option<String>,
}

impl Config {
    /// Load configuration from the first config file that exists.
    ///
    /// A file that exists but fails to parse is ignored with a debug log
    /// line; configuration is best-effort and must never break a run.
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::debug!("Ignoring config file {}: {}", path.display(), e);
                    return Self::default();
                }
            }
        }
        Self::default()
    }

    /// Candidate config file locations, in priority order.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = std::env::var("PDFTEXT_CONFIG")
            .ok()
            .filter(|s| !s.is_empty())
        {
            paths.push(PathBuf::from(shellexpand::tilde(&explicit).to_string()));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("pdftext").join("config.toml"));
        }
        paths.push(PathBuf::from("pdftext.toml"));
        paths
    }

    /// Load configuration from a specific file path.
    /// Supports TOML and JSON based on file extension.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

        let config: Config = match ext {
            "json" => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
            _ => toml::from_str(&contents).context("Failed to parse TOML config")?,
        };
        Ok(config)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref cmd) = self.tesseract_cmd {
            settings.tesseract_cmd = cmd.clone();
        }
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::provider::openweather::DEFAULT_ENDPOINT;

pub const DEFAULT_PORT: u16 = 9090;

/// Log destination meaning "standard output".
pub const STDOUT_LOG_PATH: &str = "-";

/// Process configuration. Fixed once the server starts.
///
/// Example TOML:
/// ```toml
/// port = 9090
/// api_key = "..."
/// log_level = 1
/// log_path = "/var/log/current-weather.log"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,

    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Current-weather endpoint queried per request.
    pub endpoint: String,

    /// Verbosity: <0 warn, 0 info, 1 debug, 2+ trace.
    pub log_level: i32,

    /// "-" for stdout, otherwise a file appended to.
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: 0,
            log_path: STDOUT_LOG_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load config from the platform location, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "current-weather", "current-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the API key, or an error with a hint if none was supplied.
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: pass `--api-key <KEY>`, set OPENWEATHER_API_KEY or add `api_key` to {}.",
                Self::config_file_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            )),
        }
    }

    pub fn logs_to_stdout(&self) -> bool {
        self.log_path.is_empty() || self.log_path == STDOUT_LOG_PATH
    }
}

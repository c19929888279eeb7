use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use current_weather_core::{
    Config, provider::openweather::DEFAULT_ENDPOINT, provider_from_config, start_server,
    start_server_with,
};

use crate::logging;

/// Top-level CLI struct.
///
/// Flags override values from the config file, which override built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "current-weather",
    version,
    about = "A simple HTTP server that returns the general weather conditions at the provided coordinates."
)]
pub struct Cli {
    /// Port the server listens on [default: 9090].
    #[arg(short, long)]
    pub port: Option<u16>,

    /// OpenWeather API key.
    #[arg(short = 'k', long, alias = "apiKey", env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Verbosity level for log printing (2+ = Trace, 1 = Debug, 0 = Info, <0 = Warn).
    #[arg(short = 'v', long, alias = "logLevel", allow_negative_numbers = true)]
    pub log_level: Option<i32>,

    /// File path to save the log to ("-" for stdout).
    #[arg(short = 'l', long, alias = "logPath")]
    pub log_path: Option<String>,

    /// Override the OpenWeather current-weather endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Config file to read instead of the platform default.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge defaults, the config file and flags into the final configuration.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = &self.log_path {
            config.log_path = path.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        Ok(config)
    }

    pub async fn run(self) -> Result<()> {
        let config = self.resolve_config()?;
        logging::init(&config)?;

        if config.endpoint == DEFAULT_ENDPOINT {
            return start_server(config.port, config.api_key()?.to_owned()).await;
        }

        let provider = provider_from_config(&config)?;
        start_server_with(config.port, provider).await
    }
}

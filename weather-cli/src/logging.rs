use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{Context, Result};
use current_weather_core::Config;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Map the numeric verbosity flag to a level.
pub fn level_filter(log_level: i32) -> LevelFilter {
    match log_level {
        i32::MIN..=-1 => LevelFilter::WARN,
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, takes precedence over `log_level`.
///
/// An empty path or "-" logs to stdout; anything else is opened for appending.
pub fn init(config: &Config) -> Result<()> {
    let level = level_filter(config.log_level);
    let log_path = config.log_path.as_str();
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.logs_to_stdout() {
        builder.try_init().map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!("Setting log output to stdout");
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("Could not open log file {log_path:?}"))?;

        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!("Setting log output to {log_path:?}");
    }

    tracing::info!("Log level set to: {level}");
    Ok(())
}

//! Binary crate for the `current-weather` gateway.
//!
//! This crate focuses on:
//! - Parsing command-line flags and the optional config file
//! - Setting up logging
//! - Starting the server from `current-weather-core`

use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}

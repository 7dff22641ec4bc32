//! Cadence CLI Application
//!
//! Command-line front end for the workout scheduling wizard.

mod args;
mod cli;
mod renderer;
mod session;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::ConfigBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        endpoint,
        preferred_count,
        slot_mode,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_file(config_file)
        .with_endpoint(endpoint)
        .with_preferred_count(preferred_count.then_some(true))
        .with_slot_mode(slot_mode.map(Into::into))
        .with_timeout(timeout.map(Duration::from_secs))
        .build()
        .context("Failed to load configuration")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    let cli = Cli::new(config, renderer)?;
    match command {
        Some(Submit(args)) => cli.submit(args).await,
        Some(Run) | None => cli.run_interactive().await,
    }
}

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrolltop_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrolltop")]
#[command(author, version, about = "Scroll-to-top button demo for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Scroll down, press the button, and print every animation frame
    Simulate {
        /// Offset in pixels to start from
        #[arg(long, default_value_t = 1200.0)]
        from: f64,
        /// Frames per second of the simulated host
        #[arg(long, default_value_t = 60)]
        fps: u16,
        /// Override the configured animation duration
        #[arg(long)]
        duration_ms: Option<u64>,
        /// Override the configured visibility threshold
        #[arg(long)]
        threshold: Option<f64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let log_to_file = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, log_to_file)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            from,
            fps,
            duration_ms,
            threshold,
            json,
        }) => {
            let mut scroll = config.scroll.clone();
            if let Some(duration_ms) = duration_ms {
                scroll.animation_duration_ms = duration_ms;
            }
            if let Some(threshold) = threshold {
                scroll.threshold = threshold;
            }
            commands::simulate::run(&scroll, from, fps, json)
        }
        Some(Commands::Config { path }) => commands::config::run(&config, path),
    }
}

/// Install the global subscriber. The TUI owns the terminal, so its logs go
/// to a file in the data directory.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let log_path = config.log_path();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod config;
mod pipeline;
mod summary;

use config::Config;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    info!(
        "Preparing features: {} → {}",
        config.input.display(),
        config.output.display()
    );

    let summary = pipeline::run(&config)
        .with_context(|| format!("Failed to prepare {}", config.input.display()))?;

    info!(
        "Done in {} ms: {} read, {} dropped, {} written ({:.1}% labelled posteam_won=1)",
        summary.elapsed_ms(),
        summary.rows_read,
        summary.rows_dropped,
        summary.rows_written,
        summary.positive_rate() * 100.0
    );

    if let Some(path) = &config.summary {
        summary.write_json(path)?;
        info!("Run summary written to {}", path.display());
    }

    Ok(())
}

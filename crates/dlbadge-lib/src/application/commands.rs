//! Command execution

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use super::cli::{CliConfig, Commands};
use super::config::AppConfig;
use crate::aggregator;

pub async fn execute_command(config: CliConfig) -> Result<()> {
    match config.command.clone().unwrap_or_default() {
        Commands::Generate { dry_run } => handle_generate(&config.app_config, dry_run).await,
        Commands::Version => handle_version(),
    }
}

async fn handle_generate(config: &AppConfig, dry_run: bool) -> Result<()> {
    config.validate()?;

    if dry_run {
        let (_, artifact) = aggregator::collect(config).await?;
        let mut bytes = artifact.to_bytes()?;
        if bytes.last() != Some(&b'\n') {
            bytes.push(b'\n');
        }
        std::io::stdout()
            .write_all(&bytes)
            .context("Failed to print badge")?;
        return Ok(());
    }

    let run = aggregator::produce_badge(config).await?;
    info!(
        path = %run.output.display(),
        format = ?run.artifact.format(),
        total = run.report.total(),
        "Badge written"
    );
    Ok(())
}

fn handle_version() -> Result<()> {
    println!("dlbadge {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}

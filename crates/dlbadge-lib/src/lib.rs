//! # dlbadge Library
//!
//! Download count badges for projects published on Modrinth, GitHub
//! Releases and SpigotMC.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging setup
//! - [`networking`] - HTTP client shared by all sources
//! - [`sources`] - Per-platform download count strategies
//! - [`aggregator`] - Sequential fetch and summation
//! - [`badge`] - JSON/SVG rendering and file output
//! - [`application`] - CLI interface and configuration management

pub mod aggregator;
pub mod application;
pub mod badge;
pub mod logger;
pub mod networking;
pub mod primitives;
pub mod sources;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use aggregator::{AggregateReport, BadgeRun, aggregate, produce_badge};
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use badge::{BadgeArtifact, BadgeError, BadgeStyle, ShieldsBadge};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{BadgeFormat, ConfigError, LogFormat, LogLevel, LogOutput, SourceKind};
pub use sources::{DownloadSource, SourceDescriptor, SourceOutcome};

use anyhow::Result;
use application::env::resolve_ansi;

/// Parse configuration, start logging and run the selected command
pub async fn main() -> Result<()> {
    let config = CliConfig::load()?;

    let app = &config.app_config;
    let ansi = resolve_ansi(app.color, app.log_output);
    Logger::init(app.to_logger_config(ansi))?;

    execute_command(config).await
}

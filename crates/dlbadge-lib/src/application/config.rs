//! Application configuration management
//!
//! Every field can come from a CLI flag or a `DLBADGE_*` environment
//! variable (which `.env` files may populate). Precedence:
//! defaults -> .env -> env vars -> CLI args.

use crate::badge::{self, BadgeStyle};
use crate::networking::NetworkingConfig;
use crate::primitives::*;
use crate::sources::{self, GithubSource, ModrinthSource, SourceDescriptor, SpigotSource};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Default configuration values
pub mod defaults {
    pub const OUTPUT: &str = "badges/downloads.json";
    pub const NET_TIMEOUT: &str = "30";
    pub const LOG_LEVEL: &str = "2"; // Info, so the summary line shows up
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Application configuration structure
#[derive(Debug, Clone, Parser)]
pub struct AppConfig {
    /// Modrinth project ID or slug
    #[arg(long, env = "DLBADGE_MODRINTH_PROJECT_ID")]
    pub modrinth_project_id: Option<String>,

    /// GitHub repository owner
    #[arg(long, env = "DLBADGE_GITHUB_OWNER")]
    pub github_owner: Option<String>,

    /// GitHub repository name
    #[arg(long, env = "DLBADGE_GITHUB_REPO")]
    pub github_repo: Option<String>,

    /// SpigotMC resource ID (e.g. `my-plugin.12345`)
    #[arg(long, env = "DLBADGE_SPIGOT_PLUGIN_ID")]
    pub spigot_plugin_id: Option<String>,

    /// Sources to query, comma separated
    #[arg(
        long,
        value_enum,
        env = "DLBADGE_SOURCES",
        value_delimiter = ',',
        default_values_t = SourceKind::ALL
    )]
    pub sources: Vec<SourceKind>,

    /// Badge output path
    #[arg(short, long, env = "DLBADGE_OUTPUT", default_value = defaults::OUTPUT)]
    pub output: PathBuf,

    /// Badge format (json, svg); inferred from the output extension when unset
    #[arg(short, long, env = "DLBADGE_FORMAT")]
    pub format: Option<BadgeFormat>,

    /// Badge label text
    #[arg(long, env = "DLBADGE_LABEL", default_value = badge::DEFAULT_LABEL)]
    pub label: String,

    /// Badge color (shields.io name or hex)
    #[arg(long, env = "DLBADGE_BADGE_COLOR", default_value = badge::DEFAULT_COLOR)]
    pub badge_color: String,

    /// API timeout in seconds
    #[arg(short = 't', long, env = "DLBADGE_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    pub net_timeout: u64,

    /// Modrinth API base URL
    #[arg(long, env = "DLBADGE_MODRINTH_BASE_URL", default_value = sources::modrinth::DEFAULT_BASE_URL)]
    pub modrinth_base_url: String,

    /// GitHub API base URL
    #[arg(long, env = "DLBADGE_GITHUB_BASE_URL", default_value = sources::github::DEFAULT_BASE_URL)]
    pub github_base_url: String,

    /// SpigotMC site base URL
    #[arg(long, env = "DLBADGE_SPIGOT_BASE_URL", default_value = sources::spigot::DEFAULT_BASE_URL)]
    pub spigot_base_url: String,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DLBADGE_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "DLBADGE_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DLBADGE_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DLBADGE_COLOR", default_value = defaults::COLOR)]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            modrinth_project_id: None,
            github_owner: None,
            github_repo: None,
            spigot_plugin_id: None,
            sources: SourceKind::ALL.to_vec(),
            output: PathBuf::from(defaults::OUTPUT),
            format: None,
            label: badge::DEFAULT_LABEL.to_string(),
            badge_color: badge::DEFAULT_COLOR.to_string(),
            net_timeout: 30,
            modrinth_base_url: sources::modrinth::DEFAULT_BASE_URL.to_string(),
            github_base_url: sources::github::DEFAULT_BASE_URL.to_string(),
            spigot_base_url: sources::spigot::DEFAULT_BASE_URL.to_string(),
            log_level: 2,
            log_format: LogFormat::Text,
            log_output: LogOutput::Stderr,
            color: ColorIntent::Auto,
        }
    }
}

/// Treat unset and blank identifiers alike
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn to_logger_config(&self, ansi: bool) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    pub fn networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            timeout_seconds: self.net_timeout,
            ..NetworkingConfig::default()
        }
    }

    pub fn badge_style(&self) -> BadgeStyle {
        BadgeStyle {
            label: self.label.clone(),
            color: self.badge_color.clone(),
        }
    }

    /// Explicit `--format`, otherwise inferred from the output path
    pub fn badge_format(&self) -> BadgeFormat {
        self.format
            .unwrap_or_else(|| BadgeFormat::from_path(&self.output))
    }

    /// Selected sources that have the identifiers they need, in list order
    fn configured_sources(&self) -> Vec<(SourceKind, Option<SourceDescriptor>)> {
        let mut seen = Vec::new();
        let mut resolved = Vec::new();

        for kind in &self.sources {
            if seen.contains(kind) {
                continue;
            }
            seen.push(*kind);

            let descriptor: Option<SourceDescriptor> = match kind {
                SourceKind::Modrinth => non_empty(&self.modrinth_project_id).map(|id| {
                    ModrinthSource::new(id)
                        .with_base_url(&self.modrinth_base_url)
                        .into()
                }),
                SourceKind::Github => non_empty(&self.github_owner)
                    .zip(non_empty(&self.github_repo))
                    .map(|(owner, repo)| {
                        GithubSource::new(owner, repo)
                            .with_base_url(&self.github_base_url)
                            .into()
                    }),
                SourceKind::Spigot => non_empty(&self.spigot_plugin_id).map(|id| {
                    SpigotSource::new(id)
                        .with_base_url(&self.spigot_base_url)
                        .into()
                }),
            };
            resolved.push((*kind, descriptor));
        }

        resolved
    }

    /// Build the source descriptors to query
    ///
    /// Selected sources without identifiers are skipped with a warning.
    pub fn descriptors(&self) -> Vec<SourceDescriptor> {
        self.configured_sources()
            .into_iter()
            .filter_map(|(kind, descriptor)| {
                if descriptor.is_none() {
                    warn!(source = %kind, "Source selected but not configured, skipping");
                }
                descriptor
            })
            .collect()
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if non_empty(&self.github_owner).is_some() != non_empty(&self.github_repo).is_some() {
            return Err(ConfigError::ValidationFailed {
                reason: "github_owner and github_repo must be set together".to_string(),
            });
        }

        if self.label.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "badge label must not be empty".to_string(),
            });
        }

        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net_timeout must be greater than 0".to_string(),
            });
        }

        let any_configured = self
            .configured_sources()
            .iter()
            .any(|(_, descriptor)| descriptor.is_some());
        if !any_configured {
            return Err(ConfigError::ValidationFailed {
                reason: "no download source is configured; set --modrinth-project-id, \
                         --github-owner/--github-repo or --spigot-plugin-id for a selected source"
                    .to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}

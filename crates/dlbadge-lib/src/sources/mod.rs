//! # Sources
//!
//! Per-platform download count strategies.
//!
//! Every strategy reports through [`SourceOutcome`]: either a count or an
//! `Unavailable` reason. Transport and parse failures never escape a source;
//! [`DownloadSource::fetch`] logs them and hands the aggregator a zero.
//!
//! - [`modrinth`] - project `downloads` field
//! - [`github`] - sum of release asset `download_count`
//! - [`spigot`] - "Total Downloads" scraped from the resource page

pub mod github;
pub mod modrinth;
pub mod spigot;

pub use github::GithubSource;
pub use modrinth::ModrinthSource;
pub use spigot::SpigotSource;

use crate::networking::{NetworkingError, NetworkingManager};
use crate::primitives::SourceKind;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a single source could not produce a count
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: NetworkingError,
    },

    #[error("JSON parsing failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid download count '{value}': {reason}")]
    InvalidCount { value: String, reason: String },
}

/// Result of querying one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Count(u64),
    Unavailable { reason: String },
}

impl SourceOutcome {
    /// Contribution to the total; unavailable sources count as zero
    pub fn count(&self) -> u64 {
        match self {
            SourceOutcome::Count(count) => *count,
            SourceOutcome::Unavailable { .. } => 0,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SourceOutcome::Count(_))
    }
}

impl From<Result<u64, SourceError>> for SourceOutcome {
    fn from(result: Result<u64, SourceError>) -> Self {
        match result {
            Ok(count) => SourceOutcome::Count(count),
            Err(err) => SourceOutcome::Unavailable {
                reason: err.to_string(),
            },
        }
    }
}

/// A platform that can report a download count
pub trait DownloadSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// URL reported in diagnostics for this source
    fn url(&self) -> String;

    /// Query the platform and extract the raw count
    fn fetch_count(
        &self,
        networking: &NetworkingManager,
    ) -> impl Future<Output = Result<u64, SourceError>> + Send;

    /// Query the platform, converting any failure into `Unavailable`
    fn fetch(&self, networking: &NetworkingManager) -> impl Future<Output = SourceOutcome> + Send {
        async move {
            let result = self.fetch_count(networking).await;
            match &result {
                Ok(count) => debug!(source = %self.kind(), count, "Source count fetched"),
                Err(err) => warn!(
                    source = %self.kind(),
                    url = %self.url(),
                    error = %err,
                    "Source unavailable, counting 0"
                ),
            }
            SourceOutcome::from(result)
        }
    }
}

/// One configured platform query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    Modrinth(ModrinthSource),
    Github(GithubSource),
    Spigot(SpigotSource),
}

impl DownloadSource for SourceDescriptor {
    fn kind(&self) -> SourceKind {
        match self {
            SourceDescriptor::Modrinth(source) => source.kind(),
            SourceDescriptor::Github(source) => source.kind(),
            SourceDescriptor::Spigot(source) => source.kind(),
        }
    }

    fn url(&self) -> String {
        match self {
            SourceDescriptor::Modrinth(source) => source.url(),
            SourceDescriptor::Github(source) => source.url(),
            SourceDescriptor::Spigot(source) => source.url(),
        }
    }

    fn fetch_count(
        &self,
        networking: &NetworkingManager,
    ) -> impl Future<Output = Result<u64, SourceError>> + Send {
        async move {
            match self {
                SourceDescriptor::Modrinth(source) => source.fetch_count(networking).await,
                SourceDescriptor::Github(source) => source.fetch_count(networking).await,
                SourceDescriptor::Spigot(source) => source.fetch_count(networking).await,
            }
        }
    }
}

impl From<ModrinthSource> for SourceDescriptor {
    fn from(source: ModrinthSource) -> Self {
        SourceDescriptor::Modrinth(source)
    }
}

impl From<GithubSource> for SourceDescriptor {
    fn from(source: GithubSource) -> Self {
        SourceDescriptor::Github(source)
    }
}

impl From<SpigotSource> for SourceDescriptor {
    fn from(source: SpigotSource) -> Self {
        SourceDescriptor::Spigot(source)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

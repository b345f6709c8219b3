//! # Aggregator
//!
//! One linear pass per run: query each source in turn, sum the counts,
//! render the badge and write it. Source failures become zeros; only a
//! failure to write the artifact ends the run with an error.

use crate::application::AppConfig;
use crate::badge::{self, BadgeArtifact, BadgeError};
use crate::networking::NetworkingManager;
use crate::primitives::SourceKind;
use crate::sources::{DownloadSource, SourceOutcome};
use std::fmt::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of one source within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub kind: SourceKind,
    pub url: String,
    pub outcome: SourceOutcome,
}

/// Per-source outcomes of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub sources: Vec<SourceReport>,
}

impl AggregateReport {
    /// Sum of all counts, unavailable sources contributing zero
    pub fn total(&self) -> u64 {
        self.sources
            .iter()
            .fold(0u64, |sum, report| sum.saturating_add(report.outcome.count()))
    }

    /// Count contributed by `kind`, if it was queried
    pub fn count_for(&self, kind: SourceKind) -> Option<u64> {
        self.sources
            .iter()
            .find(|report| report.kind == kind)
            .map(|report| report.outcome.count())
    }

    pub fn unavailable(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources
            .iter()
            .filter(|report| !report.outcome.is_available())
    }

    /// `modrinth=100 github=12 spigot=0(unavailable) total=112`
    pub fn summary(&self) -> String {
        let mut line = String::new();
        for report in &self.sources {
            let _ = write!(line, "{}={}", report.kind, report.outcome.count());
            if !report.outcome.is_available() {
                line.push_str("(unavailable)");
            }
            line.push(' ');
        }
        let _ = write!(line, "total={}", self.total());
        line
    }
}

/// Query every source sequentially
pub async fn aggregate<S: DownloadSource>(
    sources: &[S],
    networking: &NetworkingManager,
) -> AggregateReport {
    let mut report = AggregateReport::default();

    for source in sources {
        let outcome = source.fetch(networking).await;
        report.sources.push(SourceReport {
            kind: source.kind(),
            url: source.url(),
            outcome,
        });
    }

    report
}

/// A completed run
#[derive(Debug, Clone)]
pub struct BadgeRun {
    pub report: AggregateReport,
    pub artifact: BadgeArtifact,
    pub output: PathBuf,
}

/// Fetch all configured sources and render the badge without writing it
pub async fn collect(config: &AppConfig) -> Result<(AggregateReport, BadgeArtifact), BadgeError> {
    let networking = NetworkingManager::new(config.networking_config())?;
    let descriptors = config.descriptors();

    let report = aggregate(&descriptors, &networking).await;

    let unavailable = report.unavailable().count();
    if unavailable > 0 {
        warn!(unavailable, "Some sources were unavailable and counted as 0");
    }
    info!(total = report.total(), "Downloads: {}", report.summary());

    let artifact = badge::render(report.total(), &config.badge_style(), config.badge_format());
    Ok((report, artifact))
}

/// Run the aggregator once and write the badge to the configured output
pub async fn produce_badge(config: &AppConfig) -> Result<BadgeRun, BadgeError> {
    let (report, artifact) = collect(config).await?;
    badge::write_artifact(&config.output, &artifact)?;

    Ok(BadgeRun {
        report,
        artifact,
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

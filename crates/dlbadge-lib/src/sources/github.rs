//! GitHub release asset download counts
//!
//! Walks `GET /repos/{owner}/{repo}/releases` page by page and sums every
//! asset's `download_count`.

use super::{DownloadSource, SourceError};
use crate::networking::{NetworkingManager, encode_segment};
use crate::primitives::SourceKind;
use serde::Deserialize;
use tracing::{trace, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Releases requested per page (the API maximum)
pub const PER_PAGE: usize = 100;

/// Upper bound on pages walked for a single repository
const MAX_PAGES: usize = 100;

const ACCEPT: &str = "application/vnd.github+json";

/// GitHub release metadata
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

/// GitHub release asset
#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub download_count: Option<u64>,
}

impl GithubRelease {
    pub fn downloads(&self) -> u64 {
        self.assets
            .iter()
            .fold(0u64, |sum, asset| sum.saturating_add(asset.download_count.unwrap_or(0)))
    }
}

/// Sum asset downloads across releases; releases without assets add nothing
pub fn sum_release_downloads(releases: &[GithubRelease]) -> u64 {
    releases
        .iter()
        .fold(0u64, |sum, release| sum.saturating_add(release.downloads()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSource {
    owner: String,
    repo: String,
    base_url: String,
}

impl GithubSource {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn page_url(&self, page: usize) -> String {
        format!("{}?per_page={}&page={}", self.url(), PER_PAGE, page)
    }
}

impl DownloadSource for GithubSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Github
    }

    fn url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.base_url,
            encode_segment(&self.owner),
            encode_segment(&self.repo)
        )
    }

    async fn fetch_count(&self, networking: &NetworkingManager) -> Result<u64, SourceError> {
        let mut total = 0u64;

        for page in 1..=MAX_PAGES {
            let body = networking.get(&self.page_url(page), Some(ACCEPT)).await?;
            let releases: Vec<GithubRelease> = serde_json::from_slice(&body)?;
            let page_total = sum_release_downloads(&releases);
            trace!(page, releases = releases.len(), page_total, "GitHub releases page");

            total = total.saturating_add(page_total);
            if releases.len() < PER_PAGE {
                return Ok(total);
            }
        }

        warn!(
            source = %self.kind(),
            url = %self.url(),
            max_pages = MAX_PAGES,
            total,
            "Release page limit reached, later releases not counted"
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    include!("github.test.rs");
}

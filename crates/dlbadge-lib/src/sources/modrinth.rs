//! Modrinth project download counts
//!
//! Reads the `downloads` field of `GET /v2/project/{id}`.

use super::{DownloadSource, SourceError};
use crate::networking::{NetworkingManager, encode_segment};
use crate::primitives::SourceKind;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com";

/// Subset of the Modrinth project object
#[derive(Debug, Clone, Deserialize)]
pub struct ModrinthProject {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub downloads: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModrinthSource {
    project_id: String,
    base_url: String,
}

impl ModrinthSource {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the source at another API host (staging or a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Extract the download count from a project response body
///
/// A missing or null `downloads` field counts as zero.
pub fn parse_project_downloads(body: &[u8]) -> Result<u64, SourceError> {
    let project: ModrinthProject = serde_json::from_slice(body)?;
    Ok(project.downloads.unwrap_or(0))
}

impl DownloadSource for ModrinthSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Modrinth
    }

    fn url(&self) -> String {
        format!(
            "{}/v2/project/{}",
            self.base_url,
            encode_segment(&self.project_id)
        )
    }

    async fn fetch_count(&self, networking: &NetworkingManager) -> Result<u64, SourceError> {
        let body = networking
            .get(&self.url(), Some("application/json"))
            .await?;
        parse_project_downloads(&body)
    }
}

#[cfg(test)]
mod tests {
    include!("modrinth.test.rs");
}

//! SpigotMC resource page scraping
//!
//! SpigotMC exposes no count API, so the total is read from the resource
//! page HTML. A page without the "Total Downloads" fragment counts as zero
//! and is logged, since that usually means the page layout changed.

use super::{DownloadSource, SourceError};
use crate::networking::{NetworkingManager, encode_segment};
use crate::primitives::SourceKind;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://www.spigotmc.org";

static TOTAL_DOWNLOADS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Total Downloads:\s*([0-9,]+)").expect("total downloads pattern is valid")
});

/// Extract "Total Downloads: 12,345" from a resource page
///
/// Returns `Ok(None)` when the fragment is missing.
pub fn extract_total_downloads(html: &str) -> Result<Option<u64>, SourceError> {
    let Some(captures) = TOTAL_DOWNLOADS.captures(html) else {
        return Ok(None);
    };

    let raw = &captures[1];
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|e| SourceError::InvalidCount {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpigotSource {
    plugin_id: String,
    base_url: String,
}

impl SpigotSource {
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl DownloadSource for SpigotSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Spigot
    }

    fn url(&self) -> String {
        format!(
            "{}/resources/{}/",
            self.base_url,
            encode_segment(&self.plugin_id)
        )
    }

    async fn fetch_count(&self, networking: &NetworkingManager) -> Result<u64, SourceError> {
        let url = self.url();
        let html = networking.get_text(&url).await?;
        match extract_total_downloads(&html)? {
            Some(total) => Ok(total),
            None => {
                warn!(
                    source = %self.kind(),
                    url = %url,
                    "No \"Total Downloads\" on resource page, counting 0"
                );
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("spigot.test.rs");
}

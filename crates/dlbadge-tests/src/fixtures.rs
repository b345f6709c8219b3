//! Fixture infrastructure for end-to-end tests
//!
//! [`MockUpstream`] runs one mockito server that answers for Modrinth,
//! GitHub and SpigotMC at the paths used by `dlbadge_lib::testing`.

use anyhow::Result;
use dlbadge_lib::AppConfig;
use dlbadge_lib::testing::{self, upstream_config};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

/// GitHub releases body where each inner slice is one release's asset counts
pub fn github_releases(releases: &[&[u64]]) -> String {
    let releases: Vec<Value> = releases
        .iter()
        .enumerate()
        .map(|(i, assets)| {
            json!({
                "tag_name": format!("v{}.0.0", i + 1),
                "assets": assets
                    .iter()
                    .map(|count| json!({ "name": "plugin.jar", "download_count": count }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    Value::Array(releases).to_string()
}

/// Minimal SpigotMC resource page carrying `fragment`
pub fn spigot_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Example Plugin | SpigotMC</title></head>\
         <body><div class=\"resourceInfo\">{fragment}</div></body></html>"
    )
}

/// Mock upstream server plus a scratch directory for badge output
pub struct MockUpstream {
    server: ServerGuard,
    mocks: Vec<Mock>,
    workdir: TempDir,
}

impl MockUpstream {
    pub async fn start() -> Result<Self> {
        Ok(Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
            workdir: TempDir::new()?,
        })
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Default output path inside the scratch directory
    pub fn output_path(&self) -> PathBuf {
        self.workdir.path().join("badges").join("downloads.json")
    }

    pub fn workdir(&self) -> &std::path::Path {
        self.workdir.path()
    }

    /// Config with all sources pointed at this server
    pub fn config(&self) -> AppConfig {
        upstream_config(&self.url(), self.output_path())
    }

    pub async fn modrinth(&mut self, status: usize, body: &str) -> &mut Self {
        let mock = self
            .server
            .mock("GET", testing::modrinth_path().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serve `body` for every releases page
    pub async fn github(&mut self, status: usize, body: &str) -> &mut Self {
        let mock = self
            .server
            .mock("GET", testing::github_path().as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    pub async fn spigot(&mut self, status: usize, body: &str) -> &mut Self {
        let mock = self
            .server
            .mock("GET", testing::spigot_path().as_str())
            .with_status(status)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serve the three healthy responses used by the worked example
    pub async fn with_example_counts(&mut self) -> &mut Self {
        self.modrinth(200, r#"{"downloads": 100}"#).await;
        self.github(200, &github_releases(&[&[5, 7]])).await;
        self.spigot(200, &spigot_page("Total Downloads: 8")).await;
        self
    }
}

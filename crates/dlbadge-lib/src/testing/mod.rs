//! Test support
//!
//! Fixture identifiers and a configuration that routes every source to a
//! single local server, so one `mockito::Server` can stand in for Modrinth,
//! GitHub and SpigotMC at once.

use crate::application::AppConfig;
use crate::primitives::ColorIntent;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

pub const MODRINTH_PROJECT_ID: &str = "AANobbMI";
pub const GITHUB_OWNER: &str = "example-org";
pub const GITHUB_REPO: &str = "example-plugin";
pub const SPIGOT_PLUGIN_ID: &str = "example-plugin.4242";

/// Path each fixture source is served from on the shared server
pub fn modrinth_path() -> String {
    format!("/v2/project/{MODRINTH_PROJECT_ID}")
}

pub fn github_path() -> String {
    format!("/repos/{GITHUB_OWNER}/{GITHUB_REPO}/releases")
}

pub fn spigot_path() -> String {
    format!("/resources/{SPIGOT_PLUGIN_ID}/")
}

/// All three sources configured against `base_url`, writing to `output`
pub fn upstream_config(base_url: &str, output: impl Into<PathBuf>) -> AppConfig {
    AppConfig {
        modrinth_project_id: Some(MODRINTH_PROJECT_ID.to_string()),
        github_owner: Some(GITHUB_OWNER.to_string()),
        github_repo: Some(GITHUB_REPO.to_string()),
        spigot_plugin_id: Some(SPIGOT_PLUGIN_ID.to_string()),
        output: output.into(),
        net_timeout: 5,
        modrinth_base_url: base_url.to_string(),
        github_base_url: base_url.to_string(),
        spigot_base_url: base_url.to_string(),
        color: ColorIntent::Never,
        ..AppConfig::default()
    }
}

/// Log lines written while a [`LogCapture`] is installed on this thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route `info` and above on the current thread into the capture
    ///
    /// Pair with a current-thread `#[tokio::test]` so the awaited code runs
    /// on the thread holding the guard.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

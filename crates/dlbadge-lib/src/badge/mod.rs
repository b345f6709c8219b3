//! # Badge
//!
//! Rendering the total into a badge artifact and writing it to disk.
//!
//! - [`render`] - shields.io endpoint JSON and standalone SVG
//! - [`writer`] - whole-file replacement of the output path

pub mod render;
pub mod writer;

pub use render::{render, render_svg};
pub use writer::write_artifact;

use crate::primitives::BadgeFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_LABEL: &str = "downloads";
pub const DEFAULT_COLOR: &str = "blue";

/// Badge artifact errors; these are the only failures that end a run
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("Failed to serialize badge: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write badge to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to set up HTTP client: {source}")]
    Networking {
        #[from]
        source: crate::networking::NetworkingError,
    },
}

/// shields.io endpoint badge schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldsBadge {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: String,
}

/// Label and color shared by both badge formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: String,
    pub color: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Rendered badge, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeArtifact {
    Json(ShieldsBadge),
    Svg(String),
}

impl BadgeArtifact {
    pub fn format(&self) -> BadgeFormat {
        match self {
            BadgeArtifact::Json(_) => BadgeFormat::Json,
            BadgeArtifact::Svg(_) => BadgeFormat::Svg,
        }
    }

    /// File contents for this artifact
    pub fn to_bytes(&self) -> Result<Vec<u8>, BadgeError> {
        match self {
            BadgeArtifact::Json(badge) => Ok(serde_json::to_vec_pretty(badge)?),
            BadgeArtifact::Svg(markup) => Ok(markup.clone().into_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

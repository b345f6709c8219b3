//! Environment variable handling for color decisions
//!
//! Honors the common NO_COLOR / FORCE_COLOR / CLICOLOR / CI conventions.

use crate::primitives::{ColorIntent, ConfigError, LogOutput};
use serde::Deserialize;

/// Environment variables that affect log coloring
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR environment variable (any value = disable color)
    pub no_color: Option<String>,
    /// FORCE_COLOR environment variable (0/false = disable, 1/2/3/true = enable)
    pub force_color: Option<String>,
    /// CLICOLOR environment variable (0 = disable color)
    pub clicolor: Option<String>,
    /// CI environment variable (any value = CI mode)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Apply environment variables to an `auto` color intent
    ///
    /// Precedence: CI > CLICOLOR < NO_COLOR < FORCE_COLOR. Explicit
    /// `always`/`never` from the command line are returned unchanged.
    pub fn apply_color_config(&self, color: ColorIntent) -> ColorIntent {
        if color != ColorIntent::Auto {
            return color;
        }

        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        let mut color = color;
        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = ColorIntent::Never,
            Some("1" | "2" | "3" | "true") => color = ColorIntent::Always,
            _ => {}
        }

        color
    }
}

/// Decide whether log lines on `output` get ANSI escapes
pub fn resolve_ansi(color: ColorIntent, output: LogOutput) -> bool {
    match color {
        ColorIntent::Always => true,
        ColorIntent::Never => false,
        ColorIntent::Auto => match output {
            LogOutput::Stderr => console::colors_enabled_stderr(),
            LogOutput::Stdout => console::colors_enabled(),
        },
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}

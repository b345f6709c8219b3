//! Configuration loading
//!
//! Coordinates `.env` files, the process environment and command line
//! arguments into a single [`CliConfig`].

use crate::primitives::ConfigError;
use clap::Parser;
use std::ffi::OsString;

use super::cli::{Cli, CliConfig};
use super::env::EnvironmentConfig;

/// Files read before the environment, first match wins per variable
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and `.env` from the working directory if present
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        if let Err(e) = dotenvy::from_filename(env_file) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    ///
    /// Exits the process with usage information on invalid arguments.
    pub fn load() -> Result<Self, ConfigError> {
        load_env_files()?;
        Self::from_cli(Cli::parse())
    }

    /// Like [`CliConfig::load`] without touching `.env` files, for a given argv
    pub fn load_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_cli(Cli::try_parse_from(args)?)
    }

    fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mut app_config = cli.config;
        let env_config = EnvironmentConfig::load()?;
        app_config.color = env_config.apply_color_config(app_config.color);

        Ok(Self {
            app_config,
            command: cli.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}

use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// dlbadge CLI - download count badges
#[derive(Debug, Clone, Parser)]
#[command(name = "dlbadge")]
#[command(about = "Sum download counts from Modrinth, GitHub and SpigotMC into a badge")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// dlbadge commands (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

/// Available dlbadge commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Fetch every configured source and write the badge
    Generate {
        /// Print the badge to stdout instead of writing the output file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate { dry_run: false }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}

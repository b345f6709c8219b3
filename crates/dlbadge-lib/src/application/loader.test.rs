use super::*;
use crate::application::cli::Commands;
use crate::primitives::ColorIntent;

#[test]
fn test_load_from_args() {
    let config = CliConfig::load_from([
        "dlbadge",
        "--github-owner",
        "octo",
        "--github-repo",
        "tools",
        "--color",
        "never",
        "generate",
    ])
    .unwrap();

    assert_eq!(config.app_config.github_owner.as_deref(), Some("octo"));
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert_eq!(config.command, Some(Commands::Generate { dry_run: false }));
}

#[test]
fn test_load_from_invalid_args() {
    let result = CliConfig::load_from(["dlbadge", "--net-timeout", "soon"]);
    assert!(matches!(result, Err(ConfigError::ArgumentsInvalid { .. })));
}

#[test]
fn test_missing_env_files_are_not_an_error() {
    // The crate directory carries no .env files
    assert!(load_env_files().is_ok());
}

use dlbadge_lib::application::config::AppConfig;
use dlbadge_lib::primitives::{BadgeFormat, ConfigError, SourceKind};
use dlbadge_lib::{Cli, DownloadSource};
use clap::Parser;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.net_timeout > 0);
    assert_eq!(config.label, "downloads");
    assert_eq!(config.badge_color, "blue");
}

#[test]
fn test_cli_builds_descriptors_for_all_platforms() {
    let cli = Cli::try_parse_from([
        "dlbadge",
        "--modrinth-project-id",
        "lWNvJAlY",
        "--github-owner",
        "deutschich",
        "--github-repo",
        "BalSync",
        "--spigot-plugin-id",
        "balsync.99",
        "--output",
        "site/badge.svg",
    ])
    .unwrap();

    let config = cli.config;
    assert!(config.validate().is_ok());
    assert_eq!(config.badge_format(), BadgeFormat::Svg);

    let urls: Vec<String> = config.descriptors().iter().map(|d| d.url()).collect();
    assert_eq!(
        urls,
        vec![
            "https://api.modrinth.com/v2/project/lWNvJAlY",
            "https://api.github.com/repos/deutschich/BalSync/releases",
            "https://www.spigotmc.org/resources/balsync.99/",
        ]
    );
}

#[test]
fn test_selected_but_unconfigured_source_is_dropped() {
    let cli = Cli::try_parse_from([
        "dlbadge",
        "--modrinth-project-id",
        "lWNvJAlY",
        "--sources",
        "modrinth,spigot",
    ])
    .unwrap();

    let kinds: Vec<SourceKind> = cli.config.descriptors().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![SourceKind::Modrinth]);
}

#[test]
fn test_only_unconfigured_sources_fails_validation() {
    let cli = Cli::try_parse_from([
        "dlbadge",
        "--modrinth-project-id",
        "lWNvJAlY",
        "--sources",
        "spigot",
    ])
    .unwrap();

    assert!(matches!(
        cli.config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

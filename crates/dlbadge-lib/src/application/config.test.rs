use super::*;
use crate::sources::DownloadSource;

fn configured() -> AppConfig {
    AppConfig {
        modrinth_project_id: Some("lWNvJAlY".to_string()),
        github_owner: Some("deutschich".to_string()),
        github_repo: Some("BalSync".to_string()),
        spigot_plugin_id: Some("balsync.1".to_string()),
        ..AppConfig::default()
    }
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.output, PathBuf::from("badges/downloads.json"));
    assert_eq!(config.badge_format(), BadgeFormat::Json);
    assert_eq!(config.sources, SourceKind::ALL.to_vec());
    assert_eq!(config.badge_style(), BadgeStyle::default());
    assert_eq!(config.networking_config().timeout_seconds, 30);
}

#[test]
fn test_format_inferred_from_svg_output() {
    let config = AppConfig {
        output: PathBuf::from("badges/downloads.svg"),
        ..AppConfig::default()
    };
    assert_eq!(config.badge_format(), BadgeFormat::Svg);

    let explicit = AppConfig {
        format: Some(BadgeFormat::Json),
        ..config
    };
    assert_eq!(explicit.badge_format(), BadgeFormat::Json);
}

#[test]
fn test_descriptors_follow_source_order() {
    let config = AppConfig {
        sources: vec![SourceKind::Spigot, SourceKind::Modrinth],
        ..configured()
    };
    let kinds: Vec<_> = config.descriptors().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![SourceKind::Spigot, SourceKind::Modrinth]);
}

#[test]
fn test_descriptors_skip_duplicates_and_unconfigured() {
    let config = AppConfig {
        spigot_plugin_id: None,
        sources: vec![SourceKind::Modrinth, SourceKind::Spigot, SourceKind::Modrinth],
        ..configured()
    };
    let kinds: Vec<_> = config.descriptors().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![SourceKind::Modrinth]);
}

#[test]
fn test_descriptors_use_base_urls() {
    let config = AppConfig {
        sources: vec![SourceKind::Modrinth],
        modrinth_base_url: "http://127.0.0.1:1234/".to_string(),
        ..configured()
    };
    let descriptors = config.descriptors();
    assert_eq!(descriptors[0].url(), "http://127.0.0.1:1234/v2/project/lWNvJAlY");
}

#[test]
fn test_blank_identifier_is_unconfigured() {
    let config = AppConfig {
        modrinth_project_id: Some("  ".to_string()),
        sources: vec![SourceKind::Modrinth],
        ..configured()
    };
    assert!(config.descriptors().is_empty());
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_configured() {
    assert!(configured().validate().is_ok());
}

#[test]
fn test_validate_requires_a_source() {
    let result = AppConfig::default().validate();
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_validate_github_owner_without_repo() {
    let config = AppConfig {
        github_repo: None,
        ..configured()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("github_owner and github_repo"));
}

#[test]
fn test_validate_rejects_empty_label_and_zero_timeout() {
    let empty_label = AppConfig {
        label: " ".to_string(),
        ..configured()
    };
    assert!(empty_label.validate().is_err());

    let no_timeout = AppConfig {
        net_timeout: 0,
        ..configured()
    };
    assert!(no_timeout.validate().is_err());
}

#[test]
fn test_logger_config_from_verbosity() {
    let config = AppConfig {
        log_level: 3,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config(false);
    assert_eq!(logger.level, LogLevel::Debug);
    assert!(!logger.ansi);
}

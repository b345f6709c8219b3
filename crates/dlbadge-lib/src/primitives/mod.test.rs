use super::*;
use std::path::Path;

#[test]
fn test_source_kind_from_str() {
    assert_eq!("modrinth".parse::<SourceKind>().unwrap(), SourceKind::Modrinth);
    assert_eq!("GitHub".parse::<SourceKind>().unwrap(), SourceKind::Github);
    assert_eq!("gh".parse::<SourceKind>().unwrap(), SourceKind::Github);
    assert_eq!("spigot".parse::<SourceKind>().unwrap(), SourceKind::Spigot);
}

#[test]
fn test_unknown_source_kind_is_parse_error() {
    let err = "curseforge".parse::<SourceKind>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref value, .. } if value == "curseforge"));
}

#[test]
fn test_source_kind_display_matches_cli_name() {
    for kind in SourceKind::ALL {
        let rendered = kind.to_string();
        assert_eq!(rendered.parse::<SourceKind>().unwrap(), kind);
    }
}

#[test]
fn test_badge_format_from_path() {
    assert_eq!(BadgeFormat::from_path(Path::new("badges/downloads.json")), BadgeFormat::Json);
    assert_eq!(BadgeFormat::from_path(Path::new("badges/downloads.SVG")), BadgeFormat::Svg);
    assert_eq!(BadgeFormat::from_path(Path::new("badge")), BadgeFormat::Json);
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_format_aliases() {
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_log_level_directive() {
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
}

use super::*;
use crate::primitives::{BadgeFormat, SourceKind};

#[test]
fn test_cli_defaults_to_no_command() {
    let cli = Cli::try_parse_from(["dlbadge", "--modrinth-project-id", "abc"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.config.modrinth_project_id.as_deref(), Some("abc"));
    assert_eq!(cli.config.sources, SourceKind::ALL.to_vec());
}

#[test]
fn test_cli_generate_dry_run() {
    let cli = Cli::try_parse_from(["dlbadge", "generate", "--dry-run"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Generate { dry_run: true }));
}

#[test]
fn test_cli_source_list_is_comma_separated() {
    let cli = Cli::try_parse_from(["dlbadge", "--sources", "github,modrinth"]).unwrap();
    assert_eq!(cli.config.sources, vec![SourceKind::Github, SourceKind::Modrinth]);
}

#[test]
fn test_cli_rejects_unknown_source() {
    assert!(Cli::try_parse_from(["dlbadge", "--sources", "curseforge"]).is_err());
}

#[test]
fn test_cli_format_and_output() {
    let cli = Cli::try_parse_from(["dlbadge", "-o", "out/badge.txt", "--format", "svg"]).unwrap();
    assert_eq!(cli.config.format, Some(BadgeFormat::Svg));
    assert_eq!(cli.config.badge_format(), BadgeFormat::Svg);
}

#[test]
fn test_default_command_is_generate() {
    assert_eq!(Commands::default(), Commands::Generate { dry_run: false });
}

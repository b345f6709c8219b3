use super::*;
use crate::testing::{self, upstream_config};
use mockito::{Matcher, Server};
use tempfile::TempDir;

#[tokio::test]
async fn test_generate_writes_badge() {
    let mut server = Server::new_async().await;
    let _modrinth = server
        .mock("GET", testing::modrinth_path().as_str())
        .with_status(200)
        .with_body(r#"{"downloads": 10}"#)
        .create_async()
        .await;
    let _github = server
        .mock("GET", testing::github_path().as_str())
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let _spigot = server
        .mock("GET", testing::spigot_path().as_str())
        .with_status(200)
        .with_body("Total Downloads: 1,005")
        .create_async()
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("downloads.json");
    let config = CliConfig {
        app_config: upstream_config(&server.url(), &output),
        command: Some(Commands::Generate { dry_run: false }),
    };

    execute_command(config).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["message"], "1015");
}

#[tokio::test]
async fn test_dry_run_does_not_write() {
    let mut server = Server::new_async().await;
    let _modrinth = server
        .mock("GET", testing::modrinth_path().as_str())
        .with_status(200)
        .with_body(r#"{"downloads": 10}"#)
        .create_async()
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("downloads.json");
    let mut app_config = upstream_config(&server.url(), &output);
    app_config.sources = vec![crate::primitives::SourceKind::Modrinth];

    let config = CliConfig {
        app_config,
        command: Some(Commands::Generate { dry_run: true }),
    };

    execute_command(config).await.unwrap();
    assert!(!output.exists());
}

#[tokio::test]
async fn test_generate_rejects_unconfigured_sources() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: None,
    };

    let err = execute_command(config).await.unwrap_err();
    assert!(err.to_string().contains("no download source is configured"));
}

#[tokio::test]
async fn test_version_needs_no_sources() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: Some(Commands::Version),
    };
    assert!(execute_command(config).await.is_ok());
}

use super::*;
use crate::networking::NetworkingConfig;
use crate::primitives::BadgeFormat;
use crate::sources::{GithubSource, ModrinthSource, SourceDescriptor, SpigotSource};
use crate::testing::{self, upstream_config};
use mockito::{Matcher, Mock, Server, ServerGuard};
use tempfile::TempDir;

async fn serve_all(
    server: &mut ServerGuard,
    modrinth: &str,
    github: &str,
    spigot: &str,
) -> Vec<Mock> {
    let modrinth_mock = server
        .mock("GET", testing::modrinth_path().as_str())
        .with_status(200)
        .with_body(modrinth)
        .create_async()
        .await;
    let github_mock = server
        .mock("GET", testing::github_path().as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(github)
        .create_async()
        .await;
    let spigot_mock = server
        .mock("GET", testing::spigot_path().as_str())
        .with_status(200)
        .with_body(spigot)
        .create_async()
        .await;

    vec![modrinth_mock, github_mock, spigot_mock]
}

#[test]
fn test_report_total_and_summary() {
    let report = AggregateReport {
        sources: vec![
            SourceReport {
                kind: SourceKind::Modrinth,
                url: "m".to_string(),
                outcome: SourceOutcome::Count(100),
            },
            SourceReport {
                kind: SourceKind::Github,
                url: "g".to_string(),
                outcome: SourceOutcome::Unavailable {
                    reason: "HTTP 500".to_string(),
                },
            },
        ],
    };

    assert_eq!(report.total(), 100);
    assert_eq!(report.count_for(SourceKind::Github), Some(0));
    assert_eq!(report.count_for(SourceKind::Spigot), None);
    assert_eq!(report.unavailable().count(), 1);
    assert_eq!(report.summary(), "modrinth=100 github=0(unavailable) total=100");
}

#[test]
fn test_total_saturates() {
    let report = AggregateReport {
        sources: [u64::MAX, 1]
            .into_iter()
            .map(|count| SourceReport {
                kind: SourceKind::Modrinth,
                url: String::new(),
                outcome: SourceOutcome::Count(count),
            })
            .collect(),
    };
    assert_eq!(report.total(), u64::MAX);
}

#[tokio::test]
async fn test_aggregate_sums_all_sources() {
    let mut server = Server::new_async().await;
    let _mocks = serve_all(
        &mut server,
        r#"{"downloads": 100}"#,
        r#"[{"assets": [{"download_count": 5}, {"download_count": 7}]}]"#,
        "<p>Total Downloads: 8</p>",
    )
    .await;

    let url = server.url();
    let sources: Vec<SourceDescriptor> = vec![
        ModrinthSource::new(testing::MODRINTH_PROJECT_ID)
            .with_base_url(&url)
            .into(),
        GithubSource::new(testing::GITHUB_OWNER, testing::GITHUB_REPO)
            .with_base_url(&url)
            .into(),
        SpigotSource::new(testing::SPIGOT_PLUGIN_ID)
            .with_base_url(&url)
            .into(),
    ];
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();

    let report = aggregate(&sources, &networking).await;
    assert_eq!(report.count_for(SourceKind::Modrinth), Some(100));
    assert_eq!(report.count_for(SourceKind::Github), Some(12));
    assert_eq!(report.count_for(SourceKind::Spigot), Some(8));
    assert_eq!(report.total(), 120);
}

#[tokio::test]
async fn test_failed_source_contributes_zero_and_badge_is_written() {
    let mut server = Server::new_async().await;
    let _modrinth = server
        .mock("GET", testing::modrinth_path().as_str())
        .with_status(500)
        .create_async()
        .await;
    let _github = server
        .mock("GET", testing::github_path().as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"assets": [{"download_count": 40}]}, {"assets": []}]"#)
        .create_async()
        .await;
    let _spigot = server
        .mock("GET", testing::spigot_path().as_str())
        .with_status(200)
        .with_body("<html>no counter here</html>")
        .create_async()
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("badges/downloads.json");
    let config = upstream_config(&server.url(), &output);

    let run = produce_badge(&config).await.unwrap();
    assert_eq!(run.report.total(), 40);
    assert_eq!(run.report.unavailable().count(), 1);
    assert_eq!(run.output, output);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["message"], "40");
}

#[tokio::test]
async fn test_collect_renders_svg_for_svg_output() {
    let mut server = Server::new_async().await;
    let _mocks = serve_all(&mut server, r#"{"downloads": 3}"#, "[]", "").await;

    let temp = TempDir::new().unwrap();
    let config = upstream_config(&server.url(), temp.path().join("downloads.svg"));

    let (report, artifact) = collect(&config).await.unwrap();
    assert_eq!(report.total(), 3);
    assert_eq!(artifact.format(), BadgeFormat::Svg);
    assert!(!config.output.exists(), "collect must not write");
}

#[tokio::test]
async fn test_write_failure_is_fatal() {
    let mut server = Server::new_async().await;
    let _mocks = serve_all(&mut server, r#"{"downloads": 1}"#, "[]", "").await;

    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("badges");
    std::fs::write(&blocker, "file, not a directory").unwrap();
    let config = upstream_config(&server.url(), blocker.join("downloads.json"));

    let result = produce_badge(&config).await;
    assert!(matches!(result, Err(BadgeError::CreateDir { .. })));
}

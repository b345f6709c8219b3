use super::*;
use crate::networking::NetworkingConfig;
use crate::sources::SourceOutcome;
use crate::testing::LogCapture;
use mockito::{Matcher, Server};

fn release(counts: &[u64]) -> serde_json::Value {
    serde_json::json!({
        "tag_name": "v1",
        "assets": counts
            .iter()
            .map(|c| serde_json::json!({ "name": "plugin.jar", "download_count": c }))
            .collect::<Vec<_>>(),
    })
}

fn networking() -> NetworkingManager {
    NetworkingManager::new(NetworkingConfig::default()).unwrap()
}

#[test]
fn test_sum_across_releases_and_assets() {
    let releases: Vec<GithubRelease> = serde_json::from_value(serde_json::json!([
        release(&[5, 7]),
        release(&[]),
        release(&[30]),
    ]))
    .unwrap();

    assert_eq!(sum_release_downloads(&releases), 42);
    assert_eq!(releases[1].downloads(), 0);
}

#[test]
fn test_release_without_assets_field() {
    let releases: Vec<GithubRelease> =
        serde_json::from_str(r#"[{"tag_name": "v0.1"}, {"assets": [{"download_count": 3}]}]"#)
            .unwrap();
    assert_eq!(sum_release_downloads(&releases), 3);
}

#[test]
fn test_null_download_count_is_zero() {
    let releases: Vec<GithubRelease> = serde_json::from_str(
        r#"[{"assets": [{"name": "a.jar", "download_count": null}, {"download_count": 4}]}]"#,
    )
    .unwrap();
    assert_eq!(sum_release_downloads(&releases), 4);
}

#[test]
fn test_sum_saturates() {
    let releases: Vec<GithubRelease> =
        serde_json::from_value(serde_json::json!([release(&[u64::MAX, 10])])).unwrap();
    assert_eq!(sum_release_downloads(&releases), u64::MAX);
}

#[test]
fn test_releases_url() {
    let source = GithubSource::new("deutschich", "BalSync");
    assert_eq!(
        source.url(),
        "https://api.github.com/repos/deutschich/BalSync/releases"
    );
    assert_eq!(
        source.page_url(2),
        "https://api.github.com/repos/deutschich/BalSync/releases?per_page=100&page=2"
    );
}

#[tokio::test]
async fn test_fetch_single_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/owner/repo/releases")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".to_string(), "100".to_string()),
            Matcher::UrlEncoded("page".to_string(), "1".to_string()),
        ]))
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_body(serde_json::json!([release(&[5, 7])]).to_string())
        .expect(1)
        .create_async()
        .await;

    let source = GithubSource::new("owner", "repo").with_base_url(server.url());
    assert_eq!(source.fetch(&networking()).await, SourceOutcome::Count(12));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_follows_full_pages() {
    let mut server = Server::new_async().await;
    let full_page: Vec<_> = (0..PER_PAGE).map(|_| release(&[1])).collect();

    let page_one = server
        .mock("GET", "/repos/owner/repo/releases")
        .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(serde_json::Value::Array(full_page).to_string())
        .expect(1)
        .create_async()
        .await;
    let page_two = server
        .mock("GET", "/repos/owner/repo/releases")
        .match_query(Matcher::UrlEncoded("page".to_string(), "2".to_string()))
        .with_status(200)
        .with_body(serde_json::json!([release(&[50])]).to_string())
        .expect(1)
        .create_async()
        .await;

    let source = GithubSource::new("owner", "repo").with_base_url(server.url());
    assert_eq!(
        source.fetch(&networking()).await,
        SourceOutcome::Count(PER_PAGE as u64 + 50)
    );
    page_one.assert_async().await;
    page_two.assert_async().await;
}

#[tokio::test]
async fn test_failed_page_makes_source_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/owner/repo/releases")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create_async()
        .await;

    let source = GithubSource::new("owner", "repo").with_base_url(server.url());
    let outcome = source.fetch(&networking()).await;

    assert!(!outcome.is_available());
    assert_eq!(outcome.count(), 0);
}

#[tokio::test]
async fn test_page_limit_is_logged() {
    let mut server = Server::new_async().await;
    let full_page: Vec<_> = (0..PER_PAGE).map(|_| release(&[1])).collect();
    let mock = server
        .mock("GET", "/repos/owner/repo/releases")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(serde_json::Value::Array(full_page).to_string())
        .expect(MAX_PAGES)
        .create_async()
        .await;

    let source = GithubSource::new("owner", "repo").with_base_url(server.url());
    let (logs, _guard) = LogCapture::install();
    let outcome = source.fetch(&networking()).await;

    assert_eq!(outcome, SourceOutcome::Count((MAX_PAGES * PER_PAGE) as u64));
    mock.assert_async().await;

    let logs = logs.contents();
    assert!(logs.contains("WARN"), "expected a warning, got: {logs}");
    assert!(logs.contains("Release page limit reached"));
    assert!(logs.contains("source=github"));
}

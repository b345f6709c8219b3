use super::*;
use crate::networking::NetworkingConfig;
use crate::sources::SourceOutcome;
use crate::testing::LogCapture;
use mockito::Server;

#[test]
fn test_extract_strips_thousands_separators() {
    let html = "<div class=\"stats\">Total Downloads: 12,345</div>";
    assert_eq!(extract_total_downloads(html).unwrap(), Some(12345));
}

#[test]
fn test_extract_is_case_insensitive() {
    assert_eq!(extract_total_downloads("total downloads:\n  8").unwrap(), Some(8));
    assert_eq!(
        extract_total_downloads("TOTAL DOWNLOADS:1,000,000").unwrap(),
        Some(1_000_000)
    );
}

#[test]
fn test_missing_pattern_is_none() {
    assert_eq!(extract_total_downloads("<html><body>Downloads</body></html>").unwrap(), None);
    assert_eq!(extract_total_downloads("").unwrap(), None);
}

#[test]
fn test_only_ascii_digits_are_read() {
    // Arabic-Indic digits end the match
    assert_eq!(extract_total_downloads("Total Downloads: 1,2\u{0663}4").unwrap(), Some(12));
    assert_eq!(extract_total_downloads("Total Downloads: \u{0663}\u{0664}").unwrap(), None);
}

#[test]
fn test_separators_only_is_invalid() {
    let result = extract_total_downloads("Total Downloads: ,,,");
    assert!(matches!(result, Err(SourceError::InvalidCount { .. })));
}

#[test]
fn test_resource_url() {
    let source = SpigotSource::new("balsync.123456");
    assert_eq!(
        source.url(),
        "https://www.spigotmc.org/resources/balsync.123456/"
    );
}

#[tokio::test]
async fn test_fetch_count_from_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/resources/42/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body("<dl><dt>Rating</dt></dl><p>Total Downloads: 2,048</p>")
        .create_async()
        .await;

    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let source = SpigotSource::new("42").with_base_url(server.url());

    assert_eq!(source.fetch(&networking).await, SourceOutcome::Count(2048));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_page_without_pattern_is_count_zero() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/resources/42/")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let source = SpigotSource::new("42").with_base_url(server.url());

    let (logs, _guard) = LogCapture::install();
    assert_eq!(source.fetch(&networking).await, SourceOutcome::Count(0));

    let logs = logs.contents();
    assert!(logs.contains("WARN"), "expected a warning, got: {logs}");
    assert!(logs.contains("Total Downloads"));
    assert!(logs.contains("source=spigot"));
    assert!(logs.contains(&format!("url={}/resources/42/", server.url())));
}

use super::*;
use crate::networking::NetworkingConfig;
use crate::sources::SourceOutcome;
use mockito::Server;

#[test]
fn test_parse_project_downloads() {
    let body = br#"{"slug": "balsync", "downloads": 100, "followers": 3}"#;
    assert_eq!(parse_project_downloads(body).unwrap(), 100);
}

#[test]
fn test_missing_downloads_field_is_zero() {
    assert_eq!(parse_project_downloads(br#"{"slug": "balsync"}"#).unwrap(), 0);
    assert_eq!(parse_project_downloads(br#"{"downloads": null}"#).unwrap(), 0);
}

#[test]
fn test_invalid_json_is_error() {
    let result = parse_project_downloads(b"not json");
    assert!(matches!(result, Err(SourceError::Json { .. })));
}

#[test]
fn test_negative_downloads_is_error() {
    let result = parse_project_downloads(br#"{"downloads": -5}"#);
    assert!(matches!(result, Err(SourceError::Json { .. })));
}

#[test]
fn test_project_url() {
    let source = ModrinthSource::new("lWNvJAlY");
    assert_eq!(source.url(), "https://api.modrinth.com/v2/project/lWNvJAlY");
    assert_eq!(source.project_id(), "lWNvJAlY");
}

#[tokio::test]
async fn test_fetch_count_from_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/project/lWNvJAlY")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "lWNvJAlY", "downloads": 1234}"#)
        .expect(1)
        .create_async()
        .await;

    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let source = ModrinthSource::new("lWNvJAlY").with_base_url(server.url());

    assert_eq!(source.fetch(&networking).await, SourceOutcome::Count(1234));
    mock.assert_async().await;
}

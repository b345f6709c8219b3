use super::*;
use crate::networking::NetworkingConfig;
use mockito::Server;

fn networking() -> NetworkingManager {
    NetworkingManager::new(NetworkingConfig::default()).unwrap()
}

#[test]
fn test_unavailable_counts_as_zero() {
    let outcome = SourceOutcome::Unavailable {
        reason: "HTTP 500".to_string(),
    };
    assert_eq!(outcome.count(), 0);
    assert!(!outcome.is_available());
    assert_eq!(SourceOutcome::Count(42).count(), 42);
}

#[test]
fn test_outcome_from_error_keeps_reason() {
    let result: Result<u64, SourceError> = Err(SourceError::InvalidCount {
        value: ",,".to_string(),
        reason: "empty".to_string(),
    });
    match SourceOutcome::from(result) {
        SourceOutcome::Unavailable { reason } => assert!(reason.contains("',,'")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn test_descriptor_dispatches_kind_and_url() {
    let descriptor = SourceDescriptor::from(
        GithubSource::new("deutschich", "BalSync").with_base_url("http://localhost:1/"),
    );
    assert_eq!(descriptor.kind(), SourceKind::Github);
    assert_eq!(
        descriptor.url(),
        "http://localhost:1/repos/deutschich/BalSync/releases"
    );
}

#[tokio::test]
async fn test_fetch_maps_http_failure_to_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/project/gone")
        .with_status(503)
        .create_async()
        .await;

    let descriptor =
        SourceDescriptor::from(ModrinthSource::new("gone").with_base_url(server.url()));
    let outcome = descriptor.fetch(&networking()).await;

    match outcome {
        SourceOutcome::Unavailable { reason } => assert!(reason.contains("503")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_maps_parse_failure_to_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/project/broken")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let source = ModrinthSource::new("broken").with_base_url(server.url());
    let outcome = source.fetch(&networking()).await;

    assert!(!outcome.is_available());
    assert_eq!(outcome.count(), 0);
}

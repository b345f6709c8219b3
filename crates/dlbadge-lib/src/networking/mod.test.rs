use super::*;
use mockito::Server;

#[test]
fn test_networking_manager_creation() {
    let manager = NetworkingManager::new(NetworkingConfig::default());
    assert!(manager.is_ok(), "Should create networking manager");
    assert_eq!(manager.unwrap().config().timeout_seconds, 30);
}

#[test]
fn test_default_user_agent_names_the_tool() {
    let config = NetworkingConfig::default();
    assert!(config.user_agent.starts_with("dlbadge/"));
}

#[test]
fn test_encode_segment() {
    assert_eq!(encode_segment("lWNvJAlY"), "lWNvJAlY");
    assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    assert_eq!(encode_segment("my-plugin.123"), "my-plugin.123");
}

#[tokio::test]
async fn test_get_returns_body_on_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ok")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body("hello")
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let body = manager
        .get(&format!("{}/ok", server.url()), Some("application/json"))
        .await
        .unwrap();

    assert_eq!(body, b"hello");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_sends_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ua")
        .match_header("user-agent", "badge-test/1")
        .with_status(200)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig {
        user_agent: "badge-test/1".to_string(),
        ..Default::default()
    })
    .unwrap();
    manager.get(&format!("{}/ua", server.url()), None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_text_replaces_invalid_utf8() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/page")
        .with_status(200)
        .with_body(b"Total \xff8".to_vec())
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let text = manager
        .get_text(&format!("{}/page", server.url()))
        .await
        .unwrap();

    assert_eq!(text, "Total \u{FFFD}8");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let result = manager.get_text(&format!("{}/missing", server.url())).await;

    assert!(matches!(
        result,
        Err(NetworkingError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_transport_failure_is_request_error() {
    let manager = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: 2,
        ..Default::default()
    })
    .unwrap();

    // Bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let result = manager.get(&format!("http://127.0.0.1:{port}/"), None).await;
    assert!(matches!(result, Err(NetworkingError::RequestFailed { .. })));
}

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use blurb::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _rx, _counter) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["tally_queue"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _rx, _counter) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("tally_queue").is_some());
    assert!(json["checks"].get("store").is_some());
}

#[tokio::test]
async fn test_health_reports_store_sizes() {
    let (state, mut rx, counter) = common::create_test_state();
    let server = common::create_test_server(state);

    common::shorten(&server, "https://github.com/a").await;
    common::shorten(&server, "https://github.com/b").await;
    common::apply_pending_tallies(&mut rx, &counter);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["message"], "2 mappings, 1 domains");
}

#[tokio::test]
async fn test_health_degraded_when_tally_queue_closed() {
    let (state, rx, _counter) = common::create_test_state();
    let server = common::create_test_server(state);

    drop(rx);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["tally_queue"]["status"], "error");
}

#[tokio::test]
async fn test_shorten_still_succeeds_when_tally_queue_closed() {
    let (state, rx, _counter) = common::create_test_state();
    let server = common::create_test_server(state);

    drop(rx);

    let short_url = common::shorten(&server, "https://example.com").await;
    let response = server.get(&common::short_path(&short_url)).await;

    assert_eq!(response.status_code(), 307);
}

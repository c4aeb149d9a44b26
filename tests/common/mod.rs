#![allow(dead_code)]

use axum_test::TestServer;
use blurb::application::services::ShortenService;
use blurb::domain::tally_event::TallyEvent;
use blurb::infrastructure::memory::{DomainCounter, InMemoryLinkRepository};
use blurb::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://localhost:3000";

/// Builds application state over an empty store.
///
/// No tally worker is spawned; tests call [`apply_pending_tallies`] to fold
/// queued tallies into the returned counter when they need them.
pub fn create_test_state() -> (AppState, mpsc::Receiver<TallyEvent>, Arc<DomainCounter>) {
    create_test_state_with_queue(100)
}

/// Same as [`create_test_state`] with a tally queue of `capacity` slots.
pub fn create_test_state_with_queue(
    capacity: usize,
) -> (AppState, mpsc::Receiver<TallyEvent>, Arc<DomainCounter>) {
    let (tx, rx) = mpsc::channel(capacity);
    let counter = Arc::new(DomainCounter::new());

    let service = ShortenService::new(
        Arc::new(InMemoryLinkRepository::new()),
        counter.clone(),
        tx,
        BASE_URL,
    );

    (AppState::new(Arc::new(service)), rx, counter)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(blurb::routes::router(state)).unwrap()
}

pub fn apply_pending_tallies(rx: &mut mpsc::Receiver<TallyEvent>, counter: &DomainCounter) {
    while let Ok(event) = rx.try_recv() {
        counter.increment(&event.domain);
    }
}

/// Posts `url` to `/short` and returns the short URL from the response.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/short")
        .json(&serde_json::json!({ "URL": url }))
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["URL"].as_str().unwrap().to_string()
}

/// Strips the base address, leaving `/long/{key}`.
pub fn short_path(short_url: &str) -> String {
    short_url.strip_prefix(BASE_URL).unwrap().to_string()
}

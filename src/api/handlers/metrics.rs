//! Handler for the top domains report.

use axum::extract::State;

use crate::state::AppState;

/// Returns the most shortened domains as plain text.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// Up to three lines, highest count first; ties keep first-seen order:
///
/// ```text
/// youtube.com: 4
/// linkedin.com: 3
/// github.com: 2
/// ```
///
/// The body is empty until something has been shortened.
pub async fn metrics_handler(State(state): State<AppState>) -> String {
    state
        .shorten_service
        .metrics_report()
        .iter()
        .map(|tally| format!("{tally}\n"))
        .collect()
}

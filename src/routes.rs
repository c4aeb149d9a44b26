//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /short`       - Shorten a URL
//! - `GET  /long/{key}`  - Short link redirect
//! - `GET  /metrics`     - Top shortened domains (plain text)
//! - `GET  /health`      - Health check: tally queue and store sizes
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, metrics_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/short", post(shorten_handler))
        .route("/long/{key}", get(redirect_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

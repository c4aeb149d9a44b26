//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The tally queue is closed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "tally_queue": { "status": "ok", "message": "Capacity: 10000" },
///     "store": { "status": "ok", "message": "12 mappings, 4 domains" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let tally_check = check_tally_queue(&state);
    let store_check = check_store(&state);

    let all_healthy = tally_check.is_ok() && store_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            tally_queue: tally_check,
            store: store_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks if the tally worker is still consuming the queue.
fn check_tally_queue(state: &AppState) -> CheckStatus {
    let service = &state.shorten_service;

    if service.is_tally_queue_closed() {
        CheckStatus::error("Tally queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", service.tally_queue_capacity()))
    }
}

/// Reports store sizes.
fn check_store(state: &AppState) -> CheckStatus {
    let service = &state.shorten_service;

    CheckStatus::ok(format!(
        "{} mappings, {} domains",
        service.mapping_count(),
        service.domain_count()
    ))
}

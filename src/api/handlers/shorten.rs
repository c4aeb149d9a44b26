//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /short`
///
/// # Request Body
///
/// ```json
/// { "URL": "https://github.com/cheerioskun/constellation" }
/// ```
///
/// # Response
///
/// ```json
/// { "URL": "http://localhost:3000/long/Xk2a9_fQ1b" }
/// ```
///
/// The short URL is a pure function of the long URL, so repeating the request
/// returns the same value.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, the URL is empty,
/// or the URL has no scheme or host.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let shortened = state.shorten_service.shorten(&payload.url)?;

    Ok(Json(ShortenResponse {
        url: shortened.short_url,
    }))
}

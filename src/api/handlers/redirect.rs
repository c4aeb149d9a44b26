//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /long/{key}`
///
/// Responds with `307 Temporary Redirect` and the long URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the key.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.shorten_service.resolve(&key)?;

    Ok(Redirect::temporary(&link.long_url))
}

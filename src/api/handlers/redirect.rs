//! Handler for short URL redirect.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};

use crate::api::dto::redirect::RedirectQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}?password=...`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the target URL
/// - **404 Not Found** - unknown code
/// - **410 Gone** - expired link
/// - **401 Unauthorized** - password-gated, no password supplied
/// - **403 Forbidden** - password-gated, wrong password
pub async fn redirect_handler(
    Path(code): Path<String>,
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let password = query.password.as_deref().filter(|s| !s.is_empty());

    let target_url = state.resolution_service.resolve(&code, password).await?;

    Ok(Redirect::temporary(&target_url))
}

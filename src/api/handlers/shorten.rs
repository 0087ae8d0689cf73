//! Handler for the link creation endpoint.

use axum::{Form, Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::application::services::CreateLinkRequest;
use crate::error::{AppError, Rejection};
use crate::state::AppState;

/// Creates a short link from a form submission.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Form Fields
///
/// - `url` - required, must start with `http://` or `https://`
/// - `custom_alias` - optional, `[A-Za-z0-9_-]{1,50}`
/// - `expiry_days` - optional, `1..=365`
/// - `password` - optional, at least 4 characters
/// - `trackClicks` / `generateQR` - accepted, unused
///
/// # Responses
///
/// - **201 Created** with `{short_url, long_url, created_date, expiry_date,
///   click_count}`
/// - **400 Bad Request** for validation failures
/// - **409 Conflict** when the custom alias is taken
/// - **500 / 503** for generation exhaustion and store failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = form
        .url
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request("URL is required", json!({ "field": "url" })))?;

    let request = CreateLinkRequest {
        url,
        custom_alias: form.custom_alias.filter(|s| !s.is_empty()),
        expiry_days: parse_expiry_days(form.expiry_days)?,
        password: form.password.filter(|s| !s.is_empty()),
    };

    let link = state.link_service.create(request).await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url,
            long_url: link.target_url,
            created_date: link.created_at,
            expiry_date: link.expires_at,
            click_count: 0,
        }),
    ))
}

/// Lenient parse of the `expiry_days` form field: blank means absent,
/// anything non-numeric is an expiry validation error.
fn parse_expiry_days(raw: Option<String>) -> Result<Option<i64>, AppError> {
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| Rejection::InvalidExpiry.into()),
    }
}

//! Request and response shapes for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form fields of a creation request.
///
/// All fields arrive as strings; empty strings from blank form inputs are
/// treated as absent by the handler. `trackClicks` and `generateQR` are
/// accepted for form compatibility but unused here.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: Option<String>,
    pub custom_alias: Option<String>,
    pub expiry_days: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "trackClicks")]
    pub track_clicks: Option<String>,
    #[serde(rename = "generateQR")]
    pub generate_qr: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
    pub created_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    /// Always 0 at creation; click tracking lives outside this service.
    pub click_count: i64,
}

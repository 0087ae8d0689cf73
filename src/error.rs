//! Error types and HTTP error responses.
//!
//! Three layers:
//!
//! - [`StoreError`] - typed persistence failures, produced by repository
//!   implementations. Distinguishes connectivity, configuration, missing
//!   schema, and uniqueness-constraint outcomes so callers can branch on them.
//! - [`CreateError`] / [`ResolveError`] - outcomes of the creation and
//!   resolution flows, combining user-caused rejections with store failures.
//! - [`AppError`] - the HTTP boundary. Everything above converts into it and
//!   it renders a `{"error": {code, message, details}}` JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Persistence-layer failure, classified by cause.
///
/// Repository implementations map their driver errors into these variants;
/// nothing above the repository layer sees `sqlx::Error` directly.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store is unreachable (connection refused, pool timeout, TLS failure).
    #[error("store unreachable: {0}")]
    Connectivity(String),
    /// The store rejected our credentials or connection parameters.
    #[error("store misconfigured: {0}")]
    Configuration(String),
    /// The expected schema objects do not exist (migrations not applied).
    #[error("store schema missing: {0}")]
    SchemaMissing(String),
    /// A uniqueness constraint rejected an insert.
    #[error("unique constraint violated: {0}")]
    ConstraintViolation(String),
    /// Anything else the driver reported.
    #[error("store error: {0}")]
    Other(String),
}

/// A user-caused rejection of a creation request.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid URL format. Make sure it starts with http:// or https://")]
    InvalidUrl,
    #[error("Custom alias is too long (max {max} characters)")]
    AliasTooLong { max: usize },
    #[error("Custom alias can only contain letters, numbers, hyphens and underscores")]
    AliasInvalidCharacters,
    #[error("This custom alias is already taken. Please choose another.")]
    AliasTaken,
    #[error("Expiry days must be between 1 and 365")]
    InvalidExpiry,
    #[error("Password must be at least 4 characters long")]
    PasswordTooShort,
    #[error("Could not generate unique short code. Please try again.")]
    GenerationExhausted,
}

/// Failure of the creation flow.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why a resolution request was denied.
///
/// Ordering matters and is enforced by the resolution service: existence is
/// checked before expiry, expiry before the password gate, so a caller never
/// learns the gating status of a code that does not exist or has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("Unknown code")]
    NotFound,
    #[error("This link has expired")]
    Expired,
    #[error("This link is password protected")]
    PasswordRequired,
    #[error("Incorrect password")]
    PasswordMismatch,
}

/// Failure of the resolution flow.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Denied(#[from] Denial),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// HTTP-boundary error carrying a status class, message, and detail payload.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Forbidden { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Gone { message: String, details: Value },
    Internal { message: String, details: Value },
    Unavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::Forbidden { message, details } => ("forbidden", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Gone { message, details } => ("gone", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
            AppError::Unavailable { message, details } => ("unavailable", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match &e {
            // Internal detail stays in the log, not in the response body.
            StoreError::Connectivity(cause) => {
                tracing::error!(%cause, "store unreachable");
                AppError::unavailable(
                    "Database server is unavailable. Please try again later.",
                    json!({}),
                )
            }
            StoreError::Configuration(cause) => {
                tracing::error!(%cause, "store misconfigured");
                AppError::internal(
                    "Database configuration error. Please contact support.",
                    json!({}),
                )
            }
            StoreError::SchemaMissing(cause) => {
                tracing::error!(%cause, "store schema missing");
                AppError::internal("Database not found. Please contact support.", json!({}))
            }
            StoreError::ConstraintViolation(constraint) => AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            ),
            StoreError::Other(cause) => {
                tracing::error!(%cause, "store error");
                AppError::internal(
                    "Unable to create short URL. Please try again later.",
                    json!({}),
                )
            }
        }
    }
}

impl From<Rejection> for AppError {
    fn from(r: Rejection) -> Self {
        let message = r.to_string();
        match r {
            Rejection::AliasTaken => AppError::conflict(message, json!({})),
            Rejection::GenerationExhausted => AppError::internal(message, json!({})),
            Rejection::AliasTooLong { max } => AppError::bad_request(message, json!({ "max": max })),
            _ => AppError::bad_request(message, json!({})),
        }
    }
}

impl From<CreateError> for AppError {
    fn from(e: CreateError) -> Self {
        match e {
            CreateError::Rejected(r) => r.into(),
            CreateError::Store(s) => s.into(),
        }
    }
}

impl From<Denial> for AppError {
    fn from(d: Denial) -> Self {
        let message = d.to_string();
        match d {
            Denial::NotFound => AppError::not_found(message, json!({})),
            Denial::Expired => AppError::gone(message, json!({})),
            Denial::PasswordRequired => AppError::unauthorized(message, json!({})),
            Denial::PasswordMismatch => AppError::forbidden(message, json!({})),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Denied(d) => d.into(),
            ResolveError::Store(s) => s.into(),
        }
    }
}

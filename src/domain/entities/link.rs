//! Link entity representing a shortened URL mapping.

use crate::error::Rejection;
use crate::utils::password::hash_password;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Target URLs must carry an http/https scheme. Checked once at creation,
/// never re-validated afterward.
static VALID_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:http|https)://").expect("valid pattern"));

/// Upper bound for `expiry_days` at creation.
pub const MAX_EXPIRY_DAYS: i64 = 365;

/// Minimum password length for the password gate.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// A persisted short link.
///
/// Created exactly once, never mutated. Expired links keep occupying their
/// code: collision checks do not exclude them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_hash: Option<String>,
    pub is_custom: bool,
}

impl Link {
    /// Returns true if the link is expired at `now`.
    ///
    /// Strictly after: a link resolves successfully at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now > e)
    }
}

/// Input data for creating a new link, fully validated.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_hash: Option<String>,
    pub is_custom: bool,
}

impl NewLink {
    /// Assembles a validated record from raw creation inputs.
    ///
    /// - `target_url` must start with `http://` or `https://` (case-insensitive)
    /// - `expiry_days`, if given, must be in `1..=365`; converted to
    ///   `created_at + expiry_days` days
    /// - `password`, if given, must be at least 4 characters; stored as a
    ///   SHA-256 hex digest, never as plaintext
    ///
    /// Sets `created_at` to the current UTC time. Does not persist anything.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidUrl`], [`Rejection::InvalidExpiry`], or
    /// [`Rejection::PasswordTooShort`].
    pub fn build(
        target_url: &str,
        code: String,
        is_custom: bool,
        expiry_days: Option<i64>,
        password: Option<&str>,
    ) -> Result<Self, Rejection> {
        if target_url.is_empty() || !VALID_URL.is_match(target_url) {
            return Err(Rejection::InvalidUrl);
        }

        let created_at = Utc::now();

        let expires_at = match expiry_days {
            Some(days) => {
                if !(1..=MAX_EXPIRY_DAYS).contains(&days) {
                    return Err(Rejection::InvalidExpiry);
                }
                Some(created_at + Duration::days(days))
            }
            None => None,
        };

        let password_hash = match password {
            Some(password) => {
                if password.chars().count() < MIN_PASSWORD_LENGTH {
                    return Err(Rejection::PasswordTooShort);
                }
                Some(hash_password(password))
            }
            None => None,
        };

        Ok(Self {
            code,
            target_url: target_url.to_string(),
            created_at,
            expires_at,
            password_hash,
            is_custom,
        })
    }
}

/// Checks the URL-scheme gate alone, without building a record.
///
/// The creation flow runs this before touching the store, so a request with
/// an invalid URL never triggers a lookup or an insert.
pub fn validate_target_url(target_url: &str) -> Result<(), Rejection> {
    if target_url.is_empty() || !VALID_URL.is_match(target_url) {
        return Err(Rejection::InvalidUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_minimal() {
        let link = NewLink::build("https://example.com", "abc123".into(), false, None, None)
            .expect("valid input");

        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert!(link.expires_at.is_none());
        assert!(link.password_hash.is_none());
        assert!(!link.is_custom);
    }

    #[test]
    fn test_build_accepts_http_and_https_case_insensitive() {
        for url in [
            "http://example.com",
            "https://example.com",
            "HTTP://example.com",
            "HtTpS://example.com/path?q=1",
        ] {
            assert!(
                NewLink::build(url, "c".into(), false, None, None).is_ok(),
                "url {url:?} should pass"
            );
        }
    }

    #[test]
    fn test_build_rejects_bad_scheme() {
        for url in ["ftp://example.com", "example.com", "", "javascript:alert(1)"] {
            assert_eq!(
                NewLink::build(url, "c".into(), false, None, None).unwrap_err(),
                Rejection::InvalidUrl,
                "url {url:?} should fail"
            );
        }
    }

    #[test]
    fn test_build_expiry_range() {
        for days in [1, 365] {
            let link =
                NewLink::build("https://e.com", "c".into(), false, Some(days), None).unwrap();
            let expires = link.expires_at.expect("expiry set");
            assert_eq!(expires, link.created_at + Duration::days(days));
        }

        for days in [0, -1, 366] {
            assert_eq!(
                NewLink::build("https://e.com", "c".into(), false, Some(days), None).unwrap_err(),
                Rejection::InvalidExpiry
            );
        }
    }

    #[test]
    fn test_build_password_hashing() {
        let link =
            NewLink::build("https://e.com", "c".into(), false, None, Some("abcd")).unwrap();

        let hash = link.password_hash.expect("hash set");
        assert_eq!(hash.len(), 64);
        assert_ne!(hash, "abcd");
    }

    #[test]
    fn test_build_password_too_short() {
        assert_eq!(
            NewLink::build("https://e.com", "c".into(), false, None, Some("abc")).unwrap_err(),
            Rejection::PasswordTooShort
        );
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let created = Utc::now();
        let link = Link {
            id: 1,
            code: "c".into(),
            target_url: "https://e.com".into(),
            created_at: created,
            expires_at: Some(created + Duration::days(1)),
            password_hash: None,
            is_custom: false,
        };

        // One minute short of 24h: live.
        assert!(!link.is_expired_at(created + Duration::hours(23) + Duration::minutes(59)));
        // Exactly at expiry: still live (expiry is strict).
        assert!(!link.is_expired_at(created + Duration::hours(24)));
        // One minute past: expired.
        assert!(link.is_expired_at(created + Duration::hours(24) + Duration::minutes(1)));
    }

    #[test]
    fn test_never_expires_without_expiry() {
        let link = Link {
            id: 1,
            code: "c".into(),
            target_url: "https://e.com".into(),
            created_at: Utc::now(),
            expires_at: None,
            password_hash: None,
            is_custom: false,
        };

        assert!(!link.is_expired_at(Utc::now() + Duration::days(10_000)));
    }
}

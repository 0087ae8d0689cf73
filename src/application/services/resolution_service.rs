//! Resolution service: turns a short code into its target URL.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repositories::LinkRepository;
use crate::error::{Denial, ResolveError};
use crate::utils::password::verify_password;

/// Read side of the service. Resolution requests are independent reads and
/// run with unlimited parallelism; no coordination is needed between them.
pub struct ResolutionService {
    repository: Arc<dyn LinkRepository>,
}

impl ResolutionService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a code to its target URL, applying the gating rules in order:
    ///
    /// 1. [`Denial::NotFound`] - no link carries the code
    /// 2. [`Denial::Expired`] - past `expires_at`
    /// 3. [`Denial::PasswordRequired`] - gated, no password supplied
    /// 4. [`Denial::PasswordMismatch`] - gated, wrong password supplied
    ///
    /// The order is deliberate: a caller must not learn that a code is
    /// password-gated unless it exists and has not expired. Digest comparison
    /// is constant-time.
    pub async fn resolve(
        &self,
        code: &str,
        supplied_password: Option<&str>,
    ) -> Result<String, ResolveError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or(Denial::NotFound)?;

        if link.is_expired_at(Utc::now()) {
            return Err(Denial::Expired.into());
        }

        if let Some(stored_hash) = &link.password_hash {
            match supplied_password {
                None => return Err(Denial::PasswordRequired.into()),
                Some(password) if !verify_password(password, stored_hash) => {
                    return Err(Denial::PasswordMismatch.into());
                }
                Some(_) => {}
            }
        }

        Ok(link.target_url)
    }
}

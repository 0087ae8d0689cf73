//! Link creation service: validation, code allocation, and persistence.

use std::sync::Arc;

use crate::domain::entities::link::validate_target_url;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{CreateError, Rejection, StoreError};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_alias};

/// Upper bound on generation attempts. A collision at length 6 has
/// probability around 1e-9 per attempt, so hitting this bound signals an
/// anomaly rather than bad luck and is reported as a server error.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Raw inputs of one creation request.
#[derive(Debug, Clone)]
pub struct CreateLinkRequest {
    pub url: String,
    pub custom_alias: Option<String>,
    pub expiry_days: Option<i64>,
    pub password: Option<String>,
}

/// Service for creating short links.
///
/// Guarantees that no two concurrent creations produce the same active code:
/// the pre-check read only shortens the common path, while the store's
/// uniqueness constraint on `code` closes the check-then-insert race. An
/// insert-time conflict is folded back into the same outcome as a pre-check
/// hit ([`Rejection::AliasTaken`] for custom aliases, one consumed attempt
/// for generated codes).
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link from validated request inputs.
    ///
    /// The URL gate runs first and short-circuits before any store
    /// round-trip; alias syntax is checked before the alias lookup.
    ///
    /// # Errors
    ///
    /// - [`Rejection`] variants for user-caused failures, including
    ///   [`Rejection::AliasTaken`] and [`Rejection::GenerationExhausted`]
    /// - [`StoreError`] for persistence failures
    pub async fn create(&self, request: CreateLinkRequest) -> Result<Link, CreateError> {
        validate_target_url(&request.url)?;

        match &request.custom_alias {
            Some(alias) => self.create_with_alias(&request, alias.clone()).await,
            None => self.create_generated(&request).await,
        }
    }

    /// Custom-alias path: syntax check, pre-check lookup, insert-as-reservation.
    async fn create_with_alias(
        &self,
        request: &CreateLinkRequest,
        alias: String,
    ) -> Result<Link, CreateError> {
        validate_alias(&alias)?;

        if self.repository.find_by_code(&alias).await?.is_some() {
            return Err(Rejection::AliasTaken.into());
        }

        let new_link = NewLink::build(
            &request.url,
            alias,
            true,
            request.expiry_days,
            request.password.as_deref(),
        )?;

        match self.repository.insert(new_link).await {
            Ok(link) => Ok(link),
            // Lost the race to a concurrent request: same outcome as a
            // pre-check hit.
            Err(StoreError::ConstraintViolation(_)) => Err(Rejection::AliasTaken.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Auto-generate path: bounded generate -> lookup -> insert loop.
    async fn create_generated(&self, request: &CreateLinkRequest) -> Result<Link, CreateError> {
        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(DEFAULT_CODE_LENGTH);

            if self.repository.find_by_code(&code).await?.is_some() {
                tracing::warn!(attempt, "generated code collided, retrying");
                continue;
            }

            let new_link = NewLink::build(
                &request.url,
                code,
                false,
                request.expiry_days,
                request.password.as_deref(),
            )?;

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                // Insert-time collision consumes this attempt.
                Err(StoreError::ConstraintViolation(_)) => {
                    tracing::warn!(attempt, "code collided at insert, retrying");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "exhausted code generation attempts"
        );
        Err(Rejection::GenerationExhausted.into())
    }
}

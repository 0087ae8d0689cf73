//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// The store enforces a uniqueness constraint on `code`; [`Self::insert`] is
/// therefore the actual reservation of a code. A pre-check via
/// [`Self::find_by_code`] only shortens the common path - the creation flow
/// must still treat an insert-time [`StoreError::ConstraintViolation`] as a
/// collision.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory implementation (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link, reserving its code.
    ///
    /// # Errors
    ///
    /// [`StoreError::ConstraintViolation`] if the code is already taken
    /// (including by an expired link); other [`StoreError`] variants for
    /// connectivity, configuration, or schema failures.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Point lookup by short code.
    ///
    /// Returns `Ok(None)` when no link carries the code. Expired links are
    /// returned like any other: expiry is the resolution service's concern,
    /// and for collision purposes an expired code is still taken.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Cheap connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}

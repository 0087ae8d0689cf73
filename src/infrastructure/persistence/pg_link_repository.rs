//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Each call acquires a pooled connection for exactly the duration of its
/// statement; single-statement operations commit or roll back atomically on
/// the server, so no explicit transaction spans multiple round-trips.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, target_url, created_at, expires_at, password_hash, is_custom)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, target_url, created_at, expires_at, password_hash, is_custom
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .bind(&new_link.password_hash)
        .bind(new_link.is_custom)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_store_error)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, target_url, created_at, expires_at, password_hash, is_custom
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_store_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }
}

/// Classifies a driver error into the [`StoreError`] taxonomy.
///
/// Postgres SQLSTATE classes used:
/// - `23xxx` unique violation (via the driver's own check) - constraint conflict
/// - `42P01` undefined table - migrations not applied
/// - `28xxx` / `3D000` bad credentials or unknown database - misconfiguration
///
/// I/O, TLS, and pool failures are connectivity problems.
pub fn map_store_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) => {
            if db.is_unique_violation() {
                return StoreError::ConstraintViolation(
                    db.constraint().unwrap_or("unknown").to_string(),
                );
            }
            match db.code().as_deref() {
                Some("42P01") => StoreError::SchemaMissing(db.message().to_string()),
                Some("3D000") | Some("28000") | Some("28P01") => {
                    StoreError::Configuration(db.message().to_string())
                }
                _ => StoreError::Other(db.message().to_string()),
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreError::Connectivity(e.to_string()),
        sqlx::Error::Configuration(_) => StoreError::Configuration(e.to_string()),
        _ => StoreError::Other(e.to_string()),
    }
}

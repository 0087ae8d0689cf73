#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::StoreError;
use shortlink::state::AppState;
use shortlink::utils::password::hash_password;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory link store enforcing the same uniqueness rule as the
/// `links_code_key` index. The occupancy check and the insert happen under
/// one lock, so the check-then-insert race between concurrent creation
/// requests plays out exactly as it does against Postgres: one writer wins,
/// the rest see a constraint violation.
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.links.lock().unwrap().get(code).cloned()
    }

    /// Seeds a link directly, bypassing the creation flow. Lets tests plant
    /// already-expired rows that the builder would reject.
    pub fn seed(&self, new_link: NewLink) -> Link {
        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            code: new_link.code,
            target_url: new_link.target_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            password_hash: new_link.password_hash,
            is_custom: new_link.is_custom,
        };
        self.links
            .lock()
            .unwrap()
            .insert(link.code.clone(), link.clone());
        link
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.code) {
            return Err(StoreError::ConstraintViolation("links_code_key".into()));
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            code: new_link.code,
            target_url: new_link.target_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            password_hash: new_link.password_hash,
            is_custom: new_link.is_custom,
        };
        links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), "https://s.test.com".to_string());
    (state, repository)
}

pub fn plain_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
        created_at: Utc::now(),
        expires_at: None,
        password_hash: None,
        is_custom: false,
    }
}

pub fn expired_link(code: &str, url: &str) -> NewLink {
    let created_at = Utc::now() - Duration::days(2);
    NewLink {
        expires_at: Some(created_at + Duration::days(1)),
        created_at,
        ..plain_link(code, url)
    }
}

pub fn password_link(code: &str, url: &str, password: &str) -> NewLink {
    NewLink {
        password_hash: Some(hash_password(password)),
        ..plain_link(code, url)
    }
}

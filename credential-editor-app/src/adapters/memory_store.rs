//! In-memory credential store.
//!
//! Implements both `CredentialRepository` and `DuplicateLookup` over one map,
//! so a single instance can back an `AppState`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use credential_editor_core::error::{CoreError, CoreResult};
use credential_editor_core::traits::{CredentialRepository, DuplicateLookup};
use credential_editor_core::types::{CommittedEdit, CredentialRecord};

struct StoredCredential {
    record: CredentialRecord,
    updated_at: DateTime<Utc>,
}

/// Credential store kept entirely in memory.
///
/// Enforces that `(origin, username)` is unique across stored credentials.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: RwLock<HashMap<String, StoredCredential>>,
}

impl InMemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new credential under a fresh UUID and return it.
    pub async fn insert(
        &self,
        origin: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> CoreResult<CredentialRecord> {
        let record = CredentialRecord::new(
            uuid::Uuid::new_v4().to_string(),
            origin,
            username,
            password,
        );

        let mut store = self.credentials.write().await;
        if Self::is_taken(&store, &record.origin, &record.username, &record.id) {
            return Err(CoreError::DuplicateCredential {
                origin: record.origin,
                username: record.username,
            });
        }
        store.insert(
            record.id.clone(),
            StoredCredential {
                record: record.clone(),
                updated_at: Utc::now(),
            },
        );
        Ok(record)
    }

    /// Time of the last insert or update of a credential
    pub async fn updated_at(&self, id: &str) -> Option<DateTime<Utc>> {
        self.credentials.read().await.get(id).map(|c| c.updated_at)
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }

    fn is_taken(
        store: &HashMap<String, StoredCredential>,
        origin: &str,
        username: &str,
        except_id: &str,
    ) -> bool {
        store.values().any(|c| {
            c.record.id != except_id && c.record.origin == origin && c.record.username == username
        })
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialStore {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<CredentialRecord>> {
        Ok(self
            .credentials
            .read()
            .await
            .get(id)
            .map(|c| c.record.clone()))
    }

    async fn update(&self, edit: &CommittedEdit) -> CoreResult<()> {
        let mut store = self.credentials.write().await;

        let origin = store
            .get(&edit.id)
            .map(|c| c.record.origin.clone())
            .ok_or_else(|| CoreError::CredentialNotFound(edit.id.clone()))?;

        if Self::is_taken(&store, &origin, &edit.new_username, &edit.id) {
            return Err(CoreError::DuplicateCredential {
                origin,
                username: edit.new_username.clone(),
            });
        }

        if let Some(stored) = store.get_mut(&edit.id) {
            stored.record.username.clone_from(&edit.new_username);
            stored.record.password.clone_from(&edit.new_password);
            stored.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[async_trait]
impl DuplicateLookup for InMemoryCredentialStore {
    async fn find_usernames(&self, origin: &str, exclude_id: &str) -> CoreResult<Vec<String>> {
        Ok(self
            .credentials
            .read()
            .await
            .values()
            .filter(|c| c.record.origin == origin && c.record.id != exclude_id)
            .map(|c| c.record.username.clone())
            .collect())
    }
}

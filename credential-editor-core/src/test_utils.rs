//! Test helper module
//!
//! Provides mock implementations and convenient factory methods.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{CredentialEditService, ServiceContext};
use crate::traits::{CredentialRepository, DuplicateLookup};
use crate::types::{CommittedEdit, CredentialRecord};

// ===== MockCredentialRepository =====

pub struct MockCredentialRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
    /// If Some, `find_by_id` returns this error
    find_error: RwLock<Option<String>>,
    /// If Some, `update` returns this error
    update_error: RwLock<Option<String>>,
    update_calls: RwLock<usize>,
}

impl MockCredentialRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            find_error: RwLock::new(None),
            update_error: RwLock::new(None),
            update_calls: RwLock::new(0),
        }
    }

    pub async fn insert(&self, record: CredentialRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    pub async fn set_find_error(&self, err: Option<String>) {
        *self.find_error.write().await = err;
    }

    pub async fn set_update_error(&self, err: Option<String>) {
        *self.update_error.write().await = err;
    }

    pub async fn update_count(&self) -> usize {
        *self.update_calls.read().await
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<CredentialRecord>> {
        if let Some(ref msg) = *self.find_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, edit: &CommittedEdit) -> CoreResult<()> {
        *self.update_calls.write().await += 1;
        if let Some(ref msg) = *self.update_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let mut store = self.records.write().await;
        let record = store
            .get_mut(&edit.id)
            .ok_or_else(|| CoreError::CredentialNotFound(edit.id.clone()))?;
        record.username.clone_from(&edit.new_username);
        record.password.clone_from(&edit.new_password);
        Ok(())
    }
}

// ===== MockDuplicateLookup =====

pub struct MockDuplicateLookup {
    usernames: RwLock<Vec<String>>,
    /// If Some, `find_usernames` returns this error
    error: RwLock<Option<String>>,
    /// (origin, `exclude_id`) of the most recent query
    last_query: RwLock<Option<(String, String)>>,
}

impl MockDuplicateLookup {
    pub fn new() -> Self {
        Self {
            usernames: RwLock::new(Vec::new()),
            error: RwLock::new(None),
            last_query: RwLock::new(None),
        }
    }

    pub async fn set_usernames(&self, usernames: Vec<String>) {
        *self.usernames.write().await = usernames;
    }

    pub async fn set_error(&self, err: Option<String>) {
        *self.error.write().await = err;
    }

    pub async fn last_query(&self) -> Option<(String, String)> {
        self.last_query.read().await.clone()
    }
}

#[async_trait]
impl DuplicateLookup for MockDuplicateLookup {
    async fn find_usernames(&self, origin: &str, exclude_id: &str) -> CoreResult<Vec<String>> {
        *self.last_query.write().await = Some((origin.to_string(), exclude_id.to_string()));
        if let Some(ref msg) = *self.error.read().await {
            return Err(CoreError::LookupError(msg.clone()));
        }
        Ok(self.usernames.read().await.clone())
    }
}

// ===== Factory methods =====

/// Create a `CredentialEditService` backed by mocks
pub fn create_test_edit_service() -> (
    CredentialEditService,
    Arc<MockCredentialRepository>,
    Arc<MockDuplicateLookup>,
) {
    let repo = Arc::new(MockCredentialRepository::new());
    let lookup = Arc::new(MockDuplicateLookup::new());
    let ctx = Arc::new(ServiceContext::new(repo.clone(), lookup.clone()));
    (CredentialEditService::new(ctx), repo, lookup)
}

/// The record most tests edit: `alice` / `secret` at `https://example.com`
pub fn test_record() -> CredentialRecord {
    CredentialRecord::new("cred-1", "https://example.com", "alice", "secret")
}

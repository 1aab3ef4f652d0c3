//! Credential persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{CommittedEdit, CredentialRecord};

/// Credential Repository Trait
///
/// Supplies the record being edited and accepts the committed edit.
/// How credentials are stored, encrypted or synced is up to the implementation.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Get credential based on ID
    ///
    /// # Arguments
    /// * `id` - Credential ID
    ///
    /// # Returns
    /// * `Ok(Some(record))` - credential exists
    /// * `Ok(None)` - credential does not exist
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<CredentialRecord>>;

    /// Persist an edit
    ///
    /// # Arguments
    /// * `edit` - values produced by `EditSession::commit`
    ///
    /// # Errors
    /// * `CoreError::CredentialNotFound` - the credential was removed meanwhile
    /// * `CoreError::DuplicateCredential` - the new username collides at this origin
    async fn update(&self, edit: &CommittedEdit) -> CoreResult<()>;
}

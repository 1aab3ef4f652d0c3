//! Credential edit service
//!
//! Connects an `EditSession` to its collaborators: loads the record being
//! edited, fetches the duplicate set and forwards committed edits to storage.

use std::sync::Arc;

use crate::editor::EditSession;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CommittedEdit, CredentialRecord, DuplicateIndex};
use crate::utils::log_sanitizer::truncate_for_log;

/// Credential edit service
pub struct CredentialEditService {
    ctx: Arc<ServiceContext>,
}

impl CredentialEditService {
    /// Create a credential edit service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Open an edit session for a stored credential
    ///
    /// The returned session is in `Loading`; call [`load_duplicates`](Self::load_duplicates)
    /// or apply [`fetch_duplicates`](Self::fetch_duplicates) to it afterwards.
    pub async fn begin_edit(&self, id: &str) -> CoreResult<EditSession> {
        let record = self
            .ctx
            .credential_repository()
            .find_by_id(id)
            .await
            .inspect_err(|e| e.log("Failed to load credential"))?
            .ok_or_else(|| CoreError::CredentialNotFound(id.to_string()))?;

        log::info!("Editing credential {} for {}", record.id, record.origin);
        Ok(EditSession::new(record))
    }

    /// Query the usernames of the other credentials at the record's origin
    ///
    /// Intended for hosts that keep accepting input while the lookup is in
    /// flight: apply the result to the latest snapshot with
    /// `EditSession::on_duplicates_loaded`.
    pub async fn fetch_duplicates(&self, record: &CredentialRecord) -> CoreResult<DuplicateIndex> {
        let usernames = self
            .ctx
            .duplicate_lookup()
            .find_usernames(&record.origin, &record.id)
            .await
            .inspect_err(|e| e.log("Duplicate lookup failed"))?;

        log::info!(
            "Loaded {} other username(s) for {}",
            usernames.len(),
            record.origin
        );
        Ok(usernames.into_iter().collect())
    }

    /// Fetch the duplicate set and apply it to `session`
    ///
    /// On failure the caller keeps its previous snapshot, which stays in `Loading`.
    pub async fn load_duplicates(&self, session: &EditSession) -> CoreResult<EditSession> {
        let index = self.fetch_duplicates(session.record()).await?;
        Ok(session.clone().on_duplicates_loaded(index))
    }

    /// Commit the session and hand the edit to storage
    ///
    /// Storage failures are logged and returned to the caller, never retried.
    pub async fn save(&self, session: &EditSession) -> CoreResult<CommittedEdit> {
        let edit = session
            .commit()
            .inspect_err(|e| e.log("Refusing to save credential"))?;

        self.ctx
            .credential_repository()
            .update(&edit)
            .await
            .inspect_err(|e| e.log(&format!("Failed to save credential {}", edit.id)))?;

        log::info!(
            "Saved credential {} (username: {})",
            edit.id,
            truncate_for_log(&edit.new_username)
        );
        Ok(edit)
    }
}

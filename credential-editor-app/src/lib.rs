//! Platform-agnostic application bootstrap for the credential editor.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter injection).

pub mod adapters;

use std::sync::Arc;

use credential_editor_core::error::{CoreError, CoreResult};
use credential_editor_core::services::{CredentialEditService, ServiceContext};
use credential_editor_core::traits::{CredentialRepository, DuplicateLookup};

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Credential edit service
    pub credential_edit_service: CredentialEditService,
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `credential_repository` — where records are read from and edits are written to
/// - `duplicate_lookup` — where the usernames of other credentials at an origin come from
///
/// With the `memory-store` feature, `memory_store` installs one
/// `InMemoryCredentialStore` as both.
pub struct AppStateBuilder {
    credential_repository: Option<Arc<dyn CredentialRepository>>,
    duplicate_lookup: Option<Arc<dyn DuplicateLookup>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            credential_repository: None,
            duplicate_lookup: None,
        }
    }

    #[must_use]
    pub fn credential_repository(mut self, repo: Arc<dyn CredentialRepository>) -> Self {
        self.credential_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn duplicate_lookup(mut self, lookup: Arc<dyn DuplicateLookup>) -> Self {
        self.duplicate_lookup = Some(lookup);
        self
    }

    #[cfg(feature = "memory-store")]
    #[must_use]
    pub fn memory_store(self, store: Arc<adapters::InMemoryCredentialStore>) -> Self {
        self.credential_repository(store.clone())
            .duplicate_lookup(store)
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let credential_repository = self.credential_repository.ok_or_else(|| {
            CoreError::ValidationError("credential_repository is required".to_string())
        })?;
        let duplicate_lookup = self.duplicate_lookup.ok_or_else(|| {
            CoreError::ValidationError("duplicate_lookup is required".to_string())
        })?;

        let ctx = Arc::new(ServiceContext::new(credential_repository, duplicate_lookup));
        let credential_edit_service = CredentialEditService::new(Arc::clone(&ctx));

        log::debug!("Credential editor state built");
        Ok(AppState {
            ctx,
            credential_edit_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Business logic service layer

mod credential_edit_service;

pub use credential_edit_service::CredentialEditService;

use std::sync::Arc;

use crate::traits::{CredentialRepository, DuplicateLookup};

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its storage implementations.
pub struct ServiceContext {
    credential_repository: Arc<dyn CredentialRepository>,
    duplicate_lookup: Arc<dyn DuplicateLookup>,
}

impl ServiceContext {
    /// Create service context
    #[must_use]
    pub fn new(
        credential_repository: Arc<dyn CredentialRepository>,
        duplicate_lookup: Arc<dyn DuplicateLookup>,
    ) -> Self {
        Self {
            credential_repository,
            duplicate_lookup,
        }
    }

    pub fn credential_repository(&self) -> &Arc<dyn CredentialRepository> {
        &self.credential_repository
    }

    pub fn duplicate_lookup(&self) -> &Arc<dyn DuplicateLookup> {
        &self.duplicate_lookup
    }
}

//! Credential record type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

/// A stored credential as it was when the edit started.
///
/// Owned by the storage layer. The editor only reads it for comparison.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Opaque credential ID
    pub id: String,
    /// Site origin the credential belongs to
    pub origin: String,
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("origin", &self.origin)
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

/// Values produced by a successful `commit()`, handed to the storage layer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedEdit {
    /// ID of the edited credential
    pub id: String,
    pub new_username: String,
    pub new_password: String,
}

impl fmt::Debug for CommittedEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedEdit")
            .field("id", &self.id)
            .field("new_username", &self.new_username)
            .field("new_password", &mask_secret(&self.new_password))
            .finish()
    }
}

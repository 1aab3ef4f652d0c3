//! Edit session snapshot

use std::fmt;

use crate::editor::engine;
use crate::error::{CoreError, CoreResult};
use crate::types::{
    CommittedEdit, CredentialRecord, DuplicateIndex, DuplicateStatus, FieldKind, FieldState,
};
use crate::utils::log_sanitizer::mask_secret;

/// State of one "edit saved credential" form.
///
/// Created once per edit screen, seeded with the stored record and an empty
/// duplicate index in [`DuplicateStatus::Loading`]. It has no persistence of
/// its own and is dropped when the screen is dismissed.
#[derive(Clone, PartialEq, Eq)]
pub struct EditSession {
    pub(crate) record: CredentialRecord,
    pub(crate) username: FieldState,
    pub(crate) password: FieldState,
    pub(crate) duplicates: DuplicateIndex,
    pub(crate) duplicate_status: DuplicateStatus,
}

impl EditSession {
    /// Start a session with both fields showing the stored values.
    #[must_use]
    pub fn new(record: CredentialRecord) -> Self {
        Self {
            username: FieldState::pristine(record.username.clone()),
            password: FieldState::pristine(record.password.clone()),
            record,
            duplicates: DuplicateIndex::new(),
            duplicate_status: DuplicateStatus::Loading,
        }
    }

    // ===== Entry points =====

    #[must_use]
    pub fn on_username_changed(self, value: &str) -> Self {
        engine::on_username_input(self, value)
    }

    #[must_use]
    pub fn on_password_changed(self, value: &str) -> Self {
        engine::on_password_input(self, value)
    }

    #[must_use]
    pub fn on_duplicates_loaded(self, index: DuplicateIndex) -> Self {
        engine::on_duplicates_loaded(self, index)
    }

    // ===== Derived state =====

    /// Whether the current draft may be committed.
    pub fn can_save(&self) -> bool {
        engine::can_save(&self.username, &self.password)
    }

    /// Whether either field differs from the stored record.
    pub fn is_dirty(&self) -> bool {
        self.username.is_dirty() || self.password.is_dirty()
    }

    pub fn record(&self) -> &CredentialRecord {
        &self.record
    }

    pub fn username(&self) -> &FieldState {
        &self.username
    }

    pub fn password(&self) -> &FieldState {
        &self.password
    }

    pub fn field(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Username => &self.username,
            FieldKind::Password => &self.password,
        }
    }

    pub fn duplicates(&self) -> &DuplicateIndex {
        &self.duplicates
    }

    pub fn duplicate_status(&self) -> DuplicateStatus {
        self.duplicate_status
    }

    /// Fields whose state differs from `previous`.
    pub fn changed_fields(&self, previous: &Self) -> Vec<FieldKind> {
        [FieldKind::Username, FieldKind::Password]
            .into_iter()
            .filter(|&kind| self.field(kind) != previous.field(kind))
            .collect()
    }

    /// Produce the values to hand to the storage layer.
    ///
    /// Fails with [`CoreError::GateClosed`] when [`can_save`](Self::can_save) is false.
    /// Leaves the session untouched; dropping it is up to the caller.
    pub fn commit(&self) -> CoreResult<CommittedEdit> {
        if !self.can_save() {
            return Err(CoreError::GateClosed);
        }
        Ok(CommittedEdit {
            id: self.record.id.clone(),
            new_username: self.username.value().to_string(),
            new_password: self.password.value().to_string(),
        })
    }
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("record", &self.record)
            .field("username", &self.username)
            .field(
                "password",
                &format_args!(
                    "FieldState {{ value: {}, dirty: {}, valid: {}, error: {:?} }}",
                    mask_secret(self.password.value()),
                    self.password.is_dirty(),
                    self.password.is_valid(),
                    self.password.error()
                ),
            )
            .field("duplicates", &self.duplicates.len())
            .field("duplicate_status", &self.duplicate_status)
            .field("can_save", &self.can_save())
            .finish()
    }
}

//! Validation rules
//!
//! Pure functions from (original record, draft, duplicate index) to field
//! states. Each entry point recomputes only the field it concerns; the gate is
//! derived from the two field states on read.

use crate::editor::EditSession;
use crate::types::{DuplicateIndex, DuplicateStatus, FieldErrorKind, FieldState};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

/// Classify a username draft.
///
/// Equality to the original is checked before duplicate membership, so
/// reverting is always accepted even if the index holds the same literal.
pub fn validate_username(original: &str, value: &str, duplicates: &DuplicateIndex) -> FieldState {
    if value == original {
        FieldState::pristine(value)
    } else if duplicates.contains(value) {
        FieldState::invalid(value, FieldErrorKind::DuplicateUsername)
    } else {
        FieldState::changed(value)
    }
}

/// Classify a password draft. Emptiness is checked first and is always invalid.
pub fn validate_password(original: &str, value: &str) -> FieldState {
    if value.is_empty() {
        FieldState::invalid(value, FieldErrorKind::EmptyPassword)
    } else if value == original {
        FieldState::pristine(value)
    } else {
        FieldState::changed(value)
    }
}

/// The save gate: both fields valid and at least one of them dirty.
pub fn can_save(username: &FieldState, password: &FieldState) -> bool {
    username.is_valid() && password.is_valid() && (username.is_dirty() || password.is_dirty())
}

pub fn on_username_input(mut session: EditSession, value: &str) -> EditSession {
    session.username = validate_username(&session.record.username, value, &session.duplicates);
    log::debug!(
        "username input {:?}: dirty={}, valid={}, can_save={}",
        truncate_for_log(value),
        session.username.is_dirty(),
        session.username.is_valid(),
        session.can_save()
    );
    session
}

pub fn on_password_input(mut session: EditSession, value: &str) -> EditSession {
    session.password = validate_password(&session.record.password, value);
    log::debug!(
        "password input {}: dirty={}, valid={}, can_save={}",
        mask_secret(value),
        session.password.is_dirty(),
        session.password.is_valid(),
        session.can_save()
    );
    session
}

/// Swap in a freshly delivered duplicate set and re-check the current username
/// against it. The password field is left untouched.
pub fn on_duplicates_loaded(mut session: EditSession, index: DuplicateIndex) -> EditSession {
    session.duplicates = index;
    session.duplicate_status = DuplicateStatus::Ready;
    session.username = validate_username(
        &session.record.username,
        session.username.value(),
        &session.duplicates,
    );
    log::debug!(
        "duplicates loaded ({} entries): username valid={}, can_save={}",
        session.duplicates.len(),
        session.username.is_valid(),
        session.can_save()
    );
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(names: &[&str]) -> DuplicateIndex {
        names.iter().copied().collect()
    }

    #[test]
    fn username_equal_to_original_ignores_index() {
        let state = validate_username("alice", "alice", &index(&["alice"]));
        assert_eq!(state, FieldState::pristine("alice"));
    }

    #[test]
    fn username_in_index_is_duplicate() {
        let state = validate_username("alice", "bob", &index(&["bob", "carol"]));
        assert!(state.is_dirty());
        assert!(!state.is_valid());
        assert_eq!(state.error(), Some(FieldErrorKind::DuplicateUsername));
    }

    #[test]
    fn username_not_in_index_is_valid_change() {
        let state = validate_username("alice", "dave", &index(&["bob", "carol"]));
        assert_eq!(state, FieldState::changed("dave"));
    }

    #[test]
    fn username_comparison_is_exact() {
        let state = validate_username("alice", "Alice", &index(&["bob"]));
        assert!(state.is_dirty());
        assert!(state.is_valid());

        let state = validate_username("alice", "BOB", &index(&["bob"]));
        assert!(state.is_valid());
    }

    #[test]
    fn empty_username_is_allowed() {
        let state = validate_username("alice", "", &DuplicateIndex::new());
        assert_eq!(state, FieldState::changed(""));
    }

    #[test]
    fn empty_password_is_invalid() {
        let state = validate_password("secret", "");
        assert_eq!(state, FieldState::invalid("", FieldErrorKind::EmptyPassword));
    }

    #[test]
    fn empty_password_wins_over_equal_to_original() {
        let state = validate_password("", "");
        assert!(!state.is_valid());
        assert_eq!(state.error(), Some(FieldErrorKind::EmptyPassword));
    }

    #[test]
    fn password_rules() {
        assert_eq!(validate_password("secret", "secret"), FieldState::pristine("secret"));
        assert_eq!(validate_password("secret", "s3cret"), FieldState::changed("s3cret"));
    }

    #[test]
    fn gate_requires_a_dirty_field() {
        let clean = FieldState::pristine("x");
        assert!(!can_save(&clean, &clean));
        assert!(can_save(&FieldState::changed("y"), &clean));
        assert!(can_save(&clean, &FieldState::changed("y")));
    }

    #[test]
    fn gate_requires_both_valid() {
        let dup = FieldState::invalid("bob", FieldErrorKind::DuplicateUsername);
        let empty = FieldState::invalid("", FieldErrorKind::EmptyPassword);
        assert!(!can_save(&dup, &FieldState::changed("pw")));
        assert!(!can_save(&FieldState::changed("dave"), &empty));
    }
}

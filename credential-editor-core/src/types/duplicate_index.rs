//! Usernames of the other credentials stored at the edited origin

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Whether the duplicate set has been delivered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateStatus {
    /// Lookup still pending; the index is empty
    Loading,
    /// At least one delivery has been applied
    Ready,
}

/// Set of usernames that belong to other credentials at the same origin.
///
/// The edited record's own id is excluded by the lookup that fills it.
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateIndex {
    usernames: HashSet<String>,
}

impl DuplicateIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set. A later delivery supersedes an earlier one, nothing is merged.
    pub fn replace(&mut self, usernames: impl IntoIterator<Item = String>) {
        self.usernames = usernames.into_iter().collect();
    }

    pub fn contains(&self, username: &str) -> bool {
        self.usernames.contains(username)
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DuplicateIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            usernames: iter.into_iter().map(Into::into).collect(),
        }
    }
}

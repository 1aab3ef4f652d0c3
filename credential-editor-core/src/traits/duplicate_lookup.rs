//! Duplicate lookup abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Duplicate Lookup Trait
///
/// Answers which usernames other credentials already use at an origin.
#[async_trait]
pub trait DuplicateLookup: Send + Sync {
    /// List the usernames stored for `origin`, skipping the credential `exclude_id`
    ///
    /// # Arguments
    /// * `origin` - Site origin
    /// * `exclude_id` - ID of the credential being edited
    async fn find_usernames(&self, origin: &str, exclude_id: &str) -> CoreResult<Vec<String>>;
}

use crate::{CreateOutcome, Result as CoreErrorResult, UserProfile};

use async_trait::async_trait;

/// Persistent store of user profiles keyed by uid.
///
/// `create_if_absent` must be a single atomic operation in the backing store:
/// two concurrent calls for the same uid yield exactly one `Created`.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get(&self, uid: &str) -> CoreErrorResult<Option<UserProfile>>;

    async fn create_if_absent(
        &self,
        uid: &str,
        profile: &UserProfile,
    ) -> CoreErrorResult<CreateOutcome>;
}

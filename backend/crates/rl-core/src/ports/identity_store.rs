use crate::{LinkedProfile, StoreResult, UserAccount};

use async_trait::async_trait;

/// Persistence of user accounts, keyed uniquely by username.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_key(&self, username: &str) -> StoreResult<Option<UserAccount>>;

    /// Insert a new account. Fails with `StoreError::Duplicate` when the
    /// username is taken.
    async fn insert(&self, account: &UserAccount) -> StoreResult<()>;

    /// Atomically replace the linked profile of `username` in full.
    ///
    /// Returns the post-update record, or `None` when no such account exists.
    /// Never creates an account.
    async fn find_and_replace(
        &self,
        username: &str,
        profile: &LinkedProfile,
    ) -> StoreResult<Option<UserAccount>>;
}

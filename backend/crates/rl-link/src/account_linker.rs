//! Account linking: identity lookup, then rank lookup, then one atomic write.
//!
//! Stage order is strict. The identity authority is a hard dependency and
//! any failure there aborts before the store is touched. The rank authority
//! is soft; `RankResolver` cannot fail, so its faults never reach here.

use crate::{LinkError, Result};

use rl_core::{IdentityResolver, IdentityStore, LinkRequest, LinkedProfile, RankResolver};

use std::sync::Arc;

use log::info;

pub struct AccountLinker {
    identity: Arc<dyn IdentityResolver>,
    rank: Arc<dyn RankResolver>,
    store: Arc<dyn IdentityStore>,
}

impl AccountLinker {
    pub fn new(
        identity: Arc<dyn IdentityResolver>,
        rank: Arc<dyn RankResolver>,
        store: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            identity,
            rank,
            store,
        }
    }

    /// Attach the canonical game profile named by `request` to its user.
    ///
    /// Performs exactly one store mutation on success and none on failure.
    /// Never creates an account; an unknown username is `NotFound`.
    pub async fn link_account(&self, request: LinkRequest) -> Result<LinkedProfile> {
        request.validate()?;
        let username = request.username.trim();

        let identity = self
            .identity
            .resolve_identity(
                request.claimed_display_name.trim(),
                request.claimed_tag.trim(),
            )
            .await?;

        let rank = self.rank.resolve_rank(&identity).await;
        let profile = LinkedProfile::new(identity, rank);

        let updated = self
            .store
            .find_and_replace(username, &profile)
            .await?
            .ok_or_else(|| LinkError::not_found(username))?;

        let stored = updated.linked_profile.ok_or_else(|| {
            LinkError::store(format!("Profile missing after update for {}", username))
        })?;

        info!(
            "Linked {} to {}#{} ({})",
            username, stored.display_name, stored.tag, stored.rank
        );

        Ok(stored)
    }
}

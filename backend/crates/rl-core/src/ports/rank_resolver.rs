use crate::{CanonicalIdentity, RankTier};

use async_trait::async_trait;

/// Best-effort lookup of a canonical identity's current rank.
///
/// Implementations must contain every fault internally and answer
/// [`RankTier::unranked`] instead. This port has no error channel.
#[async_trait]
pub trait RankResolver: Send + Sync {
    async fn resolve_rank(&self, identity: &CanonicalIdentity) -> RankTier;
}

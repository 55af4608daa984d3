use crate::{CanonicalIdentity, RankTier};

/// External game profile attached to a local account.
///
/// Always stored and replaced as a whole; there is no way to build one
/// without all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedProfile {
    pub display_name: String,
    pub tag: String,
    pub rank: RankTier,
}

impl LinkedProfile {
    pub fn new(identity: CanonicalIdentity, rank: RankTier) -> Self {
        Self {
            display_name: identity.display_name,
            tag: identity.tag,
            rank,
        }
    }
}

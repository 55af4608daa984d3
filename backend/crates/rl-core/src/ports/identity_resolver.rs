use crate::{CanonicalIdentity, IdentityResolutionError};

use async_trait::async_trait;

/// Resolves a claimed (display name, tag) pair into the canonical identity.
///
/// Failure is fatal to linking: without a canonical identity there is
/// nothing to look a rank up for.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_identity(
        &self,
        display_name: &str,
        tag: &str,
    ) -> Result<CanonicalIdentity, IdentityResolutionError>;
}

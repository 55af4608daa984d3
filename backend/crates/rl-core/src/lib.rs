pub mod error;
pub mod models;
pub mod ports;

pub use error::{CoreError, IdentityResolutionError, Result, StoreError, StoreResult};
pub use models::canonical_identity::{CanonicalIdentity, TAG_SEPARATOR, strip_tag_separator};
pub use models::credential_hash::CredentialHash;
pub use models::link_request::LinkRequest;
pub use models::linked_profile::LinkedProfile;
pub use models::rank_tier::{RankTier, UNRANKED};
pub use models::user_account::UserAccount;
pub use ports::identity_resolver::IdentityResolver;
pub use ports::identity_store::IdentityStore;
pub use ports::rank_resolver::RankResolver;

#[cfg(test)]
mod tests;

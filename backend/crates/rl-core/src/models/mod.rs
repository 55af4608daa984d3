pub mod canonical_identity;
pub mod credential_hash;
pub mod link_request;
pub mod linked_profile;
pub mod rank_tier;
pub mod user_account;

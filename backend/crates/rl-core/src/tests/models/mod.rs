mod canonical_identity;
mod credential_hash;
mod link_request;
mod rank_tier;

pub mod identity_resolver;
pub mod identity_store;
pub mod rank_resolver;

//! Clients for the two upstream authorities used by account linking.
//!
//! The identity client is a hard dependency and reports every fault. The rank
//! client is advisory: its fallible fetch is wrapped so the `RankResolver`
//! contract always answers with a tier.

pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod identity_client;
pub(crate) mod rank_client;


pub use error::{Result as UpstreamResult, UpstreamError};
pub use identity_client::IdentityAuthorityClient;
pub use rank_client::RankAuthorityClient;

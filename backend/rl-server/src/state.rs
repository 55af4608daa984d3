use crate::error::Result as ServerErrorResult;

use rl_auth::{Authenticator, CredentialPolicy};
use rl_config::Config;
use rl_db::UserRepository;
use rl_link::AccountLinker;
use rl_upstream::{IdentityAuthorityClient, RankAuthorityClient};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared by every request handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authenticator: Arc<Authenticator>,
    pub linker: Arc<AccountLinker>,
}

impl AppState {
    /// Wire the store, both authority clients and the services on top of them.
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let store = Arc::new(UserRepository::new(pool.clone()));

        let identity = Arc::new(IdentityAuthorityClient::from_config(&config.identity_api)?);
        let rank = Arc::new(RankAuthorityClient::from_config(&config.rank_api)?);

        let authenticator = Authenticator::new(
            store.clone(),
            CredentialPolicy::from(&config.validation),
        );
        let linker = AccountLinker::new(identity, rank, store);

        Ok(Self {
            pool,
            authenticator: Arc::new(authenticator),
            linker: Arc::new(linker),
        })
    }
}

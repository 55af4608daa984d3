use rl_core::{CredentialHash, UserAccount};
use rl_db::UserRepository;
use rl_link::AccountLinker;
use rl_upstream::{IdentityAuthorityClient, RankAuthorityClient};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::MockServer;

pub const RANK_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    rl_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn seed_user(repo: &UserRepository, username: &str) {
    repo.create(&UserAccount::new(
        username.to_string(),
        CredentialHash::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
    ))
    .await
    .expect("Failed to seed user");
}

/// Wire a linker against two mock authorities and a fresh in-memory store
pub async fn create_linker(
    identity_base: &str,
    rank_server: &MockServer,
) -> (AccountLinker, UserRepository) {
    let repo = UserRepository::new(create_test_pool().await);

    let identity = IdentityAuthorityClient::new(
        identity_base,
        Some(String::from("identity-key")),
        Duration::from_secs(2),
        Duration::from_secs(1),
    )
    .expect("identity client");
    let rank = RankAuthorityClient::new(
        &rank_server.uri(),
        Some(String::from("rank-key")),
        "na",
        RANK_TIMEOUT,
        Duration::from_secs(1),
    )
    .expect("rank client");

    let linker = AccountLinker::new(Arc::new(identity), Arc::new(rank), Arc::new(repo.clone()));
    (linker, repo)
}

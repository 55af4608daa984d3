use rl_auth::{Authenticator, CredentialPolicy};
use rl_db::UserRepository;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
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

pub async fn create_authenticator(policy: CredentialPolicy) -> (Authenticator, UserRepository) {
    let repo = UserRepository::new(create_test_pool().await);
    let auth = Authenticator::new(Arc::new(repo.clone()), policy);
    (auth, repo)
}

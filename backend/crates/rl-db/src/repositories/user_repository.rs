//! User repository - the SQLite-backed identity store.
//!
//! Linking writes go through a single `UPDATE ... RETURNING` statement, so a
//! profile replacement is atomic per username and concurrent links for the
//! same user can never interleave into a mixed profile. SQLite serializes the
//! writers; no application-level locking is involved.

use crate::{DbError, Result as DbErrorResult};

use rl_core::{
    CredentialHash, IdentityStore, LinkedProfile, RankTier, StoreResult, UserAccount,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const USER_COLUMNS: &str = "username, credential_hash, linked_display_name, linked_tag, \
                            linked_rank, created_at, updated_at";

#[derive(Debug, FromRow)]
struct UserRow {
    username: String,
    credential_hash: String,
    linked_display_name: Option<String>,
    linked_tag: Option<String>,
    linked_rank: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let linked_profile = match (r.linked_display_name, r.linked_tag, r.linked_rank) {
            (Some(display_name), Some(tag), Some(rank)) => Some(LinkedProfile {
                display_name,
                tag,
                rank: RankTier::from_label(Some(&rank)),
            }),
            (None, None, None) => None,
            _ => {
                return Err(DbError::CorruptRow {
                    message: format!("Partially linked profile for user {}", r.username),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(UserAccount {
            credential_hash: CredentialHash::new(r.credential_hash),
            linked_profile,
            created_at: timestamp(r.created_at, "users.created_at")?,
            updated_at: timestamp(r.updated_at, "users.updated_at")?,
            username: r.username,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::CorruptRow {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. A taken username maps to `DbError::Duplicate`.
    pub async fn create(&self, account: &UserAccount) -> DbErrorResult<()> {
        let (display_name, tag, rank) = match &account.linked_profile {
            Some(p) => (
                Some(p.display_name.as_str()),
                Some(p.tag.as_str()),
                Some(p.rank.as_str()),
            ),
            None => (None, None, None),
        };

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    username, credential_hash,
                    linked_display_name, linked_tag, linked_rank,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&account.username)
        .bind(account.credential_hash.as_str())
        .bind(display_name)
        .bind(tag)
        .bind(rank)
        .bind(account.created_at.timestamp())
        .bind(account.updated_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::Duplicate {
                    username: account.username.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(DbError::from(e)),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserAccount>> {
        let sql = format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserAccount::try_from).transpose()
    }

    /// Replace the whole linked profile of `username` in one statement.
    ///
    /// Returns the updated account, or `None` if the username is unknown.
    pub async fn replace_linked_profile(
        &self,
        username: &str,
        profile: &LinkedProfile,
    ) -> DbErrorResult<Option<UserAccount>> {
        let sql = format!(
            r#"
                UPDATE users
                SET linked_display_name = ?, linked_tag = ?, linked_rank = ?, updated_at = ?
                WHERE username = ?
                RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(&profile.display_name)
            .bind(&profile.tag)
            .bind(profile.rank.as_str())
            .bind(Utc::now().timestamp())
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserAccount::try_from).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn find_by_key(&self, username: &str) -> StoreResult<Option<UserAccount>> {
        Ok(self.find_by_username(username).await?)
    }

    async fn insert(&self, account: &UserAccount) -> StoreResult<()> {
        Ok(self.create(account).await?)
    }

    async fn find_and_replace(
        &self,
        username: &str,
        profile: &LinkedProfile,
    ) -> StoreResult<Option<UserAccount>> {
        Ok(self.replace_linked_profile(username, profile).await?)
    }
}

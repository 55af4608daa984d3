//! Registration and login over the identity store.

use crate::{AuthError, CredentialPolicy, Result, hash_secret, verify_secret};

use rl_core::{CredentialHash, IdentityStore, UserAccount};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::OnceCell;

const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required";

/// Secret hashed once and verified against when the username is unknown,
/// so both login failure paths cost one Argon2 verification.
const DUMMY_SECRET: &str = "rankline-dummy-secret";

pub struct Authenticator {
    store: Arc<dyn IdentityStore>,
    policy: CredentialPolicy,
    dummy_hash: OnceCell<CredentialHash>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn IdentityStore>, policy: CredentialPolicy) -> Self {
        Self {
            store,
            policy,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Create an account with no linked profile.
    pub async fn register(&self, username: &str, secret: &str) -> Result<()> {
        Self::require_present(username, secret)?;
        self.policy.check(username, secret)?;

        // Cheap pre-check; the insert's unique constraint stays authoritative.
        if self.store.find_by_key(username).await?.is_some() {
            return Err(AuthError::duplicate(username));
        }

        let hash = hash_secret(secret.to_string()).await?;
        let account = UserAccount::new(username.to_string(), hash);
        self.store.insert(&account).await?;

        info!("Registered user {}", username);
        Ok(())
    }

    /// Check credentials and return the stored account.
    ///
    /// Unknown usernames and wrong secrets fail identically.
    pub async fn login(&self, username: &str, secret: &str) -> Result<UserAccount> {
        Self::require_present(username, secret)?;

        let Some(account) = self.store.find_by_key(username).await? else {
            let dummy = self
                .dummy_hash
                .get_or_try_init(|| hash_secret(DUMMY_SECRET.to_string()))
                .await?;
            verify_secret(secret.to_string(), dummy.clone()).await?;
            debug!("Login rejected for unknown user");
            return Err(AuthError::invalid_credentials());
        };

        if !verify_secret(secret.to_string(), account.credential_hash.clone()).await? {
            debug!("Login rejected for {}", username);
            return Err(AuthError::invalid_credentials());
        }

        info!("User {} logged in", username);
        Ok(account)
    }

    fn require_present(username: &str, secret: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(AuthError::validation("username", MISSING_CREDENTIALS_MESSAGE));
        }
        if secret.is_empty() {
            return Err(AuthError::validation("secret", MISSING_CREDENTIALS_MESSAGE));
        }
        Ok(())
    }
}

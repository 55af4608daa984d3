//! Argon2id hashing. Both operations are CPU-bound and run on tokio's
//! blocking pool so they never stall the request workers.

use crate::{AuthError, Result};

use rl_core::CredentialHash;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand_core::OsRng;

/// Hash a secret with a fresh random salt, producing a PHC string
pub async fn hash_secret(secret: String) -> Result<CredentialHash> {
    tokio::task::spawn_blocking(move || hash_blocking(&secret))
        .await
        .map_err(|e| AuthError::hashing(format!("Hashing task failed: {}", e)))?
}

/// Check a secret against a stored hash. `Ok(false)` means mismatch.
pub async fn verify_secret(secret: String, hash: CredentialHash) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_blocking(&secret, &hash))
        .await
        .map_err(|e| AuthError::hashing(format!("Verification task failed: {}", e)))?
}

pub(crate) fn hash_blocking(secret: &str) -> Result<CredentialHash> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| AuthError::hashing(e.to_string()))?
        .to_string();

    Ok(CredentialHash::new(hash))
}

pub(crate) fn verify_blocking(secret: &str, hash: &CredentialHash) -> Result<bool> {
    let parsed = PasswordHash::new(hash.as_str())
        .map_err(|e| AuthError::hashing(format!("Stored hash is unreadable: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

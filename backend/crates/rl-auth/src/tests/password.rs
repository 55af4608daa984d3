use crate::password::{hash_blocking, verify_blocking};
use crate::{AuthError, hash_secret, verify_secret};

use rl_core::CredentialHash;

use googletest::prelude::*;

#[test]
fn given_hash_when_inspected_then_argon2id_phc_string() {
    let hash = hash_blocking("hunter2").unwrap();

    assert_that!(hash.as_str(), starts_with("$argon2id$"));
    assert_that!(hash.as_str(), not(contains_substring("hunter2")));
}

#[test]
fn given_same_secret_when_hashed_twice_then_salts_differ() {
    let first = hash_blocking("hunter2").unwrap();
    let second = hash_blocking("hunter2").unwrap();

    assert_that!(first.as_str(), not(eq(second.as_str())));
}

#[test]
fn given_wrong_secret_when_verified_then_false() {
    let hash = hash_blocking("hunter2").unwrap();

    assert_that!(verify_blocking("hunter3", &hash).unwrap(), eq(false));
}

#[test]
fn given_garbage_hash_when_verified_then_hashing_error() {
    let result = verify_blocking("hunter2", &CredentialHash::new("not-a-phc-string"));

    assert!(matches!(result, Err(AuthError::Hashing { .. })));
}

#[tokio::test]
async fn given_async_api_when_round_tripped_then_verifies() {
    let hash = hash_secret(String::from("correct horse")).await.unwrap();

    let verified = verify_secret(String::from("correct horse"), hash).await.unwrap();

    assert_that!(verified, eq(true));
}

use crate::CredentialHash;

use googletest::prelude::*;

#[test]
fn given_credential_hash_when_debug_formatted_then_hash_is_redacted() {
    let hash = CredentialHash::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA");

    let rendered = format!("{:?}", hash);

    assert_that!(rendered, not(contains_substring("argon2id")));
    assert_that!(rendered, contains_substring("redacted"));
}

#[test]
fn given_credential_hash_when_as_str_then_returns_raw_value() {
    let hash = CredentialHash::new("opaque");

    assert_that!(hash.as_str(), eq("opaque"));
}

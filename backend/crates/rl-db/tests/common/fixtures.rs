use rl_core::{CanonicalIdentity, CredentialHash, LinkedProfile, RankTier, UserAccount};

/// Creates a registered, unlinked account
pub fn create_test_account(username: &str) -> UserAccount {
    UserAccount::new(
        username.to_string(),
        CredentialHash::new(format!("$argon2id$v=19$m=19456,t=2,p=1$test${}", username)),
    )
}

/// Creates a fully populated linked profile
pub fn create_test_profile(display_name: &str, tag: &str, rank: &str) -> LinkedProfile {
    LinkedProfile::new(
        CanonicalIdentity::new(display_name, tag),
        RankTier::from_label(Some(rank)),
    )
}

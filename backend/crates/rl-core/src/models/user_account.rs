//! Local user account - credentials plus an optional linked game profile.

use crate::{CredentialHash, LinkedProfile};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Unique, immutable primary key
    pub username: String,
    pub credential_hash: CredentialHash,
    /// Absent until the first successful link
    pub linked_profile: Option<LinkedProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a freshly registered account with no linked profile
    pub fn new(username: String, credential_hash: CredentialHash) -> Self {
        let now = Utc::now();
        Self {
            username,
            credential_hash,
            linked_profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked_profile.is_some()
    }
}

use crate::LinkedProfileDto;

use rl_core::UserAccount;

use serde::Serialize;

/// Account as returned by `POST /login`. Never carries the credential hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub username: String,
    pub linked_profile: Option<LinkedProfileDto>,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            username: account.username,
            linked_profile: account.linked_profile.map(LinkedProfileDto::from),
            created_at: account.created_at.to_rfc3339(),
            updated_at: account.updated_at.to_rfc3339(),
        }
    }
}

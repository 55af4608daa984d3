use rl_core::LinkedProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProfileDto {
    pub display_name: String,
    pub tag: String,
    pub rank: String,
}

impl From<LinkedProfile> for LinkedProfileDto {
    fn from(profile: LinkedProfile) -> Self {
        Self {
            display_name: profile.display_name,
            tag: profile.tag,
            rank: profile.rank.to_string(),
        }
    }
}

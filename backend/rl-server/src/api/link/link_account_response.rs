use crate::LinkedProfileDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LinkAccountResponse {
    pub message: String,
    #[serde(flatten)]
    pub profile: LinkedProfileDto,
}

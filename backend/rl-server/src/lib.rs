pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_log;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        account_response::AccountResponse,
        auth::{login, register},
        credentials_request::CredentialsRequest,
        message_response::MessageResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    link::{
        link::link_account, link_account_query::LinkAccountQuery,
        link_account_response::LinkAccountResponse, linked_profile_dto::LinkedProfileDto,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

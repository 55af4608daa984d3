pub mod account_response;
pub mod auth;
pub mod credentials_request;
pub mod message_response;

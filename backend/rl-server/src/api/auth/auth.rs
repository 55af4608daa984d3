//! Registration and login handlers

use crate::{AccountResponse, ApiResult, AppState, CredentialsRequest, MessageResponse};

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /register
///
/// Create an account. Responds 201 with a confirmation message.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = body?;

    state
        .authenticator
        .register(req.username.trim(), &req.secret)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: String::from("Account created! Please log in."),
        }),
    ))
}

/// POST /login
///
/// Verify credentials and return the account without its hash.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<AccountResponse>> {
    let Json(req) = body?;

    let account = state
        .authenticator
        .login(req.username.trim(), &req.secret)
        .await?;

    Ok(Json(AccountResponse::from(account)))
}

use crate::{ApiResult, AppState, LinkAccountQuery, LinkAccountResponse, LinkedProfileDto};

use rl_core::LinkRequest;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /link-account
///
/// Resolve the claimed game identity, look up its rank, and attach both to
/// the named user.
pub async fn link_account(
    State(state): State<AppState>,
    query: Result<Query<LinkAccountQuery>, QueryRejection>,
) -> ApiResult<Json<LinkAccountResponse>> {
    let Query(q) = query?;

    let profile = state
        .linker
        .link_account(LinkRequest::new(q.username, q.display_name, q.tag))
        .await?;

    Ok(Json(LinkAccountResponse {
        message: String::from("Account linked successfully"),
        profile: LinkedProfileDto::from(profile),
    }))
}

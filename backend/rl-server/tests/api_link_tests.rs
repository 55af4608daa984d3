//! Integration tests for GET /link-account
mod common;

use crate::common::{Upstreams, create_test_app, get, post_json, register, send};

use axum::http::StatusCode;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_link_account_returns_canonical_profile() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(
            ResponseTemplate::new(200).set_body_json(json!({ "currentTierLabel": "Diamond 2" })),
        )
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    let (status, json) = send(
        &app,
        get("/link-account?username=alice&displayName=Jett&tag=NA1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Account linked successfully");
    assert_eq!(json["displayName"], "Jett");
    assert_eq!(json["tag"], "NA1");
    assert_eq!(json["rank"], "Diamond 2");
}

#[tokio::test]
async fn test_link_account_trims_username() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(ResponseTemplate::new(200).set_body_json(json!({})))
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    let (login_status, _) = send(
        &app,
        post_json("/login", json!({ "username": " alice ", "secret": "hunter2" })),
    )
    .await;
    let (status, json) = send(
        &app,
        get("/link-account?username=%20alice%20&displayName=Jett&tag=NA1"),
    )
    .await;

    assert_eq!(login_status, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["displayName"], "Jett");
}

#[tokio::test]
async fn test_link_account_encoded_separator_in_tag() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(ResponseTemplate::new(200).set_body_json(json!({})))
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    let (status, json) = send(
        &app,
        get("/link-account?username=alice&displayName=Jett&tag=%23NA1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tag"], "NA1");
    assert_eq!(json["rank"], "Unranked");
}

#[tokio::test]
async fn test_link_account_then_login_shows_profile() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(
            ResponseTemplate::new(200).set_body_json(json!({ "currentTierLabel": "Gold 3" })),
        )
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    send(
        &app,
        get("/link-account?username=alice&displayName=Jett&tag=NA1"),
    )
    .await;
    let (status, json) = send(
        &app,
        post_json("/login", json!({ "username": "alice", "secret": "hunter2" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["linkedProfile"],
        json!({ "displayName": "Jett", "tag": "NA1", "rank": "Gold 3" })
    );
}

#[tokio::test]
async fn test_link_account_missing_tag_returns_400() {
    let upstreams = Upstreams::start().await;
    let (app, _) = create_test_app(&upstreams).await;

    let (status, json) = send(&app, get("/link-account?username=alice&displayName=Jett")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Display name or tag is missing");
    assert!(upstreams.identity.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_link_account_unknown_user_returns_404() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(ResponseTemplate::new(200).set_body_json(json!({})))
        .await;
    let (app, _) = create_test_app(&upstreams).await;

    let (status, json) = send(
        &app,
        get("/link-account?username=ghost&displayName=Jett&tag=NA1"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "User not found");
}

#[tokio::test]
async fn test_link_account_identity_rejection_returns_500() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/identity/Nobody/000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": { "message": "Data not found", "status_code": 404 }
        })))
        .mount(&upstreams.identity)
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    let (status, json) = send(
        &app,
        get("/link-account?username=alice&displayName=Nobody&tag=000"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "IDENTITY_RESOLUTION_FAILED");
    assert!(json["error"].as_str().unwrap().contains("Data not found"));
}

#[tokio::test]
async fn test_link_account_rank_outage_links_unranked() {
    let upstreams = Upstreams::start().await;
    upstreams.identity_resolves("Jett", "NA1").await;
    upstreams
        .rank_answers(ResponseTemplate::new(503))
        .await;
    let (app, _) = create_test_app(&upstreams).await;
    register(&app, "alice", "hunter2").await;

    let (status, json) = send(
        &app,
        get("/link-account?username=alice&displayName=Jett&tag=NA1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rank"], "Unranked");
}

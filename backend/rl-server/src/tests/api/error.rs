use crate::ApiError;

use rl_auth::AuthError;
use rl_core::StoreError;
use rl_link::LinkError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "Display name or tag is missing".into(),
        field: Some("displayName".into()),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "displayName");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, json) = body_json(ApiError::Internal {
        message: "disk I/O error at users.db".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("users.db"));
}

#[tokio::test]
async fn test_identity_resolution_returns_500_with_upstream_message() {
    let (status, json) = body_json(ApiError::from(LinkError::IdentityResolution {
        message: "upstream returned 404 Not Found: Data not found".into(),
        location: ErrorLocation::from(Location::caller()),
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "IDENTITY_RESOLUTION_FAILED");
    assert_eq!(json["error"], "upstream returned 404 Not Found: Data not found");
}

#[tokio::test]
async fn test_invalid_credentials_uses_shared_message() {
    let (status, json) = body_json(ApiError::from(AuthError::invalid_credentials())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_duplicate_maps_to_400() {
    let (status, json) = body_json(ApiError::from(AuthError::duplicate("alice"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_USERNAME");
    assert_eq!(json["error"], "Username already taken");
}

#[tokio::test]
async fn test_link_store_error_maps_to_internal() {
    let err = LinkError::from(StoreError::unavailable("Database operation failed"));

    let (status, json) = body_json(ApiError::from(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_not_found_link_error_maps_to_404() {
    let (status, json) = body_json(ApiError::from(LinkError::not_found("ghost"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
}

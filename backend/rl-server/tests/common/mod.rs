#![allow(dead_code)]

//! Test infrastructure for rl-server API tests

use rl_config::Config;
use rl_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    rl_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Mock identity and rank authorities
pub struct Upstreams {
    pub identity: MockServer,
    pub rank: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            identity: MockServer::start().await,
            rank: MockServer::start().await,
        }
    }

    pub async fn identity_resolves(&self, display_name: &str, tag: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/identity/{}/{}", display_name, tag)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "displayName": display_name,
                "tag": tag
            })))
            .mount(&self.identity)
            .await;
    }

    pub async fn rank_answers(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .respond_with(response)
            .mount(&self.rank)
            .await;
    }
}

/// Build AppState wired to the mock authorities
pub async fn create_test_app_state(upstreams: &Upstreams) -> AppState {
    let mut config = Config::default();
    config.identity_api.base_url = upstreams.identity.uri();
    config.identity_api.api_key = Some(String::from("identity-key"));
    config.identity_api.timeout_secs = 2;
    config.identity_api.connect_timeout_secs = 1;
    config.rank_api.base_url = upstreams.rank.uri();
    config.rank_api.api_key = Some(String::from("rank-key"));
    config.rank_api.timeout_secs = 1;
    config.rank_api.connect_timeout_secs = 1;

    AppState::from_config(create_test_pool().await, &config).expect("Failed to build app state")
}

pub async fn create_test_app(upstreams: &Upstreams) -> (Router, AppState) {
    let state = create_test_app_state(upstreams).await;
    (build_router(state.clone()), state)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn register(app: &Router, username: &str, secret: &str) {
    let (status, _) = send(
        app,
        post_json("/register", json!({ "username": username, "secret": secret })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

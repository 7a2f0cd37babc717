#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shiftboard_api::app::build_app;
use shiftboard_api::config::ServerConfig;
use shiftboard_api::state::AppState;
use shiftboard_db::{InMemoryNurseStore, NurseStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store.
///
/// Goes through the same `build_app` the binary uses, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<dyn NurseStore>) -> Router {
    build_app(AppState::new(store, test_config()))
}

/// A fresh, empty in-memory store.
pub fn empty_store() -> Arc<InMemoryNurseStore> {
    Arc::new(InMemoryNurseStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

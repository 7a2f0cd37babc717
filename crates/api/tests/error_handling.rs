//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use http_body_util::BodyExt;
use shiftboard_api::error::AppError;
use shiftboard_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Helper: run axum's JSON extractor over a raw body and return its rejection.
async fn json_rejection(content_type: &str, body: &'static str) -> JsonRejection {
    let request = Request::builder()
        .header("content-type", content_type)
        .body(axum::body::Body::from(body))
        .unwrap();
    match Json::<serde_json::Map<String, serde_json::Value>>::from_request(request, &()).await {
        Ok(_) => panic!("expected the extractor to reject {body:?}"),
        Err(rejection) => rejection,
    }
}

#[tokio::test]
async fn decode_error_returns_400() {
    let err = AppError::Decode("missing field `role`".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DECODE_ERROR");
    assert_eq!(json["error"], "missing field `role`");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn store_unavailable_returns_503_and_sanitizes_message() {
    let err = AppError::from(CoreError::StoreUnavailable("db at 10.0.0.5 down".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json.to_string().contains("10.0.0.5"));
}

#[tokio::test]
async fn unsupported_media_type_returns_415() {
    let err = AppError::UnsupportedMediaType(
        "Expected request with `Content-Type: application/json`".into(),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
}

// ---------------------------------------------------------------------------
// JsonRejection classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn syntax_rejection_becomes_decode_error() {
    let rejection = json_rejection("application/json", "{").await;
    assert_matches!(AppError::from(rejection), AppError::Decode(_));
}

#[tokio::test]
async fn data_rejection_becomes_decode_error() {
    let rejection = json_rejection("application/json", "[1, 2]").await;
    assert_matches!(AppError::from(rejection), AppError::Decode(_));
}

#[tokio::test]
async fn missing_content_type_becomes_unsupported_media_type() {
    let rejection = json_rejection("text/plain", "{}").await;
    assert_matches!(AppError::from(rejection), AppError::UnsupportedMediaType(_));
}

//! Router-level tests for the validation branch of `POST /extract`.
//!
//! These drive the real router in-process with `tower::ServiceExt::oneshot`.
//! Every request here is rejected before the renderer runs, so the tests
//! need neither libpdfium nor network access. The full success path is
//! covered by the env-gated tests in `tests/e2e.rs`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http_body_util::BodyExt;
use invoice2json::{router, AppState, ExtractionConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Router whose upstream URL points nowhere; fine for requests that fail
/// validation before any network call.
fn test_app() -> Router {
    let config = ExtractionConfig::builder()
        .api_key("sk-test")
        .api_url("http://127.0.0.1:9/unreachable")
        .build()
        .unwrap();
    router(Arc::new(AppState::new(config).unwrap()))
}

async fn post_extract(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/extract")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, parsed)
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsupported_extension_is_rejected_with_400() {
    let (status, body) = post_extract(
        test_app(),
        json!({"data": STANDARD.encode(b"%PDF"), "ext": "docx"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        json!("Unsupported file extension. Allowed extensions: pdf.")
    );
}

#[tokio::test]
async fn unsupported_extension_wins_regardless_of_data() {
    // Even garbage data must produce the extension error, not the base64 one.
    let (status, body) = post_extract(
        test_app(),
        json!({"data": "!!! definitely not base64 !!!", "ext": "png"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        json!("Unsupported file extension. Allowed extensions: pdf.")
    );
}

#[tokio::test]
async fn invalid_base64_is_rejected_with_400() {
    let (status, body) = post_extract(
        test_app(),
        json!({"data": "this is not base64!", "ext": "pdf"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], json!("Invalid base64-encoded file data."));
}

#[tokio::test]
async fn dotted_uppercase_extension_is_accepted_past_validation() {
    // ".PDF" must normalise to "pdf"; with empty decoded bytes the request
    // then fails in the renderer (500), not in validation (400).
    let (status, body) = post_extract(test_app(), json!({"data": "", "ext": ".PDF"})).await;
    assert_ne!(status, StatusCode::BAD_REQUEST, "body: {body}");
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let (status, _) = post_extract(test_app(), json!({"data": "aGk="})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

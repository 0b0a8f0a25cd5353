#![allow(clippy::unwrap_used)]
//! Translation client tests against a stub DeepLX endpoint.

mod common;

use axum::http::StatusCode;
use common::{StubServer, unreachable_url};
use deeplx_cli::translation::{TranslateError, TranslationClient};
use serde_json::json;

#[tokio::test]
async fn test_translate_returns_data() {
    let stub = StubServer::ok(json!({"code": 200, "id": 1, "message": "", "data": "你好"}));
    let client = TranslationClient::new(stub.url.clone());

    let translated = client.translate("hello", "auto", "ZH").await.unwrap();

    assert_eq!(translated, "你好");
    assert_eq!(
        stub.requests(),
        vec![json!({"text": "hello", "source_lang": "auto", "target_lang": "ZH"})]
    );
}

#[tokio::test]
async fn test_translate_api_error_carries_code_and_message() {
    let stub = StubServer::ok(json!({"code": 503, "message": "quota exceeded", "data": ""}));
    let client = TranslationClient::new(stub.url.clone());

    let err = client.translate("hello", "auto", "ZH").await.unwrap_err();

    assert!(matches!(err, TranslateError::Api { code: 503, .. }));
    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("quota exceeded"));
}

#[tokio::test]
async fn test_translate_http_status_error_carries_body() {
    let stub = StubServer::start(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string());
    let client = TranslationClient::new(stub.url.clone());

    let err = client.translate("hello", "auto", "ZH").await.unwrap_err();

    match err {
        TranslateError::Status { status, ref body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_translate_malformed_body() {
    let stub = StubServer::start(StatusCode::OK, "not json".to_string());
    let client = TranslationClient::new(stub.url.clone());

    let err = client.translate("hello", "auto", "ZH").await.unwrap_err();

    assert!(matches!(err, TranslateError::Decode { .. }));
}

#[tokio::test]
async fn test_translate_unreachable_endpoint() {
    let client = TranslationClient::new(unreachable_url());

    let err = client.translate("hello", "auto", "ZH").await.unwrap_err();

    assert!(matches!(err, TranslateError::Transport { .. }));
}

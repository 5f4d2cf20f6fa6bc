//! Unit tests for the Supabase backend against a mock HTTP server

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

use mp_core::domain::{EmailDispatchPayload, VerificationCode};
use mp_core::errors::BackendError;
use mp_core::services::VerificationBackend;
use mp_shared::BackendConfig;

use crate::backend::SupabaseBackend;

const KEY: &str = "anon-key";

fn backend_for(server: &MockServer) -> SupabaseBackend {
    SupabaseBackend::new(BackendConfig::new(server.base_url(), KEY)).unwrap()
}

fn payload() -> EmailDispatchPayload {
    EmailDispatchPayload::verification("user@example.com", VerificationCode::new("123456"))
}

#[test]
fn test_configuration_completeness() {
    let configured = SupabaseBackend::new(BackendConfig::new("https://x.supabase.co", KEY)).unwrap();
    assert!(configured.is_configured());

    let unconfigured = SupabaseBackend::new(BackendConfig::new("", KEY)).unwrap();
    assert!(!unconfigured.is_configured());
}

#[tokio::test]
async fn test_generate_code_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/rpc/generate_verification_code")
                .header("apikey", KEY)
                .header("authorization", "Bearer anon-key")
                .json_body(json!({ "email": "user@example.com" }));
            then.status(200).json_body(json!("123456"));
        })
        .await;

    let code = backend_for(&server)
        .generate_code("user@example.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(code, VerificationCode::new("123456"));
}

#[tokio::test]
async fn test_generate_code_remote_error_uses_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/rpc/generate_verification_code");
            then.status(404).json_body(json!({
                "code": "PGRST202",
                "message": "Could not find the function public.generate_verification_code",
                "details": null,
                "hint": null
            }));
        })
        .await;

    let error = backend_for(&server)
        .generate_code("user@example.com")
        .await
        .unwrap_err();

    assert_eq!(
        error,
        BackendError::remote("Could not find the function public.generate_verification_code")
    );
}

#[tokio::test]
async fn test_generate_code_error_without_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/rpc/generate_verification_code");
            then.status(503);
        })
        .await;

    let error = backend_for(&server)
        .generate_code("user@example.com")
        .await
        .unwrap_err();

    assert_eq!(error, BackendError::remote("HTTP 503 Service Unavailable"));
}

#[tokio::test]
async fn test_generate_code_malformed_body_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/rpc/generate_verification_code");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let error = backend_for(&server)
        .generate_code("user@example.com")
        .await
        .unwrap_err();

    assert!(matches!(error, BackendError::Transport { .. }));
}

#[tokio::test]
async fn test_send_email_success_returns_code() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/functions/v1/send-verification-email")
                .header("apikey", KEY)
                .json_body(json!({
                    "email": "user@example.com",
                    "code": "123456",
                    "type": "verification"
                }));
            then.status(200)
                .json_body(json!({ "success": true, "code": "123456" }));
        })
        .await;

    let data = backend_for(&server)
        .send_verification_email(&payload())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(data.code, Some(json!("123456")));
}

#[tokio::test]
async fn test_send_email_empty_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/functions/v1/send-verification-email");
            then.status(200);
        })
        .await;

    let data = backend_for(&server)
        .send_verification_email(&payload())
        .await
        .unwrap();

    assert_eq!(data.code, None);
}

#[tokio::test]
async fn test_send_email_remote_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/functions/v1/send-verification-email")
                .json_body_partial(r#"{ "email": "user@example.com" }"#);
            then.status(500)
                .json_body(json!({ "error": "Resend API key not configured" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/functions/v1/send-verification-email")
                .json_body_partial(r#"{ "email": "other@example.com" }"#);
            then.status(502).body("Bad Gateway");
        })
        .await;

    let backend = backend_for(&server);

    let error = backend.send_verification_email(&payload()).await.unwrap_err();
    assert_eq!(error, BackendError::remote("Resend API key not configured"));

    let other =
        EmailDispatchPayload::verification("other@example.com", VerificationCode::new("654321"));
    let error = backend.send_verification_email(&other).await.unwrap_err();
    assert_eq!(
        error,
        BackendError::remote("Edge Function returned a non-2xx status code")
    );
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/rpc/generate_verification_code");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!("123456"));
        })
        .await;

    let mut config = BackendConfig::new(server.base_url(), KEY);
    config.timeout_secs = 1;
    let backend = SupabaseBackend::new(config).unwrap();

    let error = backend.generate_code("user@example.com").await.unwrap_err();

    assert!(matches!(error, BackendError::Transport { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let backend =
        SupabaseBackend::new(BackendConfig::new("http://127.0.0.1:1", KEY)).unwrap();

    let error = backend.generate_code("user@example.com").await.unwrap_err();

    assert!(matches!(error, BackendError::Transport { .. }));
}

//! Integration tests for health, documentation, fallback and CORS handling

use std::sync::Arc;

use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web};
use serde_json::Value;

use mp_api::{create_app, AppState};
use mp_core::services::dispatch::mock::MockBackend;
use mp_core::services::{DispatchService, DispatchServiceConfig};
use mp_shared::CorsConfig;

fn state(backend: MockBackend) -> web::Data<AppState<MockBackend>> {
    let service = DispatchService::new(Arc::new(backend), DispatchServiceConfig::default());
    web::Data::new(AppState::new(Arc::new(service)))
}

#[actix_web::test]
async fn test_health_reports_backend_configuration() {
    for (backend, expected_status, configured) in [
        (MockBackend::succeeding("1"), "healthy", true),
        (MockBackend::unconfigured(), "degraded", false),
    ] {
        let app = test::init_service(create_app(state(backend), &CorsConfig::default())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], expected_status);
        assert_eq!(body["backend_configured"], configured);
        assert_eq!(body["service"], "mailprobe-api");
    }
}

#[actix_web::test]
async fn test_api_documentation_lists_endpoint() {
    let app = test::init_service(create_app(
        state(MockBackend::succeeding("1")),
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/v1/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["endpoints"]["verification"]["test_email"]["path"],
        "/api/v1/verification/test-email"
    );
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(
        state(MockBackend::succeeding("1")),
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

async fn preflight(cors: CorsConfig, origin: &str) -> Option<String> {
    let app = test::init_service(create_app(state(MockBackend::succeeding("1")), &cors)).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/v1/verification/test-email")
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "apikey, content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    resp.headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

#[actix_web::test]
async fn test_preflight_allows_any_origin_outside_production() {
    let allowed = preflight(CorsConfig::default(), "http://localhost:3000").await;

    assert_eq!(allowed.as_deref(), Some("*"));
}

#[actix_web::test]
async fn test_preflight_restricted_to_configured_origins() {
    let cors = CorsConfig {
        allow_any_origin: false,
        allowed_origins: vec!["https://app.example.com".to_string()],
        max_age: 600,
    };

    let allowed = preflight(cors.clone(), "https://app.example.com").await;
    assert_eq!(allowed.as_deref(), Some("https://app.example.com"));

    let rejected = preflight(cors, "https://evil.example.com").await;
    assert_eq!(rejected, None);
}

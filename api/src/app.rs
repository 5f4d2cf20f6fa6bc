//! Application factory
//!
//! Builds the Actix-web application around an already-constructed
//! `AppState`, so the server and the integration tests share one route table.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use mp_core::services::VerificationBackend;
use mp_shared::CorsConfig;

use crate::middleware::cors::create_cors;
use crate::routes::health::health_check;
use crate::routes::verification::{test_email_verification, AppState};

/// Create and configure the application with all routes and middleware
pub fn create_app<B>(
    app_state: web::Data<AppState<B>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    B: VerificationBackend + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<B>))
        .service(
            web::scope("/api/v1")
                .route(
                    "/verification/test-email",
                    web::post().to(test_email_verification::<B>),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .route(
            "/functions/v1/test-email-verification",
            web::post().to(test_email_verification::<B>),
        )
        .default_service(web::route().to(not_found))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "MailProbe API v1",
        "endpoints": {
            "health": "/health",
            "verification": {
                "test_email": {
                    "path": "/api/v1/verification/test-email",
                    "alias": "/functions/v1/test-email-verification",
                    "method": "POST",
                    "description": "Generate a verification code and send it by email",
                    "request_body": {
                        "email": "string (required, non-empty)"
                    },
                    "responses": {
                        "200": "Email accepted; code echoed outside production",
                        "400": "Email is required",
                        "500": "Backend configuration missing, code generation or email dispatch failed"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

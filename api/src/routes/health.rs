use actix_web::{web, HttpResponse};

use mp_core::services::VerificationBackend;
use mp_shared::types::{HealthResponse, HealthStatus};

use super::verification::AppState;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "mailprobe-api";

/// Handler for GET /health
///
/// Reports `degraded` when the backend URL or key is missing; the process
/// is still up and answers dispatch requests with a configuration error.
pub async fn health_check<B>(state: web::Data<AppState<B>>) -> HttpResponse
where
    B: VerificationBackend + 'static,
{
    let backend_configured = state.dispatch_service.is_backend_configured();
    let status = if backend_configured {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_configured,
        timestamp: chrono::Utc::now(),
    })
}

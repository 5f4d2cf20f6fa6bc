//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients call the dispatch endpoint directly, so preflight
//! requests must succeed for the headers Supabase clients send. Outside
//! production any origin is accepted; production only accepts the origins
//! listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use mp_shared::CorsConfig;

/// Headers sent by Supabase JS clients alongside the request body
fn client_headers() -> Vec<header::HeaderName> {
    vec![
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        header::HeaderName::from_static("apikey"),
        header::HeaderName::from_static("x-client-info"),
    ]
}

/// Creates a CORS middleware instance from the loaded configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(client_headers())
        .max_age(config.max_age);

    if config.allow_any_origin {
        tracing::debug!("Configuring permissive CORS");
        return cors.allow_any_origin().send_wildcard();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}

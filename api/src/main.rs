use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use mp_api::{create_app, telemetry, AppState};
use mp_core::services::{DispatchService, DispatchServiceConfig, VerificationBackend};
use mp_infra::config::{load_env_file, log_env_file};
use mp_infra::{load_config, SupabaseBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_env_file();
    telemetry::init_tracing();
    log_env_file(&env_file);

    let config = load_config().context("Failed to load configuration")?;

    info!(
        "Starting MailProbe API Server ({} environment)",
        config.environment
    );

    let backend = Arc::new(
        SupabaseBackend::new(config.backend.clone()).context("Failed to build backend client")?,
    );
    if !backend.is_configured() {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY is not set, dispatch requests will fail");
    }

    let dispatch_config = DispatchServiceConfig::for_environment(config.environment);
    if dispatch_config.expose_code {
        info!("Verification codes will be echoed in responses");
    }

    let state = web::Data::new(AppState::new(Arc::new(DispatchService::new(
        backend,
        dispatch_config,
    ))));
    let cors = config.cors.clone();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

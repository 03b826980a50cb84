use mp_ai::AiGateway;
use mp_config::Config;
use mp_server::error::ServerError;
use mp_server::{AppState, SessionSettings, build_router, logger};
use mp_store::MemoryStore;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path.as_deref())?;

    info!("Starting mp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = if config.store.seed_demo_data {
        info!("Seeding demo data");
        MemoryStore::seeded()?
    } else {
        MemoryStore::new()
    };

    let ai = AiGateway::from_config(&config.ai, &config.retry, &config.circuit_breaker)?;
    if ai.is_enabled() {
        info!("AI gateway enabled");
    }

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    let session = SessionSettings {
        require_session: config.auth.require_session,
        default_user_id: config.auth.default_user_uuid()?,
    };
    if !session.require_session {
        warn!(
            "Sessions optional - requests without a session act as {}",
            session.default_user_id
        );
    }

    let app_state = AppState {
        store,
        ai: Arc::new(ai),
        session,
        validation: config.validation.clone(),
        metrics: Some(metrics),
    };

    let app = build_router(app_state, &config.server.cors_allowed_origins);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(grace))
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C. In-flight requests get `grace` to finish before the
/// process exits.
async fn shutdown_signal(grace: Duration) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        warn!("Shutdown grace period of {:?} elapsed, exiting", grace);
        std::process::exit(0);
    });
}

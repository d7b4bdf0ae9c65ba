//! NRP Engine Binary
//!
//! Serves the marketplace deactivation calculation over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin nrp-engine
//! ```
//!
//! # Environment Variables
//!
//! - `NRP_CONFIG`: Config file path (default: config.yaml; built-in defaults if absent)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`
//!
//! Any `${VAR}` or `${VAR:-default}` in the config file is read from the
//! environment, including variables loaded from `.env`.

use std::net::SocketAddr;

use anyhow::Context;
use nrp_engine::application::use_cases::CalculateNrpUseCase;
use nrp_engine::application::validation::RequestValidator;
use nrp_engine::config::{Config, load_config};
use nrp_engine::infrastructure::http::{AppState, create_router};
use nrp_engine::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_config(None).context("Failed to load configuration")?;
    init_tracing(&config.observability.logging).context("Failed to initialize tracing")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting NRP engine");
    log_config(&config);

    let use_case = CalculateNrpUseCase::new(
        config.defaults.clone(),
        RequestValidator::new(config.limits.max_marketplaces),
    );
    let state = AppState::new(use_case, env!("CARGO_PKG_VERSION"));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .context("Invalid bind address")?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/nrp/defaults");
    tracing::info!("  POST /api/v1/nrp/calculate");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("NRP engine stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

fn log_config(config: &Config) {
    match &config.loaded_from {
        Some(path) => tracing::info!(path = %path.display(), "Configuration loaded"),
        None => tracing::warn!("No configuration file found, using built-in defaults"),
    }
    tracing::info!(
        mode = %config.defaults.replenishment_mode,
        vendor_lead_time_days = %config.defaults.vendor_lead_time_days,
        cross_border_unit_cost = %config.defaults.cross_border_unit_cost,
        max_healthy_coverage_weeks = %config.defaults.max_healthy_coverage_weeks,
        max_marketplaces = config.limits.max_marketplaces,
        "Default parameters"
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}

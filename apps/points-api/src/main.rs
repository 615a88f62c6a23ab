//! # Points API Server
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load config (defaults → TOML file → POINTS_* env)                  │
//! │  2. Init tracing                                                       │
//! │  3. Create in-memory ReceiptService                                    │
//! │  4. Bind listener, serve until Ctrl+C / SIGTERM                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use points_api::config::ApiConfig;
use points_api::{create_router, init_tracing, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::load(None)?;

    init_tracing(&config.logging.filter);

    info!(
        addr = %config.server.bind_address(),
        strict_validation = config.scoring.strict_validation,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let bind_addr = config.server.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Points API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

//! # points-api
//!
//! HTTP front end for the receipt points service.
//!
//! ## Module Organization
//! ```text
//! points_api/
//! ├── lib.rs          ◄─── You are here (shared state, tracing setup)
//! ├── config.rs       ◄─── Defaults, TOML file, POINTS_* overrides
//! ├── routes.rs       ◄─── Axum router and handlers
//! └── error.rs        ◄─── JSON error bodies and status mapping
//! ```
//!
//! ## Request Path
//! ```text
//! ┌──────────┐     ┌──────────────┐     ┌─────────────────┐     ┌───────────┐
//! │  Client  │────►│  TraceLayer  │────►│  handler        │────►│  Receipt  │
//! │          │◄────│  (tower-http)│◄────│  (routes.rs)    │◄────│  Service  │
//! └──────────┘     └──────────────┘     └─────────────────┘     └───────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use points_store::ReceiptService;
use tracing_subscriber::EnvFilter;

use config::ApiConfig;

pub use routes::create_router;

/// State shared by every handler.
///
/// Cloning is cheap; all clones point at the same store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<ReceiptService>,
}

impl AppState {
    pub fn new(service: ReceiptService) -> Self {
        AppState {
            service: Arc::new(service),
        }
    }

    /// Builds a fresh, empty service with the configured scoring mode.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(ReceiptService::new().strict(config.scoring.strict_validation))
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

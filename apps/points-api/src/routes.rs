//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process        ──► process_receipt ──► {"id": ...}     │
//! │  GET  /receipts/{id}/points    ──► get_points      ──► {"points": N}   │
//! │  GET  /receipts/{id}           ──► get_points      ──► {"points": N}   │
//! │  GET  /health                  ──► health          ──► {"status": ...} │
//! │  known path, other method      ──► method_not_allowed ──► 405          │
//! │  *                             ──► not_found       ──► 404             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers stay thin: decode, call [`ReceiptService`](points_store::ReceiptService),
//! encode. Service calls are synchronous and short, so they run inline on the
//! async worker.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use points_core::Receipt;
use points_store::ReceiptId;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{ApiError, ErrorCode};
use crate::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body of a successful points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/receipts/{id}", get(get_points))
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Registers a receipt and returns its identifier.
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;
    let retailer = receipt.retailer.clone();

    let id = state.service.register_receipt(receipt)?;
    info!(id = %id, retailer = %retailer, "Receipt processed");

    Ok(Json(ProcessResponse { id }))
}

/// Returns the points for a registered receipt.
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.service.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.service.receipt_count(),
    })
}

async fn not_found() -> ApiError {
    ApiError::new(ErrorCode::NotFound, "No such route")
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        ErrorCode::MethodNotAllowed,
        format!("{} is not supported on {}", method, uri.path()),
    )
}

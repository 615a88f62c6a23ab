//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (points-core, strict mode only)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← NotFound for unknown identifiers           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← 404 / 400                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use points_core::ValidationError;
use thiserror::Error;

use crate::id::ReceiptId;

/// Receipt store and service errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No receipt was ever registered under this identifier.
    #[error("Receipt not found: {0}")]
    NotFound(ReceiptId),

    /// The receipt failed strict validation and was not stored.
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given identifier.
    pub fn not_found(id: impl Into<ReceiptId>) -> Self {
        StoreError::NotFound(id.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! # Receipt Service
//!
//! The two boundary operations the request layer calls.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  register_receipt(receipt)                                             │
//! │       │                                                                 │
//! │       ├── strict? ── validate_receipt ──► Err(Validation)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.put(receipt) ──► ReceiptId                                      │
//! │                                                                         │
//! │  get_points(id)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get(id) ──► Err(NotFound)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate(&receipt) ──► points                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use points_core::validation::validate_receipt;
use points_core::{calculate, Receipt};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::id::{IdGenerator, ReceiptId};
use crate::store::ReceiptStore;

/// Registers receipts and scores them on demand.
#[derive(Debug, Default)]
pub struct ReceiptService {
    store: ReceiptStore,
    strict_validation: bool,
}

impl ReceiptService {
    /// Creates a lenient service backed by a fresh store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: ReceiptStore) -> Self {
        ReceiptService {
            store,
            strict_validation: false,
        }
    }

    /// Creates a service over a fresh store with a custom identifier source.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_store(ReceiptStore::with_generator(ids))
    }

    /// Rejects malformed receipts at registration instead of scoring the
    /// affected rules as zero.
    pub fn strict(mut self, strict_validation: bool) -> Self {
        self.strict_validation = strict_validation;
        self
    }

    /// Returns true if registration validates receipts.
    pub fn is_strict(&self) -> bool {
        self.strict_validation
    }

    /// Stores a receipt and returns its new identifier.
    ///
    /// ## Errors
    /// - `StoreError::Validation` if strict validation is on and a field is
    ///   malformed. Never fails otherwise.
    pub fn register_receipt(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        if self.strict_validation {
            if let Err(e) = validate_receipt(&receipt) {
                warn!(retailer = %receipt.retailer, error = %e, "Rejected receipt");
                return Err(e.into());
            }
        }

        Ok(self.store.put(receipt))
    }

    /// Computes the points for a registered receipt.
    ///
    /// ## Errors
    /// - `StoreError::NotFound` if `id` was never returned by
    ///   [`register_receipt`](Self::register_receipt).
    pub fn get_points(&self, id: &str) -> StoreResult<i64> {
        let receipt = self.store.get(id).inspect_err(|_| {
            debug!(id = %id, "Points requested for unknown receipt");
        })?;

        let points = calculate(&receipt);
        debug!(id = %id, points, "Computed points");
        Ok(points)
    }

    /// Number of registered receipts.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

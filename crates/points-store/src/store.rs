//! # Receipt Store
//!
//! In-memory, write-once map from identifier to receipt.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Store Operations                             │
//! │                                                                         │
//! │  Caller                 Operation            Lock                       │
//! │  ──────                 ─────────            ────                       │
//! │                                                                         │
//! │  POST /receipts ──────► put(receipt) ──────► write: insert new entry   │
//! │                                                                         │
//! │  GET  /receipts/{id} ─► get(id) ───────────► read: clone entry         │
//! │                                                                         │
//! │  NOTE: One RwLock guards the whole map. A put that has returned is     │
//! │        visible to every get issued after it.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are never updated or removed, so a lock poisoned by a panicking
//! writer still guards a consistent map; it is recovered rather than
//! propagated.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use points_core::Receipt;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, ReceiptId, UuidGenerator};

/// Registered receipts keyed by identifier.
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
    ids: Box<dyn IdGenerator>,
}

impl ReceiptStore {
    /// Creates an empty store that hands out UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator)
    }

    /// Creates an empty store with a custom identifier source.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
        }
    }

    /// Stores a receipt under a fresh identifier and returns the identifier.
    ///
    /// Registering an equal receipt twice creates two entries.
    pub fn put(&self, receipt: Receipt) -> ReceiptId {
        let id = self.ids.next_id();

        let previous = self.write().insert(id.clone(), receipt);
        debug_assert!(previous.is_none(), "identifier {} handed out twice", id);

        debug!(id = %id, "Stored receipt");
        id
    }

    /// Returns a copy of the receipt stored under `id`.
    pub fn get(&self, id: &str) -> StoreResult<Receipt> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Receipt>> {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Receipt>> {
        self.receipts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        ReceiptStore::new()
    }
}

impl fmt::Debug for ReceiptStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptStore")
            .field("receipts", &self.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

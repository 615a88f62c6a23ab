//! # Receipt Identifiers
//!
//! Identifiers are opaque strings handed out at registration time. The store
//! doesn't know how they are made; it asks an [`IdGenerator`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Generator            Output                                  Use       │
//! │  ───────────────────  ──────────────────────────────────────  ───────   │
//! │  UuidGenerator        7fb1377b-b223-49d9-a31a-5a02701dd310    default   │
//! │  SequentialGenerator  receipt-1, receipt-2, ...               tests     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque receipt identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        ReceiptId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets maps keyed by `ReceiptId` be queried with a plain `&str`.
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Source of fresh identifiers.
///
/// Implementations must never return the same identifier twice and must be
/// callable from many threads at once.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier that has never been returned before.
    fn next_id(&self) -> ReceiptId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// Counter-based identifiers: `{prefix}-1`, `{prefix}-2`, ...
///
/// Predictable output for tests and local debugging.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    /// Creates a generator starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialGenerator {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId(format!("{}-{}", self.prefix, n))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

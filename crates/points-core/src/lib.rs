//! # points-core: Pure Rule Engine for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It decides how many points
//! a receipt earns, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (Axum)                            │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    points-store                                 │   │
//! │  │         ReceiptStore (put / get) + ReceiptService               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   rules   │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │ calculate │  │  strict   │  │   │
//! │  │   │   Item    │  │ (decimal) │  │ Breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`rules`] - The seven scoring rules
//! - [`validation`] - Optional strict receipt validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same receipt in, same points out
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: Amounts are parsed to exact decimals, never to floats
//! 4. **Lenient Scoring**: A malformed field zeroes its own rules, nothing more

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyParseError, ValidationError};
pub use money::Money;
pub use rules::{calculate, PointsBreakdown};
pub use types::{Item, Receipt};

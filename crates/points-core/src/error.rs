//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── MoneyParseError  - Amount string is not a decimal number          │
//! │  └── ValidationError  - Strict receipt validation failures             │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError       - Unknown identifier, rejected receipt           │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What clients see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → Client                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rule evaluation never surfaces these errors: a field that fails to parse
//! simply scores zero for the rules that read it.

use thiserror::Error;

// =============================================================================
// Money Parse Error
// =============================================================================

/// Why an amount string could not be read as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount has no digits")]
    NoDigits,

    #[error("amount contains a character other than digits, sign or decimal point")]
    InvalidCharacter,

    #[error("amount has a malformed exponent")]
    InvalidExponent,

    #[error("amount is out of range")]
    Overflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced when strict validation is switched on; the default lenient
/// mode stores every receipt that decodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value doesn't match its expected format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A monetary field could not be parsed.
    #[error("{field} is not a valid amount: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: MoneyParseError,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Strict receipt validation, applied at registration time when enabled.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler                                                 │
//! │  └── JSON shape (every field present, strings where strings belong)    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (only with strict validation on)                 │
//! │  ├── Calendar date, clock time                                         │
//! │  └── Numeric amounts                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring rules                                                │
//! │  └── Anything unparseable scores 0 for the rules that read it          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::validation::{validate_purchase_date, validate_purchase_time};
//!
//! assert!(validate_purchase_date("2022-01-01").is_ok());
//! assert!(validate_purchase_date("2022-02-30").is_err());
//! assert!(validate_purchase_time("16:00").is_ok());
//! assert!(validate_purchase_time("25:00").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Receipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Wire format of `purchaseDate`.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of `purchaseTime`.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be blank
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "retailer".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase date and returns it parsed.
///
/// ## Rules
/// - `YYYY-MM-DD`
/// - Must be a real calendar day (no February 30th)
pub fn validate_purchase_date(date: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(date, PURCHASE_DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "purchaseDate".to_string(),
            reason: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

/// Validates a purchase time and returns it parsed.
///
/// ## Rules
/// - `HH:MM`, 24-hour clock
pub fn validate_purchase_time(time: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(time, PURCHASE_TIME_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "purchaseTime".to_string(),
            reason: format!("expected HH:MM ({})", e),
        }
    })
}

/// Validates a monetary field and returns it parsed.
///
/// `field` names the value in the error, e.g. `"total"` or `"items[2].price"`.
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<Money> {
    amount
        .parse::<Money>()
        .map_err(|source| ValidationError::InvalidAmount {
            field: field.to_string(),
            source,
        })
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates every field of a receipt, stopping at the first failure.
///
/// ## Example
/// ```rust
/// use points_core::{Item, Receipt};
/// use points_core::validation::validate_receipt;
///
/// let mut receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "6.49".to_string(),
///     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
/// };
/// assert!(validate_receipt(&receipt).is_ok());
///
/// receipt.items[0].price = "free".to_string();
/// assert!(validate_receipt(&receipt).is_err());
/// ```
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    validate_retailer(&receipt.retailer)?;
    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;
    validate_amount("total", &receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        validate_amount(&format!("items[{}].price", index), &item.price)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

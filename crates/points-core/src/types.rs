//! # Domain Types
//!
//! The receipt shape accepted by the service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Receipt        │ 1    * │        Item         │                │
//! │  │  ─────────────────  │───────►│  ─────────────────  │                │
//! │  │  retailer           │        │  short_description  │                │
//! │  │  purchase_date      │        │  price  ("6.49")    │                │
//! │  │  purchase_time      │        └─────────────────────┘                │
//! │  │  total  ("35.35")   │                                                │
//! │  │  items              │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Strings
//! Every field keeps the exact string the client sent. Parsing happens inside
//! each scoring rule, so one malformed field never hides the others.

use serde::{Deserialize, Deserializer, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-form description, e.g. "Mountain Dew 12PK".
    pub short_description: String,

    /// Decimal amount as sent, e.g. "6.49".
    pub price: String,
}

impl Item {
    /// Creates an item from its raw fields.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Parses the price, if it is a decimal number.
    pub fn price(&self) -> Option<Money> {
        self.price.parse().ok()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Immutable once registered; the store hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// `YYYY-MM-DD`.
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock.
    pub purchase_time: String,

    /// Decimal amount as sent, e.g. "35.35".
    pub total: String,

    /// Purchased items. Absent or `null` in the payload means no items.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Receipt {
    /// Parses the total, if it is a decimal number.
    pub fn total(&self) -> Option<Money> {
        self.total.parse().ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

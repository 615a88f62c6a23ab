//! # points-store: Receipt Store for Receipt Points
//!
//! Holds registered receipts in memory and exposes the two boundary
//! operations, `register_receipt` and `get_points`.
//!
//! ## Module Organization
//!
//! - [`store`] - Concurrent write-once receipt map
//! - [`service`] - Registration and scoring on top of the store
//! - [`id`] - Receipt identifiers and their generators
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use points_core::{Item, Receipt};
//! use points_store::ReceiptService;
//!
//! let service = ReceiptService::new();
//! let id = service
//!     .register_receipt(Receipt {
//!         retailer: "Target".to_string(),
//!         purchase_date: "2022-03-02".to_string(),
//!         purchase_time: "13:01".to_string(),
//!         total: "10.00".to_string(),
//!         items: vec![Item::new("abc", "3.00"), Item::new("abcdef", "6.00")],
//!     })
//!     .unwrap();
//!
//! assert_eq!(service.get_points(id.as_str()).unwrap(), 89);
//! ```
//!
//! Nothing survives a restart: there is no persistence layer.

pub mod error;
pub mod id;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, ReceiptId, SequentialGenerator, UuidGenerator};
pub use service::ReceiptService;
pub use store::ReceiptStore;

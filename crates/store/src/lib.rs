//! # Basketlens Store Crate
//!
//! Loads the customer dataset. This is the only crate that touches the filesystem on the
//! input side; everything downstream works on the in-memory `Vec<Customer>`.
//!
//! ## Public API
//!
//! - `DataSource`: The trait every input adapter implements.
//! - `JsonFileSource`: Reads a JSON array of customers from a file.
//! - `JsonStrSource`: Parses an in-memory JSON document.
//! - `audit_basket_totals`: Reports baskets whose stored total disagrees with their items.
//! - `StoreError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod audit;
pub mod error;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use audit::{audit_basket_totals, TotalMismatch};
pub use error::StoreError;
pub use source::{DataSource, JsonFileSource, JsonStrSource};

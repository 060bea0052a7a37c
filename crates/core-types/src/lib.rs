//! # Basketlens Core Types
//!
//! The record graph every other crate works on: a `Customer` owns exactly one `Basket`,
//! and a `Basket` owns its `Product` line items. Records are built once at load time and
//! only ever read afterwards.

pub mod error;
pub mod non_empty;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use non_empty::NonEmpty;
pub use structs::{Basket, Customer, Product};

//! # Basketlens Analytics Engine
//!
//! This crate computes the descriptive statistics of a store dataset: top and lowest
//! spenders, most and least sold products, best-selling and most profitable categories,
//! per-customer breakdowns, totals and averages.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** It depends only on `core-types`. Loading data and printing results
//!   belong to the `store` and `reporter` crates.
//! - **Stateless calculation:** `AnalyticsEngine` borrows the customer records and returns
//!   results that point back into them. Nothing is mutated or cloned.
//! - **Deterministic ties:** Every "extreme" query keeps the first record on a tie, and
//!   grouped queries scan their groups in first-seen order.
//! - **Absent, not empty:** A query with no answer returns `None` instead of a zeroed record.
//!   Averages take `NonEmpty` input, so division by zero is ruled out at the call site.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The struct holding every query and the `summarize` entry point.
//! - `StoreReport`: All query results for one dataset.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
mod grouping;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{find_extreme, AnalyticsEngine};
pub use error::AnalyticsError;
pub use report::{
    AverageSpending, CategoryAmount, CustomerCategory, CustomerPurchase, CustomerTotals,
    LineItemAverage, NameQuantity, SoldExtremes, SoldQuantities, StoreReport, TopLineItemCustomer,
};

//! # Basketlens Reporter
//!
//! Turns a `StoreReport` into text, tables or JSON. Profiles decide which numbered tasks
//! are printed and locales decide the wording; neither changes a computed value.
//!
//! ## Public API
//!
//! - `Reporter`: Renders a report with the configured profile, locale and format.
//! - `Labels` / `labels`: The display text of each supported locale.
//! - `Task` / `TaskKind` / `tasks_for`: The task list of each profile.
//! - `ReportError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod labels;
pub mod render;
pub mod section;
pub mod tasks;

// Re-export the key components to create a clean, public-facing API.
pub use error::ReportError;
pub use labels::{labels, Labels};
pub use render::Reporter;
pub use section::{build_section, Block, Section};
pub use tasks::{tasks_for, Task, TaskKind};

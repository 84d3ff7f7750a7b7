//! Shared types and logic for the inventory management dashboard
//!
//! This crate contains domain models, pure validation and the aggregation
//! logic shared between the dashboard application and the browser bindings.
//! Nothing here performs I/O.

pub mod models;
pub mod reporting;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

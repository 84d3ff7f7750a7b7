//! Inventory management dashboard
//!
//! A thin CRUD and reporting client over a hosted data/auth backend. The
//! modules mirror the system's components: the backend client handle, the
//! injected store/auth seams, the session provider, the notification seam
//! and the per-domain views.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod store;
pub mod views;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};

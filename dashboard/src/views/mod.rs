//! Domain views: per-view state and data flow
//!
//! Each view owns a transient copy of the rows it displays (no cross-view
//! cache) and re-fetches after every successful mutation. Read failures are
//! logged and leave the affected list empty so the view still renders;
//! write failures notify and preserve the user's form state.

pub mod alerts;
pub mod categories;
pub mod dashboard;
pub mod movements;
pub mod products;
pub mod reports;
pub mod suppliers;
pub mod users;

pub use alerts::AlertsView;
pub use categories::CategoriesView;
pub use dashboard::DashboardView;
pub use movements::MovementsView;
pub use products::ProductsView;
pub use reports::ReportsView;
pub use suppliers::SuppliersView;
pub use users::UsersView;

use crate::error::AppResult;

/// Unwrap a read result, logging and falling back to an empty list so the
/// view renders regardless
pub(crate) fn or_empty<T>(result: AppResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("Failed to load {}: {}", what, err);
            Vec::new()
        }
    }
}

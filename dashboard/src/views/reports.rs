//! Reports view: full-table aggregation and CSV export
//!
//! Fetches the entire movement and product tables (unbounded, no
//! pagination) and derives everything in memory.

use std::sync::Arc;

use serde::Serialize;

use shared::reporting::ReportData;

use crate::error::{AppError, AppResult};
use crate::store::InventoryStore;

use super::or_empty;

pub struct ReportsView {
    store: Arc<dyn InventoryStore>,
    pub data: ReportData,
    pub loading: bool,
}

impl ReportsView {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self {
            store,
            data: ReportData::default(),
            loading: true,
        }
    }

    /// Fetch movements and products concurrently, then aggregate
    pub async fn load(&mut self) {
        let (movements, products) = tokio::join!(
            self.store.all_movements(),
            self.store.list_products(),
        );
        let movements = or_empty(movements, "movements");
        let products = or_empty(products, "products");

        self.data = ReportData::compute(&movements, &products);
        self.loading = false;
    }

    /// Export the products-by-category table as CSV
    pub fn categories_csv(&self) -> AppResult<String> {
        export_to_csv(&self.data.products_by_category)
    }

    /// Export the low-stock table as CSV
    pub fn low_stock_csv(&self) -> AppResult<String> {
        export_to_csv(&self.data.low_stock_products)
    }

    /// Export the top-selling table as CSV
    pub fn top_sellers_csv(&self) -> AppResult<String> {
        export_to_csv(&self.data.top_selling_products)
    }
}

/// Serialize report rows as CSV with a header row
pub fn export_to_csv<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("UTF-8 conversion error: {}", e)))
}

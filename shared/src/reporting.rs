//! Pure aggregation logic for the dashboard and reports views
//!
//! Every derivation here is a single pass over already-fetched row sets.
//! Grouped outputs accumulate in first-seen order so results are
//! deterministic for a given fetch.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{InventoryMovement, MovementType, Product, StockAlert};
use crate::types::Tone;

/// Bucket label for products without a category reference
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Placeholder when an exit references a product missing from the fetch
pub const UNKNOWN_PRODUCT: &str = "Unknown product";

/// Headline figures for the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    /// Count of unresolved alerts of every type; displayed as the
    /// "low stock" stat
    pub low_stock_alerts: usize,
    pub total_value: Decimal,
    pub recent_movements: usize,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_products: 0,
            low_stock_alerts: 0,
            total_value: Decimal::ZERO,
            recent_movements: 0,
        }
    }
}

impl DashboardStats {
    pub fn compute(
        products: &[Product],
        unresolved_alerts: &[StockAlert],
        recent: &[InventoryMovement],
    ) -> Self {
        let total_value = products.iter().map(Product::inventory_value).sum();
        Self {
            total_products: products.len(),
            low_stock_alerts: unresolved_alerts.len(),
            total_value,
            recent_movements: recent.len(),
        }
    }
}

/// Products ranked by stock value, highest first, truncated to `n`
pub fn top_products_by_value(products: &[Product], n: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.inventory_value().cmp(&a.inventory_value()));
    ranked.truncate(n);
    ranked
}

/// One histogram bucket of the products-by-category chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One row of the low-stock table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEntry {
    pub name: String,
    pub stock: i32,
    pub min_stock: i32,
}

/// One row of the top-selling chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSeller {
    pub name: String,
    pub quantity: i64,
}

/// Aggregated report data derived from full movement and product fetches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportData {
    pub total_investment: Decimal,
    pub total_revenue: Decimal,
    pub profit: Decimal,
    pub total_entries: usize,
    pub total_exits: usize,
    pub products_by_category: Vec<CategoryCount>,
    pub low_stock_products: Vec<LowStockEntry>,
    pub top_selling_products: Vec<TopSeller>,
}

impl ReportData {
    pub fn compute(movements: &[InventoryMovement], products: &[Product]) -> Self {
        let mut total_investment = Decimal::ZERO;
        let mut total_revenue = Decimal::ZERO;
        let mut total_entries = 0usize;
        let mut total_exits = 0usize;
        let mut sellers: Vec<(Uuid, i64)> = Vec::new();

        for movement in movements {
            match movement.movement_type {
                MovementType::Entry => {
                    total_entries += 1;
                    total_investment += movement.total_price;
                }
                MovementType::Exit => {
                    total_exits += 1;
                    total_revenue += movement.total_price;
                    match sellers.iter_mut().find(|(id, _)| *id == movement.product_id) {
                        Some((_, quantity)) => *quantity += i64::from(movement.quantity),
                        None => sellers.push((movement.product_id, i64::from(movement.quantity))),
                    }
                }
            }
        }

        let mut products_by_category: Vec<CategoryCount> = Vec::new();
        for product in products {
            let name = product.category_name().unwrap_or(UNCATEGORIZED);
            match products_by_category.iter_mut().find(|c| c.category == name) {
                Some(bucket) => bucket.count += 1,
                None => products_by_category.push(CategoryCount {
                    category: name.to_string(),
                    count: 1,
                }),
            }
        }

        let low_stock_products = products
            .iter()
            .filter(|p| p.is_low_stock())
            .take(5)
            .map(|p| LowStockEntry {
                name: p.name.clone(),
                stock: p.current_stock,
                min_stock: p.min_stock,
            })
            .collect();

        let mut top_selling_products: Vec<TopSeller> = sellers
            .into_iter()
            .map(|(id, quantity)| TopSeller {
                name: products
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
                quantity,
            })
            .collect();
        top_selling_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_selling_products.truncate(5);

        Self {
            total_investment,
            total_revenue,
            profit: total_revenue - total_investment,
            total_entries,
            total_exits,
            products_by_category,
            low_stock_products,
            top_selling_products,
        }
    }

    /// Display tone for the profit figure; losses render differently
    pub fn profit_tone(&self) -> Tone {
        if self.profit >= Decimal::ZERO {
            Tone::Success
        } else {
            Tone::Critical
        }
    }

    /// Largest bucket of the category histogram
    pub fn max_category_count(&self) -> usize {
        self.products_by_category
            .iter()
            .map(|c| c.count)
            .max()
            .unwrap_or(0)
    }

    /// Largest quantity among the top sellers
    pub fn max_seller_quantity(&self) -> i64 {
        self.top_selling_products
            .iter()
            .map(|s| s.quantity)
            .max()
            .unwrap_or(0)
    }
}

/// Width of a chart bar as a percentage of the largest bucket.
/// A zero or negative maximum yields 0 rather than a NaN width.
pub fn bar_percentage(value: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    value as f64 / max as f64 * 100.0
}

//! Dashboard view: read-only headline stats
//!
//! A full reload is the only way to reflect new data; there is no cache or
//! incremental update.

use std::sync::Arc;

use shared::models::{InventoryMovement, Product};
use shared::reporting::{top_products_by_value, DashboardStats};

use crate::store::InventoryStore;

use super::or_empty;

const RECENT_MOVEMENTS: u32 = 5;
const TOP_PRODUCTS: usize = 5;

pub struct DashboardView {
    store: Arc<dyn InventoryStore>,
    pub stats: DashboardStats,
    pub recent_movements: Vec<InventoryMovement>,
    pub top_products: Vec<Product>,
    pub loading: bool,
}

impl DashboardView {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self {
            store,
            stats: DashboardStats::default(),
            recent_movements: Vec::new(),
            top_products: Vec::new(),
            loading: true,
        }
    }

    /// Fetch products, unresolved alerts and the five most recent movements
    /// concurrently, then derive the headline figures from that snapshot
    pub async fn load(&mut self) {
        let (products, alerts, recent) = tokio::join!(
            self.store.list_products(),
            self.store.unresolved_alerts(),
            self.store.recent_movements(RECENT_MOVEMENTS),
        );
        let products = or_empty(products, "products");
        let alerts = or_empty(alerts, "alerts");
        let recent = or_empty(recent, "recent movements");

        self.stats = DashboardStats::compute(&products, &alerts, &recent);
        self.top_products = top_products_by_value(&products, TOP_PRODUCTS);
        self.recent_movements = recent;
        self.loading = false;
    }
}

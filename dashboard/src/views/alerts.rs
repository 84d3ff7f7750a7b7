//! Alerts view: filtered list with a single resolve mutation
//!
//! Alerts are generated outside this app; the only write path marks one
//! resolved and stamps the resolution time.

use std::sync::Arc;

use uuid::Uuid;

use shared::models::{AlertFilter, StockAlert};

use crate::notify::Notifier;
use crate::store::InventoryStore;

use super::or_empty;

pub struct AlertsView {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub alerts: Vec<StockAlert>,
    pub filter: AlertFilter,
    pub loading: bool,
}

impl AlertsView {
    pub fn new(store: Arc<dyn InventoryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            alerts: Vec::new(),
            filter: AlertFilter::Unresolved,
            loading: true,
        }
    }

    pub async fn load(&mut self) {
        self.alerts = or_empty(self.store.list_alerts(self.filter).await, "alerts");
        self.loading = false;
    }

    /// Switch between pending-only and full history, re-querying the server
    pub async fn set_filter(&mut self, filter: AlertFilter) {
        self.filter = filter;
        self.load().await;
    }

    /// Mark an alert resolved. On success the list re-fetches, so a pending
    /// filter drops the row immediately.
    pub async fn resolve(&mut self, id: Uuid) -> bool {
        match self.store.resolve_alert(id).await {
            Ok(()) => {
                self.load().await;
                self.notifier
                    .success("Alert resolved", "The alert was marked as resolved.");
                true
            }
            Err(err) => {
                tracing::error!("Failed to resolve alert: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }
}

//! Application shell: view selection and wiring
//!
//! Navigation only; each view owns its data flow. Switching views
//! constructs a fresh view that fetches its own snapshot on activation.

use std::sync::Arc;

use crate::notify::Notifier;
use crate::session::SessionProvider;
use crate::store::InventoryStore;
use crate::views::{
    AlertsView, CategoriesView, DashboardView, MovementsView, ProductsView, ReportsView,
    SuppliersView, UsersView,
};

/// Navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Products,
    Categories,
    Suppliers,
    Movements,
    Reports,
    Alerts,
    Users,
}

/// The active view with its loaded state
pub enum ActiveView {
    Dashboard(DashboardView),
    Products(ProductsView),
    Categories(CategoriesView),
    Suppliers(SuppliersView),
    Movements(MovementsView),
    Reports(ReportsView),
    Alerts(AlertsView),
    Users(UsersView),
}

pub struct App {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub session: Arc<SessionProvider>,
}

impl App {
    pub fn new(
        store: Arc<dyn InventoryStore>,
        notifier: Arc<dyn Notifier>,
        session: Arc<SessionProvider>,
    ) -> Self {
        Self {
            store,
            notifier,
            session,
        }
    }

    /// Construct and activate a view; it loads its data before returning
    pub async fn open(&self, view: View) -> ActiveView {
        match view {
            View::Dashboard => {
                let mut v = DashboardView::new(Arc::clone(&self.store));
                v.load().await;
                ActiveView::Dashboard(v)
            }
            View::Products => {
                let mut v = ProductsView::new(Arc::clone(&self.store), Arc::clone(&self.notifier));
                v.load().await;
                ActiveView::Products(v)
            }
            View::Categories => {
                let mut v =
                    CategoriesView::new(Arc::clone(&self.store), Arc::clone(&self.notifier));
                v.load().await;
                ActiveView::Categories(v)
            }
            View::Suppliers => {
                let mut v = SuppliersView::new(Arc::clone(&self.store), Arc::clone(&self.notifier));
                v.load().await;
                ActiveView::Suppliers(v)
            }
            View::Movements => {
                let mut v = MovementsView::new(Arc::clone(&self.store), Arc::clone(&self.notifier));
                v.load().await;
                ActiveView::Movements(v)
            }
            View::Reports => {
                let mut v = ReportsView::new(Arc::clone(&self.store));
                v.load().await;
                ActiveView::Reports(v)
            }
            View::Alerts => {
                let mut v = AlertsView::new(Arc::clone(&self.store), Arc::clone(&self.notifier));
                v.load().await;
                ActiveView::Alerts(v)
            }
            View::Users => ActiveView::Users(UsersView::new(
                Arc::clone(&self.session),
                Arc::clone(&self.notifier),
            )),
        }
    }
}

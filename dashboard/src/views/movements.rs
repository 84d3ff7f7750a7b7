//! Movements view: filtered list plus the recording form
//!
//! Movements are immutable: the view exposes create only, and the stored
//! total price is fixed at submission time.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use shared::models::{InventoryMovement, MovementFilter, MovementForm, Product};

use crate::notify::Notifier;
use crate::store::InventoryStore;

use super::or_empty;

pub struct MovementsView {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub movements: Vec<InventoryMovement>,
    /// Active products for the form's selector
    pub products: Vec<Product>,
    pub filter: MovementFilter,
    pub form: MovementForm,
    pub editor_open: bool,
    pub loading: bool,
}

impl MovementsView {
    pub fn new(store: Arc<dyn InventoryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            movements: Vec::new(),
            products: Vec::new(),
            filter: MovementFilter::All,
            form: MovementForm::default(),
            editor_open: false,
            loading: true,
        }
    }

    /// Fetch the (optionally filtered) movement list and the product
    /// selector concurrently
    pub async fn load(&mut self) {
        let (movements, products) = tokio::join!(
            self.store.list_movements(self.filter),
            self.store.active_products(),
        );
        self.movements = or_empty(movements, "movements");
        self.products = or_empty(products, "products");
        self.loading = false;
    }

    /// Switch the server-side type filter and re-query
    pub async fn set_filter(&mut self, filter: MovementFilter) {
        self.filter = filter;
        self.load().await;
    }

    pub fn open_editor(&mut self) {
        self.form = MovementForm::default();
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
    }

    /// Record the movement. The stored total is quantity × unit price as
    /// they stand right now; later edits to the product's price never touch
    /// it.
    pub async fn submit(&mut self, created_by: Option<Uuid>) -> bool {
        if let Err(errors) = self.form.validate() {
            self.notifier.error("Invalid movement", &errors.to_string());
            return false;
        }
        let Some(movement) = self.form.to_new_movement(created_by) else {
            self.notifier
                .error("Invalid movement", "A product must be selected");
            return false;
        };

        match self.store.insert_movement(&movement).await {
            Ok(()) => {
                self.notifier
                    .success("Movement recorded", "The movement was saved.");
                self.close_editor();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to save movement: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }
}

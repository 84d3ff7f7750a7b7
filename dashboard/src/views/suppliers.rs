//! Suppliers view: list and CRUD editor state

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use shared::models::{Supplier, SupplierForm};

use crate::notify::Notifier;
use crate::store::InventoryStore;

use super::or_empty;

pub struct SuppliersView {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub suppliers: Vec<Supplier>,
    pub form: SupplierForm,
    pub editing: Option<Uuid>,
    pub editor_open: bool,
    pub loading: bool,
}

impl SuppliersView {
    pub fn new(store: Arc<dyn InventoryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            suppliers: Vec::new(),
            form: SupplierForm::default(),
            editing: None,
            editor_open: false,
            loading: true,
        }
    }

    pub async fn load(&mut self) {
        self.suppliers = or_empty(self.store.list_suppliers().await, "suppliers");
        self.loading = false;
    }

    pub fn open_editor(&mut self, supplier: Option<&Supplier>) {
        match supplier {
            Some(supplier) => {
                self.editing = Some(supplier.id);
                self.form = SupplierForm::from_supplier(supplier);
            }
            None => {
                self.editing = None;
                self.form = SupplierForm::default();
            }
        }
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = None;
    }

    pub async fn submit(&mut self) -> bool {
        if let Err(errors) = self.form.validate() {
            self.notifier.error("Invalid supplier", &errors.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => self.store.update_supplier(id, &self.form).await,
            None => self.store.insert_supplier(&self.form).await,
        };

        match result {
            Ok(()) => {
                let title = if self.editing.is_some() {
                    "Supplier updated"
                } else {
                    "Supplier created"
                };
                self.notifier.success(title, "The supplier was saved.");
                self.close_editor();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to save supplier: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> bool {
        let confirmed = self
            .notifier
            .confirm(
                "Delete supplier",
                "Are you sure you want to delete this supplier?",
            )
            .await;
        if !confirmed {
            return false;
        }

        match self.store.delete_supplier(id).await {
            Ok(()) => {
                self.notifier
                    .success("Supplier deleted", "The supplier was removed.");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to delete supplier: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }
}

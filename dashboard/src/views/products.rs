//! Products view: list, search, and CRUD editor state

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use shared::models::{Category, Product, ProductForm, Supplier};

use crate::notify::Notifier;
use crate::store::InventoryStore;

use super::or_empty;

pub struct ProductsView {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub suppliers: Vec<Supplier>,
    pub search_term: String,
    pub form: ProductForm,
    pub editing: Option<Uuid>,
    pub editor_open: bool,
    pub loading: bool,
}

impl ProductsView {
    pub fn new(store: Arc<dyn InventoryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            products: Vec::new(),
            categories: Vec::new(),
            suppliers: Vec::new(),
            search_term: String::new(),
            form: ProductForm::default(),
            editing: None,
            editor_open: false,
            loading: true,
        }
    }

    /// Fetch products plus the editor's category/supplier choices
    /// concurrently; all three settle before the view renders
    pub async fn load(&mut self) {
        let (products, categories, suppliers) = tokio::join!(
            self.store.list_products(),
            self.store.category_options(),
            self.store.supplier_options(),
        );
        self.products = or_empty(products, "products");
        self.categories = or_empty(categories, "categories");
        self.suppliers = or_empty(suppliers, "suppliers");
        self.loading = false;
    }

    /// Open the editor, prefilled from an existing product when editing
    pub fn open_editor(&mut self, product: Option<&Product>) {
        match product {
            Some(product) => {
                self.editing = Some(product.id);
                self.form = ProductForm::from_product(product);
            }
            None => {
                self.editing = None;
                self.form = ProductForm::default();
            }
        }
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = None;
    }

    /// Submit the editor form. On success the editor closes and the list
    /// re-fetches; on failure it stays open with the input intact.
    pub async fn submit(&mut self) -> bool {
        if let Err(errors) = self.form.validate() {
            self.notifier.error("Invalid product", &errors.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => self.store.update_product(id, &self.form).await,
            None => self.store.insert_product(&self.form).await,
        };

        match result {
            Ok(()) => {
                let title = if self.editing.is_some() {
                    "Product updated"
                } else {
                    "Product created"
                };
                self.notifier.success(title, "The product was saved.");
                self.close_editor();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to save product: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }

    /// Delete after explicit confirmation; a decline is a no-op
    pub async fn delete(&mut self, id: Uuid) -> bool {
        let confirmed = self
            .notifier
            .confirm("Delete product", "Are you sure you want to delete this product?")
            .await;
        if !confirmed {
            return false;
        }

        match self.store.delete_product(id).await {
            Ok(()) => {
                self.notifier
                    .success("Product deleted", "The product was removed.");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to delete product: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }

    /// Case-insensitive name/SKU filter over the already-fetched list
    pub fn filtered(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_search(&self.search_term))
            .collect()
    }
}

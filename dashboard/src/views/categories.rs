//! Categories view: list and CRUD editor state

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use shared::models::{Category, CategoryForm};

use crate::notify::Notifier;
use crate::store::InventoryStore;

use super::or_empty;

pub struct CategoriesView {
    store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn Notifier>,
    pub categories: Vec<Category>,
    pub form: CategoryForm,
    pub editing: Option<Uuid>,
    pub editor_open: bool,
    pub loading: bool,
}

impl CategoriesView {
    pub fn new(store: Arc<dyn InventoryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            categories: Vec::new(),
            form: CategoryForm::default(),
            editing: None,
            editor_open: false,
            loading: true,
        }
    }

    pub async fn load(&mut self) {
        self.categories = or_empty(self.store.list_categories().await, "categories");
        self.loading = false;
    }

    pub fn open_editor(&mut self, category: Option<&Category>) {
        match category {
            Some(category) => {
                self.editing = Some(category.id);
                self.form = CategoryForm::from_category(category);
            }
            None => {
                self.editing = None;
                self.form = CategoryForm::default();
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
            self.notifier.error("Invalid category", &errors.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => self.store.update_category(id, &self.form).await,
            None => self.store.insert_category(&self.form).await,
        };

        match result {
            Ok(()) => {
                let title = if self.editing.is_some() {
                    "Category updated"
                } else {
                    "Category created"
                };
                self.notifier.success(title, "The category was saved.");
                self.close_editor();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to save category: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }

    /// Delete after explicit confirmation. Whether a category referenced by
    /// products can go away is the backend's referential-integrity call;
    /// its refusal is surfaced as an error notification.
    pub async fn delete(&mut self, id: Uuid) -> bool {
        let confirmed = self
            .notifier
            .confirm(
                "Delete category",
                "Are you sure you want to delete this category?",
            )
            .await;
        if !confirmed {
            return false;
        }

        match self.store.delete_category(id).await {
            Ok(()) => {
                self.notifier
                    .success("Category deleted", "The category was removed.");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!("Failed to delete category: {}", err);
                self.notifier.error("Error", &err.user_message());
                false
            }
        }
    }
}

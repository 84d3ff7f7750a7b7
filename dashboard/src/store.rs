//! Injected capability seams over the hosted backend
//!
//! Views depend on these traits rather than on the concrete client, so
//! tests can substitute an in-memory store implementing the same
//! capability set. `BackendClient` satisfies both by issuing table-API and
//! auth-API requests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::broadcast;
use uuid::Uuid;

use shared::models::{
    AlertFilter, Category, CategoryForm, InventoryMovement, MovementFilter, NewMovement, Product,
    ProductForm, StockAlert, Supplier, SupplierForm, UserMetadata,
};

use crate::client::{AuthChange, AuthUser, BackendClient, OrderDirection, Session};
use crate::error::AppResult;

/// Read/write capability set over the backend's five tables
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Categories, newest first (Categories view)
    async fn list_categories(&self) -> AppResult<Vec<Category>>;
    /// Categories by name (product editor selector)
    async fn category_options(&self) -> AppResult<Vec<Category>>;
    async fn insert_category(&self, form: &CategoryForm) -> AppResult<()>;
    async fn update_category(&self, id: Uuid, form: &CategoryForm) -> AppResult<()>;
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;

    /// Suppliers, newest first (Suppliers view)
    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>>;
    /// Suppliers by name (product editor selector)
    async fn supplier_options(&self) -> AppResult<Vec<Supplier>>;
    async fn insert_supplier(&self, form: &SupplierForm) -> AppResult<()>;
    async fn update_supplier(&self, id: Uuid, form: &SupplierForm) -> AppResult<()>;
    async fn delete_supplier(&self, id: Uuid) -> AppResult<()>;

    /// Products with embedded category/supplier names, newest first
    async fn list_products(&self) -> AppResult<Vec<Product>>;
    /// Active products by name (movement form selector)
    async fn active_products(&self) -> AppResult<Vec<Product>>;
    async fn insert_product(&self, form: &ProductForm) -> AppResult<()>;
    async fn update_product(&self, id: Uuid, form: &ProductForm) -> AppResult<()>;
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;

    /// Movements with embedded product name/sku/unit, newest first,
    /// optionally filtered by type on the server
    async fn list_movements(&self, filter: MovementFilter) -> AppResult<Vec<InventoryMovement>>;
    /// The full movement table, unordered (Reports)
    async fn all_movements(&self) -> AppResult<Vec<InventoryMovement>>;
    /// The `limit` most recent movements with product names (Dashboard)
    async fn recent_movements(&self, limit: u32) -> AppResult<Vec<InventoryMovement>>;
    /// Movements are immutable: insert is the only write path
    async fn insert_movement(&self, movement: &NewMovement) -> AppResult<()>;

    /// Alerts with embedded product stock columns, newest first
    async fn list_alerts(&self, filter: AlertFilter) -> AppResult<Vec<StockAlert>>;
    /// Unresolved alerts of every type (Dashboard stat)
    async fn unresolved_alerts(&self) -> AppResult<Vec<StockAlert>>;
    /// Mark an alert resolved and stamp the resolution time
    async fn resolve_alert(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
impl InventoryStore for BackendClient {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.table("categories")
            .select("*")
            .order("created_at", OrderDirection::Descending)
            .fetch()
            .await
    }

    async fn category_options(&self) -> AppResult<Vec<Category>> {
        self.table("categories")
            .select("*")
            .order("name", OrderDirection::Ascending)
            .fetch()
            .await
    }

    async fn insert_category(&self, form: &CategoryForm) -> AppResult<()> {
        self.table("categories").insert(&[form]).await
    }

    async fn update_category(&self, id: Uuid, form: &CategoryForm) -> AppResult<()> {
        self.table("categories").eq("id", id).update(form).await
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.table("categories").eq("id", id).delete().await
    }

    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.table("suppliers")
            .select("*")
            .order("created_at", OrderDirection::Descending)
            .fetch()
            .await
    }

    async fn supplier_options(&self) -> AppResult<Vec<Supplier>> {
        self.table("suppliers")
            .select("*")
            .order("name", OrderDirection::Ascending)
            .fetch()
            .await
    }

    async fn insert_supplier(&self, form: &SupplierForm) -> AppResult<()> {
        self.table("suppliers").insert(&[form]).await
    }

    async fn update_supplier(&self, id: Uuid, form: &SupplierForm) -> AppResult<()> {
        self.table("suppliers").eq("id", id).update(form).await
    }

    async fn delete_supplier(&self, id: Uuid) -> AppResult<()> {
        self.table("suppliers").eq("id", id).delete().await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.table("products")
            .select("*, categories(name), suppliers(name)")
            .order("created_at", OrderDirection::Descending)
            .fetch()
            .await
    }

    async fn active_products(&self) -> AppResult<Vec<Product>> {
        self.table("products")
            .select("*")
            .eq("is_active", true)
            .order("name", OrderDirection::Ascending)
            .fetch()
            .await
    }

    async fn insert_product(&self, form: &ProductForm) -> AppResult<()> {
        self.table("products").insert(&[form]).await
    }

    async fn update_product(&self, id: Uuid, form: &ProductForm) -> AppResult<()> {
        self.table("products").eq("id", id).update(form).await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.table("products").eq("id", id).delete().await
    }

    async fn list_movements(&self, filter: MovementFilter) -> AppResult<Vec<InventoryMovement>> {
        let mut query = self
            .table("inventory_movements")
            .select("*, products(name, sku, unit)")
            .order("created_at", OrderDirection::Descending);
        if let Some(movement_type) = filter.movement_type() {
            query = query.eq("movement_type", movement_type.as_str());
        }
        query.fetch().await
    }

    async fn all_movements(&self) -> AppResult<Vec<InventoryMovement>> {
        self.table("inventory_movements").select("*").fetch().await
    }

    async fn recent_movements(&self, limit: u32) -> AppResult<Vec<InventoryMovement>> {
        self.table("inventory_movements")
            .select("*, products(name)")
            .order("created_at", OrderDirection::Descending)
            .limit(limit)
            .fetch()
            .await
    }

    async fn insert_movement(&self, movement: &NewMovement) -> AppResult<()> {
        self.table("inventory_movements").insert(&[movement]).await
    }

    async fn list_alerts(&self, filter: AlertFilter) -> AppResult<Vec<StockAlert>> {
        let mut query = self
            .table("stock_alerts")
            .select("*, products(name, sku, current_stock, min_stock, max_stock)")
            .order("created_at", OrderDirection::Descending);
        if filter == AlertFilter::Unresolved {
            query = query.eq("is_resolved", false);
        }
        query.fetch().await
    }

    async fn unresolved_alerts(&self) -> AppResult<Vec<StockAlert>> {
        self.table("stock_alerts")
            .select("*")
            .eq("is_resolved", false)
            .fetch()
            .await
    }

    async fn resolve_alert(&self, id: Uuid) -> AppResult<()> {
        self.table("stock_alerts")
            .eq("id", id)
            .update(&json!({
                "is_resolved": true,
                "resolved_at": Utc::now(),
            }))
            .await
    }
}

/// Auth capability set consumed by the session provider
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<UserMetadata>,
    ) -> AppResult<()>;
    async fn sign_out(&self) -> AppResult<()>;
    async fn current_session(&self) -> Option<Session>;
    fn subscribe(&self) -> broadcast::Receiver<AuthChange>;
}

#[async_trait]
impl AuthBackend for BackendClient {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        self.auth().sign_in_with_password(email, password).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<UserMetadata>,
    ) -> AppResult<()> {
        self.auth().sign_up(email, password, metadata.as_ref()).await
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.auth().sign_out().await
    }

    async fn current_session(&self) -> Option<Session> {
        self.auth().current_session().await
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.auth().on_auth_state_change()
    }
}

//! In-memory fakes for the dashboard's injected seams
//!
//! `MemoryStore` and `FakeAuth` implement the same capability traits as the
//! real backend client, so view and session tests run without a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use shared::models::{
    AlertFilter, AlertType, Category, CategoryForm, CategoryRef, InventoryMovement,
    MovementFilter, NewMovement, Product, ProductForm, ProductRef, StockAlert, Supplier,
    SupplierForm, SupplierRef, UserMetadata,
};

use inventory_dashboard::client::{AuthChange, AuthUser, Session};
use inventory_dashboard::error::{AppError, AppResult};
use inventory_dashboard::notify::Notifier;
use inventory_dashboard::store::{AuthBackend, InventoryStore};

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// A timestamp `offset` seconds after a fixed base, so ordering in tests is
/// deterministic
pub fn at(offset: i64) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc)
        + Duration::seconds(offset)
}

pub fn product(name: &str, sku: &str, current: i32, min: i32, sale_price: &str) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        sku: sku.to_string(),
        barcode: None,
        category_id: None,
        supplier_id: None,
        purchase_price: Decimal::ZERO,
        sale_price: dec(sale_price),
        current_stock: current,
        min_stock: min,
        max_stock: 1000,
        unit: "unit".to_string(),
        image_url: None,
        is_active: true,
        created_at: at(0),
        updated_at: at(0),
        categories: None,
        suppliers: None,
    }
}

pub fn alert(product_id: Uuid, alert_type: AlertType, resolved: bool) -> StockAlert {
    StockAlert {
        id: Uuid::new_v4(),
        product_id,
        alert_type,
        is_resolved: resolved,
        created_at: at(0),
        resolved_at: None,
        products: None,
    }
}

/// In-memory store implementing the same capability set as the backend
#[derive(Default)]
pub struct MemoryStore {
    pub categories: Mutex<Vec<Category>>,
    pub suppliers: Mutex<Vec<Supplier>>,
    pub products: Mutex<Vec<Product>>,
    pub movements: Mutex<Vec<InventoryMovement>>,
    pub alerts: Mutex<Vec<StockAlert>>,
    /// When set, reads fail the way a network fault would
    pub fail_reads: AtomicBool,
    /// When set, writes are refused with the backend's message string
    pub fail_writes: AtomicBool,
    clock: Mutex<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic timestamps for inserted rows
    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.lock().unwrap();
        *clock += 1;
        at(*clock)
    }

    fn check_read(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Backend {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn check_write(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Backend {
                status: 409,
                message: "update or delete violates foreign key constraint".to_string(),
            });
        }
        Ok(())
    }

    pub fn push_product(&self, product: Product) -> Uuid {
        let id = product.id;
        self.products.lock().unwrap().push(product);
        id
    }

    pub fn push_alert(&self, alert: StockAlert) -> Uuid {
        let id = alert.id;
        self.alerts.lock().unwrap().push(alert);
        id
    }

    pub fn push_category(&self, name: &str) -> Uuid {
        let now = self.tick();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let id = category.id;
        self.categories.lock().unwrap().push(category);
        id
    }

    pub fn push_movement(&self, movement: InventoryMovement) -> Uuid {
        let id = movement.id;
        self.movements.lock().unwrap().push(movement);
        id
    }

    /// Resolve embedded category/supplier names the way join expansion does
    fn with_refs(&self, mut product: Product) -> Product {
        if let Some(category_id) = product.category_id {
            product.categories = self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| CategoryRef { name: c.name.clone() });
        }
        if let Some(supplier_id) = product.supplier_id {
            product.suppliers = self
                .suppliers
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == supplier_id)
                .map(|s| SupplierRef { name: s.name.clone() });
        }
        product
    }

    fn product_ref(&self, product_id: Uuid) -> Option<ProductRef> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| ProductRef {
                name: p.name.clone(),
                sku: Some(p.sku.clone()),
                unit: Some(p.unit.clone()),
                current_stock: Some(p.current_stock),
                min_stock: Some(p.min_stock),
                max_stock: Some(p.max_stock),
            })
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.check_read()?;
        let mut rows = self.categories.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn category_options(&self) -> AppResult<Vec<Category>> {
        self.check_read()?;
        let mut rows = self.categories.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert_category(&self, form: &CategoryForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        self.categories.lock().unwrap().push(Category {
            id: Uuid::new_v4(),
            name: form.name.clone(),
            description: form.description.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn update_category(&self, id: Uuid, form: &CategoryForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        let mut rows = self.categories.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
            row.name = form.name.clone();
            row.description = form.description.clone();
            row.updated_at = now;
        }
        Ok(())
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.check_write()?;
        self.categories.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.check_read()?;
        let mut rows = self.suppliers.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn supplier_options(&self) -> AppResult<Vec<Supplier>> {
        self.check_read()?;
        let mut rows = self.suppliers.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert_supplier(&self, form: &SupplierForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        self.suppliers.lock().unwrap().push(Supplier {
            id: Uuid::new_v4(),
            name: form.name.clone(),
            contact_name: form.contact_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn update_supplier(&self, id: Uuid, form: &SupplierForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        let mut rows = self.suppliers.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|s| s.id == id) {
            row.name = form.name.clone();
            row.contact_name = form.contact_name.clone();
            row.email = form.email.clone();
            row.phone = form.phone.clone();
            row.address = form.address.clone();
            row.updated_at = now;
        }
        Ok(())
    }

    async fn delete_supplier(&self, id: Uuid) -> AppResult<()> {
        self.check_write()?;
        self.suppliers.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.check_read()?;
        let mut rows = self.products.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows.into_iter().map(|p| self.with_refs(p)).collect())
    }

    async fn active_products(&self) -> AppResult<Vec<Product>> {
        self.check_read()?;
        let mut rows: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert_product(&self, form: &ProductForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        self.products.lock().unwrap().push(Product {
            id: Uuid::new_v4(),
            name: form.name.clone(),
            description: form.description.clone(),
            sku: form.sku.clone(),
            barcode: form.barcode.clone(),
            category_id: form.category_id,
            supplier_id: form.supplier_id,
            purchase_price: form.purchase_price,
            sale_price: form.sale_price,
            current_stock: form.current_stock,
            min_stock: form.min_stock,
            max_stock: form.max_stock,
            unit: form.unit.clone(),
            image_url: None,
            is_active: form.is_active,
            created_at: now,
            updated_at: now,
            categories: None,
            suppliers: None,
        });
        Ok(())
    }

    async fn update_product(&self, id: Uuid, form: &ProductForm) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        let mut rows = self.products.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.name = form.name.clone();
            row.description = form.description.clone();
            row.sku = form.sku.clone();
            row.barcode = form.barcode.clone();
            row.category_id = form.category_id;
            row.supplier_id = form.supplier_id;
            row.purchase_price = form.purchase_price;
            row.sale_price = form.sale_price;
            row.current_stock = form.current_stock;
            row.min_stock = form.min_stock;
            row.max_stock = form.max_stock;
            row.unit = form.unit.clone();
            row.is_active = form.is_active;
            row.updated_at = now;
        }
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.check_write()?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_movements(&self, filter: MovementFilter) -> AppResult<Vec<InventoryMovement>> {
        self.check_read()?;
        let mut rows: Vec<InventoryMovement> = self
            .movements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| match filter.movement_type() {
                Some(t) => m.movement_type == t,
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for row in &mut rows {
            row.products = self.product_ref(row.product_id);
        }
        Ok(rows)
    }

    async fn all_movements(&self) -> AppResult<Vec<InventoryMovement>> {
        self.check_read()?;
        Ok(self.movements.lock().unwrap().clone())
    }

    async fn recent_movements(&self, limit: u32) -> AppResult<Vec<InventoryMovement>> {
        self.check_read()?;
        let mut rows = self.movements.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        for row in &mut rows {
            row.products = self.product_ref(row.product_id);
        }
        Ok(rows)
    }

    async fn insert_movement(&self, movement: &NewMovement) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        self.movements.lock().unwrap().push(InventoryMovement {
            id: Uuid::new_v4(),
            product_id: movement.product_id,
            movement_type: movement.movement_type,
            quantity: movement.quantity,
            unit_price: movement.unit_price,
            total_price: movement.total_price,
            reference: movement.reference.clone(),
            notes: movement.notes.clone(),
            created_by: movement.created_by,
            created_at: now,
            products: None,
        });
        Ok(())
    }

    async fn list_alerts(&self, filter: AlertFilter) -> AppResult<Vec<StockAlert>> {
        self.check_read()?;
        let mut rows: Vec<StockAlert> = self
            .alerts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| match filter {
                AlertFilter::Unresolved => !a.is_resolved,
                AlertFilter::All => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for row in &mut rows {
            row.products = self.product_ref(row.product_id);
        }
        Ok(rows)
    }

    async fn unresolved_alerts(&self) -> AppResult<Vec<StockAlert>> {
        self.check_read()?;
        Ok(self
            .alerts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !a.is_resolved)
            .cloned()
            .collect())
    }

    async fn resolve_alert(&self, id: Uuid) -> AppResult<()> {
        self.check_write()?;
        let now = self.tick();
        let mut rows = self.alerts.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
            row.is_resolved = true;
            row.resolved_at = Some(now);
        }
        Ok(())
    }
}

/// Notifier that records every call and answers scripted confirmations
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<(String, String)>>,
    pub errors: Mutex<Vec<(String, String)>>,
    /// Scripted confirmation answers, consumed front-first; defaults to yes
    pub confirm_answers: Mutex<VecDeque<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_next_confirm(&self, answer: bool) {
        self.confirm_answers.lock().unwrap().push_back(answer);
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn last_error(&self) -> Option<(String, String)> {
        self.errors.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, text: &str) {
        self.successes
            .lock()
            .unwrap()
            .push((title.to_string(), text.to_string()));
    }

    fn error(&self, title: &str, text: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((title.to_string(), text.to_string()));
    }

    async fn confirm(&self, _title: &str, _text: &str) -> bool {
        self.confirm_answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(true)
    }
}

/// Fake auth backend with a single accepted credential pair
pub struct FakeAuth {
    pub email: String,
    pub password: String,
    user: AuthUser,
    session: RwLock<Option<Session>>,
    changes: broadcast::Sender<AuthChange>,
    /// Accounts registered through sign_up, with their metadata
    pub created: Mutex<Vec<(String, Option<UserMetadata>)>>,
    pub fail_sign_up: AtomicBool,
}

impl FakeAuth {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some("admin@example.com".to_string()),
            user_metadata: serde_json::Value::Null,
        };
        Self {
            email: "admin@example.com".to_string(),
            password: "correct-horse".to_string(),
            user,
            session: RwLock::new(None),
            changes,
            created: Mutex::new(Vec::new()),
            fail_sign_up: AtomicBool::new(false),
        }
    }

    /// Start with an existing session, as if restored from a previous run
    pub fn with_existing_session(mut self) -> Self {
        let session = Session {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            expires_in: Some(3600),
            refresh_token: None,
            user: self.user.clone(),
        };
        self.session = RwLock::new(Some(session));
        self
    }

    pub fn user(&self) -> AuthUser {
        self.user.clone()
    }
}

#[async_trait]
impl AuthBackend for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        if email != self.email || password != self.password {
            return Err(AppError::Auth("Invalid login credentials".to_string()));
        }
        let session = Session {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            expires_in: Some(3600),
            refresh_token: None,
            user: self.user.clone(),
        };
        *self.session.write().await = Some(session);
        let _ = self.changes.send(AuthChange::SignedIn(self.user.clone()));
        Ok(self.user.clone())
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        metadata: Option<UserMetadata>,
    ) -> AppResult<()> {
        if self.fail_sign_up.load(Ordering::SeqCst) {
            return Err(AppError::Auth("User already registered".to_string()));
        }
        self.created
            .lock()
            .unwrap()
            .push((email.to_string(), metadata));
        Ok(())
    }

    async fn sign_out(&self) -> AppResult<()> {
        *self.session.write().await = None;
        let _ = self.changes.send(AuthChange::SignedOut);
        Ok(())
    }

    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.changes.subscribe()
    }
}

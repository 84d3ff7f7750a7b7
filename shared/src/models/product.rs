//! Product models and stock classification

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::non_negative_money;

/// Name-only category reference produced by join expansion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub name: String,
}

/// Name-only supplier reference produced by join expansion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierRef {
    pub name: String,
}

/// A product row, optionally carrying embedded category/supplier names
/// when the query requested join expansion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub barcode: Option<String>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub current_stock: i32,
    pub min_stock: i32,
    pub max_stock: i32,
    pub unit: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<SupplierRef>,
}

impl Product {
    /// Value of the stock on hand at the current sale price
    pub fn inventory_value(&self) -> Decimal {
        Decimal::from(self.current_stock) * self.sale_price
    }

    /// Stock at or below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    /// Display classification of the stock level
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock <= 0 {
            StockStatus::Out
        } else if self.current_stock <= self.min_stock {
            StockStatus::Low
        } else if self.current_stock >= self.max_stock {
            StockStatus::Over
        } else {
            StockStatus::Normal
        }
    }

    /// Embedded category name, when the fetch expanded it
    pub fn category_name(&self) -> Option<&str> {
        self.categories.as_ref().map(|c| c.name.as_str())
    }

    /// Case-insensitive substring match over name and SKU
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.sku.to_lowercase().contains(&term)
    }
}

/// Display classification of a product's stock level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Out,
    Low,
    Over,
    Normal,
}

/// Form payload for creating or editing a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    #[validate(custom = "non_negative_money")]
    pub purchase_price: Decimal,
    #[validate(custom = "non_negative_money")]
    pub sale_price: Decimal,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub current_stock: i32,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub min_stock: i32,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub max_stock: i32,
    pub unit: String,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            sku: String::new(),
            barcode: None,
            category_id: None,
            supplier_id: None,
            purchase_price: Decimal::ZERO,
            sale_price: Decimal::ZERO,
            current_stock: 0,
            min_stock: 0,
            max_stock: 1000,
            unit: "unit".to_string(),
            is_active: true,
        }
    }
}

impl ProductForm {
    /// Prefill the editor from an existing row
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            sku: product.sku.clone(),
            barcode: product.barcode.clone(),
            category_id: product.category_id,
            supplier_id: product.supplier_id,
            purchase_price: product.purchase_price,
            sale_price: product.sale_price,
            current_stock: product.current_stock,
            min_stock: product.min_stock,
            max_stock: product.max_stock,
            unit: product.unit.clone(),
            is_active: product.is_active,
        }
    }
}

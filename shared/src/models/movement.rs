//! Inventory movement models
//!
//! Movements are immutable once created; the stored total price is fixed at
//! submission time and never reconciled against later product prices.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::non_negative_money;

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Entry,
    Exit,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entry => "entry",
            MovementType::Exit => "exit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Entry => "Entry",
            MovementType::Exit => "Exit",
        }
    }
}

/// Server-side filter for the movements list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovementFilter {
    #[default]
    All,
    Entries,
    Exits,
}

impl MovementFilter {
    /// The movement type to filter on, if any
    pub fn movement_type(&self) -> Option<MovementType> {
        match self {
            MovementFilter::All => None,
            MovementFilter::Entries => Some(MovementType::Entry),
            MovementFilter::Exits => Some(MovementType::Exit),
        }
    }
}

/// Minimal product columns embedded in movement and alert rows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<i32>,
}

/// A stock movement row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryMovement {
    pub id: Uuid,
    pub product_id: Uuid,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductRef>,
}

impl InventoryMovement {
    pub fn is_entry(&self) -> bool {
        self.movement_type == MovementType::Entry
    }

    pub fn is_exit(&self) -> bool {
        self.movement_type == MovementType::Exit
    }
}

/// Insert payload for a new movement; `total_price` carries the value fixed
/// at submission time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovement {
    pub product_id: Uuid,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

/// Form state for recording a movement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MovementForm {
    #[validate(required(message = "A product must be selected"))]
    pub product_id: Option<Uuid>,
    pub movement_type: MovementType,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    #[validate(custom = "non_negative_money")]
    pub unit_price: Decimal,
    pub reference: String,
    pub notes: String,
}

impl Default for MovementForm {
    fn default() -> Self {
        Self {
            product_id: None,
            movement_type: MovementType::Entry,
            quantity: 0,
            unit_price: Decimal::ZERO,
            reference: String::new(),
            notes: String::new(),
        }
    }
}

impl MovementForm {
    /// Live preview of the total while the user edits quantity and price
    pub fn total_price(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Build the insert payload, fixing the stored total at this moment.
    /// Returns `None` when no product has been selected.
    pub fn to_new_movement(&self, created_by: Option<Uuid>) -> Option<NewMovement> {
        let product_id = self.product_id?;
        Some(NewMovement {
            product_id,
            movement_type: self.movement_type,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price(),
            reference: none_if_empty(&self.reference),
            notes: none_if_empty(&self.notes),
            created_by,
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

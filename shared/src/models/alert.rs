//! Stock alert models
//!
//! Alerts are generated by the backend; this client only lists them and
//! marks them resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProductRef;
use crate::types::Tone;

/// Stock condition categories observed by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    LowStock,
    OutOfStock,
    Overstock,
    /// Fallback for wire values this client does not recognize
    #[serde(other)]
    Unknown,
}

impl AlertType {
    pub fn label(&self) -> &'static str {
        match self {
            AlertType::LowStock => "Low stock",
            AlertType::OutOfStock => "Out of stock",
            AlertType::Overstock => "Overstock",
            AlertType::Unknown => "Unknown",
        }
    }

    /// Display tone for the alert badge
    pub fn tone(&self) -> Tone {
        match self {
            AlertType::LowStock => Tone::Warning,
            AlertType::OutOfStock => Tone::Critical,
            AlertType::Overstock => Tone::Info,
            AlertType::Unknown => Tone::Neutral,
        }
    }
}

/// Server-side filter for the alerts list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertFilter {
    #[default]
    Unresolved,
    All,
}

/// A stock alert row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAlert {
    pub id: Uuid,
    pub product_id: Uuid,
    pub alert_type: AlertType,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductRef>,
}

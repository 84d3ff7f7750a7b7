//! WebAssembly module for the inventory dashboard
//!
//! Provides client-side computation for:
//! - Live movement total previews
//! - Stock status classification
//! - Chart bar scaling
//! - Form validation mirrors

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::reporting::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Live preview of a movement's total price while the form is edited
#[wasm_bindgen]
pub fn movement_total_price(quantity: i32, unit_price: f64) -> f64 {
    if quantity <= 0 || unit_price < 0.0 {
        return 0.0;
    }
    quantity as f64 * unit_price
}

/// Value of the stock on hand at the current sale price
#[wasm_bindgen]
pub fn stock_value(current_stock: i32, sale_price: f64) -> f64 {
    if current_stock <= 0 || sale_price < 0.0 {
        return 0.0;
    }
    current_stock as f64 * sale_price
}

/// Whether the low-stock indicator should show for a product row
#[wasm_bindgen]
pub fn is_low_stock(current_stock: i32, min_stock: i32) -> bool {
    current_stock <= min_stock
}

/// Classify a stock level for display: "out", "low", "over" or "normal"
#[wasm_bindgen]
pub fn stock_status(current_stock: i32, min_stock: i32, max_stock: i32) -> String {
    if current_stock <= 0 {
        "out".to_string()
    } else if current_stock <= min_stock {
        "low".to_string()
    } else if current_stock >= max_stock {
        "over".to_string()
    } else {
        "normal".to_string()
    }
}

/// Width of a chart bar as a percentage of the largest bucket; a zero
/// maximum yields 0 rather than NaN
#[wasm_bindgen]
pub fn chart_bar_percentage(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    value / max * 100.0
}

/// Badge label for an alert type string, with a fallback for values the
/// client does not recognize
#[wasm_bindgen]
pub fn alert_label(alert_type: &str) -> String {
    match alert_type {
        "low_stock" => "Low stock".to_string(),
        "out_of_stock" => "Out of stock".to_string(),
        "overstock" => "Overstock".to_string(),
        other => other.to_string(),
    }
}

/// Total inventory value of a fetched product list (JSON array)
#[wasm_bindgen]
pub fn total_inventory_value(products_json: &str) -> Result<f64, JsValue> {
    let products: Vec<Product> = serde_json::from_str(products_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid products JSON: {}", e)))?;

    let total: Decimal = products.iter().map(Product::inventory_value).sum();
    Ok(total.to_string().parse().unwrap_or(0.0))
}

/// Mirror of the password rule enforced before submission
#[wasm_bindgen]
pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

/// Format a currency amount for display, e.g. `$7.50`
#[wasm_bindgen]
pub fn format_amount(amount: f64) -> String {
    let decimal = Decimal::try_from(amount).unwrap_or(Decimal::ZERO);
    shared::types::format_money(decimal)
}

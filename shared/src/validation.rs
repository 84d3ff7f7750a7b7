//! Validation utilities for the inventory dashboard
//!
//! Form-level constraints live on the form structs via `validator` derives;
//! the free functions here cover the checks those derives cannot express and
//! the rules shared with the browser bindings.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Currency amounts entered in forms may not be negative
pub fn non_negative_money(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("non_negative_money"));
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// The hosted auth service accepts passwords from 6 characters up
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// SKUs must be non-blank
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.trim().is_empty() {
        return Err("SKU is required");
    }
    Ok(())
}

/// Stock levels are whole, non-negative counts
pub fn validate_stock_level(stock: i32) -> Result<(), &'static str> {
    if stock < 0 {
        return Err("Stock cannot be negative");
    }
    Ok(())
}

/// Movement quantities must be strictly positive
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display tone attached to classified values (alert kinds, profit sign)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Critical,
    Neutral,
}

/// Format a currency amount for display, e.g. `$7.50`
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from_str("7.5").unwrap()), "$7.50");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::from_str("1262.5").unwrap()), "$1262.50");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(Decimal::from_str("-3.1").unwrap()), "$-3.10");
    }
}

//! Decimal helpers for string-encoded amounts.
//!
//! Trade units, prices and P&L are kept as the strings OANDA sends. These
//! helpers turn them into exact decimals when arithmetic is needed.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal string as sent by the API (e.g. `"-12.3456"`).
///
/// Returns `None` for empty or malformed input.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Format a decimal for a request body, dropping trailing zeros.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1.10250"), Some(Decimal::new(110250, 5)));
        assert_eq!(parse_decimal("-100"), Some(Decimal::new(-100, 0)));
        assert_eq!(parse_decimal(" 2.5 "), Some(Decimal::new(25, 1)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("ALL"), None);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Decimal::new(150000, 5)), "1.5");
        assert_eq!(format_decimal(Decimal::new(-1000, 0)), "-1000");
    }
}

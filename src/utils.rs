//! Small helpers shared by the builder and the corruption policy.

use crate::constants::corruption::WHITESPACE_PADDING;

/// Round to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wrap `text` in the padding used for whitespace defects.
pub fn pad_whitespace(text: &str) -> String {
    format!("{WHITESPACE_PADDING}{text}{WHITESPACE_PADDING}")
}

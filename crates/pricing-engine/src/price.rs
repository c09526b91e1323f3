//! Monetary values and the text parsing shared by every price input

use serde::{Deserialize, Serialize};

/// A monetary amount that may not have been supplied yet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Price {
    #[default]
    Unset,
    Value(f64),
}

impl Price {
    pub fn value(self) -> Option<f64> {
        match self {
            Price::Unset => None,
            Price::Value(v) => Some(v),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Price::Value(_))
    }

    /// Apply `f` to the amount, keeping `Unset` as is
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Price {
        match self {
            Price::Unset => Price::Unset,
            Price::Value(v) => Price::Value(f(v)),
        }
    }
}

/// Round to 2 decimal places (cents)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Drop every character that is not an ASCII digit or a dot
pub fn clean_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Parse the longest leading decimal number of cleaned input
///
/// `"12.5.3"` reads as 12.5, `"5."` as 5 and `".5"` as 0.5. Input with no
/// digit before the second dot (`"."`, `""`) has no number.
pub fn parse_leading_decimal(cleaned: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (idx, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    cleaned[..end].trim_end_matches('.').parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clean raw field text and parse it as a price
pub fn parse_price(raw: &str) -> Option<f64> {
    parse_leading_decimal(&clean_input(raw))
}

//! Values flowing through the dispatcher.
//!
//! The scheduler hands over either a bare number (already tweened) or a
//! string carrying units/keywords. Everything that reaches an element is
//! rendered through `Display`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Numeric view of the value. Text is read up to the first character that
    /// cannot continue a decimal literal, so `"10px"` yields `10.0`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(s) => leading_float(s),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s.as_str()),
            StyleValue::Number(_) => None,
        }
    }

    /// True for an empty text value, used to represent an unset transform slot.
    pub fn is_empty(&self) -> bool {
        matches!(self, StyleValue::Text(s) if s.is_empty())
    }
}

impl Default for StyleValue {
    fn default() -> Self {
        StyleValue::Text(String::new())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Number(v as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

/// Parse the longest leading decimal literal of `s` (after trimming).
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(StyleValue::from(10.0).to_string(), "10");
        assert_eq!(StyleValue::from(0.25).to_string(), "0.25");
        assert_eq!(StyleValue::from("12px").to_string(), "12px");
    }

    #[test]
    fn numeric_prefix_of_text() {
        assert_eq!(StyleValue::from("10px").as_number(), Some(10.0));
        assert_eq!(StyleValue::from("-2.5em").as_number(), Some(-2.5));
        assert_eq!(StyleValue::from(".5").as_number(), Some(0.5));
        assert_eq!(StyleValue::from("auto").as_number(), None);
        assert_eq!(StyleValue::from("-").as_number(), None);
    }

    #[test]
    fn untagged_json() {
        let v: StyleValue = serde_json::from_str("120").unwrap();
        assert_eq!(v, StyleValue::Number(120.0));
        let v: StyleValue = serde_json::from_str("\"45deg\"").unwrap();
        assert_eq!(v, StyleValue::Text("45deg".into()));
    }
}

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Monetary amount helpers for the single platform currency
///
/// Upstream services disagree on whether amounts are JSON numbers or
/// numeric strings; everything is funneled through `Decimal` here so the
/// aggregation engines never touch floating point for money.
pub struct Amount;

impl Amount {
    /// Extract a decimal amount from a JSON value
    ///
    /// Accepts numbers and numeric strings. Returns `None` for anything
    /// else; amount-like fields in the normalizer map that to zero.
    pub fn from_value(value: &Value) -> Option<Decimal> {
        match value {
            Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
            Value::String(s) if !s.trim().is_empty() => Decimal::from_str(s.trim()).ok(),
            _ => None,
        }
    }

    /// Extract an amount, defaulting absent or unparseable values to zero
    pub fn from_value_or_zero(value: Option<&Value>) -> Decimal {
        value.and_then(Self::from_value).unwrap_or(Decimal::ZERO)
    }
}

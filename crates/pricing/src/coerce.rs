//! Input coercion for form-style quantities and prices.
//!
//! Blank or invalid input is never an error: it becomes `0`. The same rules
//! apply to text typed by a user and to loosely-typed JSON from the backend.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a decimal quantity or price.
///
/// Accepts a decimal comma (`"12,5"`). Empty, non-numeric, non-finite and
/// negative input all become `0.0`.
pub fn coerce_area(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().map(sanitize).unwrap_or(0.0)
}

/// Coerce a unit count. Fractions truncate toward zero.
pub fn coerce_count(raw: &str) -> u32 {
    count_from_f64(coerce_area(raw))
}

pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub(crate) fn count_from_f64(value: f64) -> u32 {
    let value = sanitize(value).trunc();
    if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

fn amount_from_value(value: Option<Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => sanitize(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => coerce_area(&s),
        _ => 0.0,
    }
}

/// `deserialize_with` helper: missing, null, string or number → coerced `f64`.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(amount_from_value(value))
}

/// `deserialize_with` helper for unit counts.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(count_from_f64(amount_from_value(value)))
}

//! Field supply policy and coercion
//!
//! Write bodies arrive as loose JSON. Whether a field counts as
//! "supplied" depends on the field: some are checked for mere presence
//! of the key, others must also be truthy (non-null, non-zero,
//! non-empty). The store's validation rules mix both checks on purpose,
//! so the policy lives here as an explicit, test-covered enum instead
//! of being scattered through the profiles.

use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// How a field counts as supplied in a write body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supply {
    /// The key exists, whatever its value (so `0`, `""` and `null` count).
    Present,
    /// The key exists and the value is truthy (`null`, `false`, `0`,
    /// `NaN` and `""` do not count).
    Truthy,
}

/// Returns true when `value` counts as supplied under `policy`.
pub fn supplied(value: Option<&Value>, policy: Supply) -> bool {
    match (value, policy) {
        (None, _) => false,
        (Some(_), Supply::Present) => true,
        (Some(v), Supply::Truthy) => truthy(v),
    }
}

/// Truthiness of a JSON value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extracts a string field, trimmed of surrounding whitespace.
///
/// A non-string value for a string field is a client error.
pub fn trimmed_str(field: &str, value: &Value) -> StoreResult<String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(StoreError::invalid(format!(
            "field '{}' must be a string",
            field
        ))),
    }
}

/// Coerces a JSON value to a number.
///
/// Numbers pass through, strings are trimmed and parsed (empty string
/// is 0, unparsable is NaN), null is 0, booleans are 0/1. Anything
/// else is NaN. NaN is never rejected here; it flows into the record.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

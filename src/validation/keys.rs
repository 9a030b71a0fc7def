//! Key validation for mappings under construction
//!
//! A candidate key is accepted only when it is a string or a number and its
//! string form is not already present in the accumulator.

use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use serde_json::{Map, Number, Value};

/// Render a key the way it will be stored in the mapping.
///
/// Returns `None` for values that cannot act as keys.
pub fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral floats lose their fractional part so `1.0` and `1` collide.
fn number_key(n: &Number) -> String {
    match n.as_f64() {
        // adding zero folds -0.0 into 0.0
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f + 0.0),
        _ => n.to_string(),
    }
}

/// Validate a candidate key against the mapping built so far.
///
/// On success the stored form of the key is returned, ready for insertion.
pub fn validate_key(key: &Value, accumulator: &Map<String, Value>) -> ConversionResult<String> {
    let key = key_string(key).ok_or(ConversionError::InvalidKeyType)?;

    if accumulator.contains_key(&key) {
        return Err(ConversionError::DuplicateKey { key });
    }

    Ok(key)
}

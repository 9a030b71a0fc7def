//! Key/value records exchanged with user callbacks

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single key and its value.
///
/// Object entries are handed to array mappers and sorters in this form, and
/// object mappers return it to name the entry they want inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: Value,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key as text, if it is a string
    pub fn key_str(&self) -> Option<&str> {
        self.key.as_str()
    }
}

impl From<(String, Value)> for KeyValue {
    fn from((key, value): (String, Value)) -> Self {
        Self {
            key: Value::String(key),
            value,
        }
    }
}

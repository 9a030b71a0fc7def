//! Array/object conversions for JSON values
//!
//! Converts arrays into insertion-ordered objects and objects into arrays,
//! with one selectable mapping strategy per call.
//!
//! ```
//! use obrray::{to_array, to_object, ArrayOptions, ObjectOptions};
//! use serde_json::{json, Value};
//!
//! let pairs = to_array(json!({"a": 1, "b": 2}), ArrayOptions::new().with_key_and_value_pairs())?;
//! assert_eq!(Value::Array(pairs.clone()), json!([["a", 1], ["b", 2]]));
//!
//! let object = to_object(Value::Array(pairs), ObjectOptions::new().with_key_and_value_pairs())?;
//! assert_eq!(Value::Object(object), json!({"a": 1, "b": 2}));
//! # Ok::<(), obrray::ConversionError>(())
//! ```

pub mod conversion;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use conversion::{
    to_array, to_object, ArrayMapper, ArrayOptions, ArrayToObjectConverter, KeyValue, Mapper,
    ObjectMapper, ObjectOptions, ObjectToArrayConverter, Sorter,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};

use serde_json::{Map, Value};

/// Convert an array into an object keyed by item position
///
/// ```
/// use serde_json::{json, Value};
///
/// let object = obrray::convert_to_object(json!([11, 22, 33]))?;
/// assert_eq!(Value::Object(object), json!({"0": 11, "1": 22, "2": 33}));
/// # Ok::<(), obrray::ConversionError>(())
/// ```
pub fn convert_to_object(input: Value) -> ConversionResult<Map<String, Value>> {
    to_object(input, ObjectOptions::default())
}

/// Convert an object into the array of its values
///
/// ```
/// use serde_json::json;
///
/// let values = obrray::convert_to_array(json!({"a": 1, "b": 2}))?;
/// assert_eq!(values, vec![json!(1), json!(2)]);
/// # Ok::<(), obrray::ConversionError>(())
/// ```
pub fn convert_to_array(input: Value) -> ConversionResult<Vec<Value>> {
    to_array(input, ArrayOptions::default())
}

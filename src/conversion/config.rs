//! Configuration options for array/object conversions
//!
//! Both option records can be built in code with the `with_*` methods or
//! loaded from a JSON options bag. Callbacks are only attachable in code.

use crate::conversion::record::KeyValue;
use crate::conversion::ConversionResult;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;

/// An option that is either a plain flag or a set of sub-settings.
///
/// Supplying sub-settings always enables the option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Enabled(bool),
    Custom(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Toggle::Enabled(false)
    }
}

impl<T: Default> Toggle<T> {
    pub fn is_enabled(&self) -> bool {
        match self {
            Toggle::Enabled(enabled) => *enabled,
            Toggle::Custom(_) => true,
        }
    }

    /// Resolve the sub-settings of an enabled option
    pub fn into_settings(self) -> Option<T> {
        match self {
            Toggle::Enabled(true) => Some(T::default()),
            Toggle::Enabled(false) => None,
            Toggle::Custom(settings) => Some(settings),
        }
    }
}

/// Positions of the key and the value inside each pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairIndices {
    pub key_index: usize,
    pub value_index: usize,
}

impl Default for PairIndices {
    fn default() -> Self {
        Self {
            key_index: 0,
            value_index: 1,
        }
    }
}

impl PairIndices {
    pub fn new(key_index: usize, value_index: usize) -> Self {
        Self {
            key_index,
            value_index,
        }
    }

    /// Shortest pair that still holds both positions
    pub fn min_pair_len(&self) -> usize {
        self.key_index.max(self.value_index) + 1
    }
}

/// Property names of key/value records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyNames {
    pub key_property: String,
    pub value_property: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            key_property: "key".to_string(),
            value_property: "value".to_string(),
        }
    }
}

impl PropertyNames {
    pub fn new(key_property: impl Into<String>, value_property: impl Into<String>) -> Self {
        Self {
            key_property: key_property.into(),
            value_property: value_property.into(),
        }
    }
}

type Callback<'a, I, A, O> = Box<dyn FnMut(&I, &mut A) -> Option<O> + 'a>;

/// User callback invoked once per input item.
///
/// The callback sees the item and the accumulator built so far. It may return
/// a value for the converter to insert, push into the accumulator itself, or
/// both. Returning `None` inserts nothing.
pub struct Mapper<'a, I, A, O> {
    callback: Callback<'a, I, A, O>,
}

impl<'a, I, A, O> Mapper<'a, I, A, O> {
    /// Callback that may both return a value and mutate the accumulator
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&I, &mut A) -> Option<O> + 'a,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Callback that only returns values
    pub fn returning<F>(mut callback: F) -> Self
    where
        F: FnMut(&I) -> Option<O> + 'a,
    {
        Self::new(move |item, _| callback(item))
    }

    /// Callback that writes straight into the accumulator
    pub fn in_place<F>(mut callback: F) -> Self
    where
        F: FnMut(&I, &mut A) + 'a,
    {
        Self::new(move |item, acc| {
            callback(item, acc);
            None
        })
    }

    pub(crate) fn call(&mut self, item: &I, acc: &mut A) -> Option<O> {
        (self.callback)(item, acc)
    }
}

impl<I, A, O> fmt::Debug for Mapper<'_, I, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mapper(..)")
    }
}

/// Mapper used when building an object from array items
pub type ObjectMapper<'a> = Mapper<'a, Value, Map<String, Value>, KeyValue>;

/// Mapper used when building an array from object entries
pub type ArrayMapper<'a> = Mapper<'a, KeyValue, Vec<Value>, Value>;

/// Comparator over key/value records, applied before any mapping.
///
/// Entries are merge-sorted stably. A comparator that is not a total order
/// only makes the resulting order unspecified; it never causes a panic.
pub struct Sorter<'a> {
    compare: Box<dyn FnMut(&KeyValue, &KeyValue) -> Ordering + 'a>,
}

impl<'a> Sorter<'a> {
    pub fn new<F>(compare: F) -> Self
    where
        F: FnMut(&KeyValue, &KeyValue) -> Ordering + 'a,
    {
        Self {
            compare: Box::new(compare),
        }
    }

    pub(crate) fn compare(&mut self, a: &KeyValue, b: &KeyValue) -> Ordering {
        (self.compare)(a, b)
    }
}

impl fmt::Debug for Sorter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sorter(..)")
    }
}

/// A `null` option is treated like an absent one
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Options for converting an array into an object
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectOptions<'a> {
    /// Use every item as both key and value
    #[serde(deserialize_with = "null_as_default")]
    pub same_key_and_value: bool,
    /// Items are `[key, value]` pairs
    #[serde(deserialize_with = "null_as_default")]
    pub key_and_value_pairs: Toggle<PairIndices>,
    /// Items are `[value, key]` pairs
    #[serde(deserialize_with = "null_as_default")]
    pub inverted_key_and_value_pairs: bool,
    /// Items are `{key, value}` records
    #[serde(deserialize_with = "null_as_default")]
    pub key_and_value_objects: Toggle<PropertyNames>,
    #[serde(skip)]
    pub mapper: Option<ObjectMapper<'a>>,
}

impl<'a> ObjectOptions<'a> {
    /// Create options that select the default conversion
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON options bag; unknown names are ignored
    pub fn from_json(options: &Value) -> ConversionResult<Self> {
        Ok(Self::deserialize(options)?)
    }

    pub fn with_same_key_and_value(mut self) -> Self {
        self.same_key_and_value = true;
        self
    }

    pub fn with_key_and_value_pairs(mut self) -> Self {
        self.key_and_value_pairs = Toggle::Enabled(true);
        self
    }

    /// Read keys and values from custom pair positions
    pub fn with_pair_indices(mut self, key_index: usize, value_index: usize) -> Self {
        self.key_and_value_pairs = Toggle::Custom(PairIndices::new(key_index, value_index));
        self
    }

    pub fn with_inverted_key_and_value_pairs(mut self) -> Self {
        self.inverted_key_and_value_pairs = true;
        self
    }

    pub fn with_key_and_value_objects(mut self) -> Self {
        self.key_and_value_objects = Toggle::Enabled(true);
        self
    }

    /// Read keys and values from custom record properties
    pub fn with_property_names(
        mut self,
        key_property: impl Into<String>,
        value_property: impl Into<String>,
    ) -> Self {
        self.key_and_value_objects =
            Toggle::Custom(PropertyNames::new(key_property, value_property));
        self
    }

    pub fn with_mapper(mut self, mapper: ObjectMapper<'a>) -> Self {
        self.mapper = Some(mapper);
        self
    }
}

/// Options for converting an object into an array
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrayOptions<'a> {
    /// Emit keys instead of values
    #[serde(deserialize_with = "null_as_default")]
    pub use_keys: bool,
    /// Emit `[key, value]` pairs
    #[serde(deserialize_with = "null_as_default")]
    pub to_key_and_value_pairs: bool,
    /// Emit `[value, key]` pairs
    #[serde(deserialize_with = "null_as_default")]
    pub to_inverted_key_and_value_pairs: bool,
    /// Emit `{key, value}` records
    #[serde(deserialize_with = "null_as_default")]
    pub to_key_and_value_objects: Toggle<PropertyNames>,
    #[serde(skip)]
    pub mapper: Option<ArrayMapper<'a>>,
    /// Never conflicts with the mapping options
    #[serde(skip)]
    pub sorter: Option<Sorter<'a>>,
}

impl<'a> ArrayOptions<'a> {
    /// Create options that select the default conversion
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON options bag; unknown names are ignored
    pub fn from_json(options: &Value) -> ConversionResult<Self> {
        Ok(Self::deserialize(options)?)
    }

    pub fn with_use_keys(mut self) -> Self {
        self.use_keys = true;
        self
    }

    pub fn with_key_and_value_pairs(mut self) -> Self {
        self.to_key_and_value_pairs = true;
        self
    }

    pub fn with_inverted_key_and_value_pairs(mut self) -> Self {
        self.to_inverted_key_and_value_pairs = true;
        self
    }

    pub fn with_key_and_value_objects(mut self) -> Self {
        self.to_key_and_value_objects = Toggle::Enabled(true);
        self
    }

    /// Emit records with custom property names
    pub fn with_property_names(
        mut self,
        key_property: impl Into<String>,
        value_property: impl Into<String>,
    ) -> Self {
        self.to_key_and_value_objects =
            Toggle::Custom(PropertyNames::new(key_property, value_property));
        self
    }

    pub fn with_mapper(mut self, mapper: ArrayMapper<'a>) -> Self {
        self.mapper = Some(mapper);
        self
    }

    pub fn with_sorter(mut self, sorter: Sorter<'a>) -> Self {
        self.sorter = Some(sorter);
        self
    }
}

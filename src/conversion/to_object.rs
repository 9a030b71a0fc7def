//! Array to object strategies

use crate::conversion::config::{ObjectMapper, PairIndices, PropertyNames};
use crate::conversion::strategy::ObjectStrategy;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::validation::{validate_key, validate_key_value_pairs};
use serde_json::{Map, Value};

impl ObjectStrategy<'_> {
    /// Run the strategy over `items`, producing a fresh object
    pub fn apply(self, items: Vec<Value>) -> ConversionResult<Map<String, Value>> {
        match self {
            ObjectStrategy::Indexed => Ok(indexed(items)),
            ObjectStrategy::SameKeyAndValue => same_key_and_value(items),
            ObjectStrategy::KeyAndValuePairs(indices) => from_pairs(items, indices),
            ObjectStrategy::InvertedKeyAndValuePairs => from_pairs(items, PairIndices::new(1, 0)),
            ObjectStrategy::KeyAndValueObjects(names) => from_records(items, &names),
            ObjectStrategy::Mapper(mapper) => from_mapper(items, mapper),
        }
    }
}

fn indexed(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

fn same_key_and_value(items: Vec<Value>) -> ConversionResult<Map<String, Value>> {
    let mut obj = Map::with_capacity(items.len());
    for item in items {
        let key = validate_key(&item, &obj)?;
        obj.insert(key, item);
    }
    Ok(obj)
}

fn from_pairs(items: Vec<Value>, indices: PairIndices) -> ConversionResult<Map<String, Value>> {
    validate_key_value_pairs(&items, &indices)?;

    let mut obj = Map::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Array(mut pair) = item else {
            return Err(ConversionError::MalformedPair { index });
        };

        let key = pair
            .get(indices.key_index)
            .ok_or(ConversionError::MalformedPair { index })?;
        let key = validate_key(key, &obj)?;
        let value = pair
            .get_mut(indices.value_index)
            .map(Value::take)
            .ok_or(ConversionError::MalformedPair { index })?;

        obj.insert(key, value);
    }
    Ok(obj)
}

fn from_records(items: Vec<Value>, names: &PropertyNames) -> ConversionResult<Map<String, Value>> {
    let mut obj = Map::with_capacity(items.len());
    for item in items {
        let key = item.get(&names.key_property).unwrap_or(&Value::Null);
        let key = validate_key(key, &obj)?;
        let value = match item {
            Value::Object(mut record) => record.remove(&names.value_property),
            _ => None,
        };

        obj.insert(key, value.unwrap_or(Value::Null));
    }
    Ok(obj)
}

fn from_mapper(
    items: Vec<Value>,
    mut mapper: ObjectMapper<'_>,
) -> ConversionResult<Map<String, Value>> {
    let mut obj = Map::new();
    for item in &items {
        if let Some(entry) = mapper.call(item, &mut obj) {
            let key = validate_key(&entry.key, &obj)?;
            obj.insert(key, entry.value);
        }
    }
    Ok(obj)
}

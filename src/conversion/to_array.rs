//! Object to array strategies

use crate::conversion::config::{ArrayMapper, PropertyNames, Sorter};
use crate::conversion::record::KeyValue;
use crate::conversion::strategy::{ArrayPlan, ArrayStrategy};
use serde_json::{Map, Value};
use std::cmp::Ordering;

impl ArrayPlan<'_> {
    /// Turn an object into its entries, order them, then run the strategy
    pub fn apply(self, object: Map<String, Value>) -> Vec<Value> {
        let mut entries: Vec<KeyValue> = object.into_iter().map(KeyValue::from).collect();

        if let Some(mut sorter) = self.sorter {
            entries = sort_entries(entries, &mut sorter);
        }

        self.strategy.apply(entries)
    }
}

/// Stable merge sort that tolerates comparators which are not a total order.
///
/// An inconsistent comparator yields some permutation of the entries; it
/// never drops, duplicates, or panics.
fn sort_entries(mut entries: Vec<KeyValue>, sorter: &mut Sorter<'_>) -> Vec<KeyValue> {
    if entries.len() <= 1 {
        return entries;
    }

    let right = entries.split_off(entries.len() / 2);
    let left = sort_entries(entries, sorter);
    let right = sort_entries(right, sorter);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        if sorter.compare(a, b) == Ordering::Greater {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

impl ArrayStrategy<'_> {
    pub fn apply(self, entries: Vec<KeyValue>) -> Vec<Value> {
        match self {
            ArrayStrategy::Values => entries.into_iter().map(|entry| entry.value).collect(),
            ArrayStrategy::Keys => entries.into_iter().map(|entry| entry.key).collect(),
            ArrayStrategy::KeyAndValuePairs => entries
                .into_iter()
                .map(|entry| Value::Array(vec![entry.key, entry.value]))
                .collect(),
            ArrayStrategy::InvertedKeyAndValuePairs => entries
                .into_iter()
                .map(|entry| Value::Array(vec![entry.value, entry.key]))
                .collect(),
            ArrayStrategy::KeyAndValueObjects(names) => to_records(entries, &names),
            ArrayStrategy::Mapper(mapper) => from_mapper(&entries, mapper),
        }
    }
}

fn to_records(entries: Vec<KeyValue>, names: &PropertyNames) -> Vec<Value> {
    entries
        .into_iter()
        .map(|entry| {
            let mut record = Map::with_capacity(2);
            record.insert(names.key_property.clone(), entry.key);
            record.insert(names.value_property.clone(), entry.value);
            Value::Object(record)
        })
        .collect()
}

fn from_mapper(entries: &[KeyValue], mut mapper: ArrayMapper<'_>) -> Vec<Value> {
    let mut arr = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(item) = mapper.call(entry, &mut arr) {
            arr.push(item);
        }
    }
    arr
}

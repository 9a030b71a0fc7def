//! Unit tests for object-to-array conversion
//!
//! Tests cover:
//! - Default value extraction
//! - Every array-direction strategy
//! - Sorting before mapping
//! - Both mapper calling conventions

use obrray::{to_array, ArrayOptions, KeyValue, Mapper, Sorter};
use serde_json::{json, Value};
use std::cmp::Ordering;

#[cfg(test)]
mod to_array_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn godfather() -> Value {
        json!({
            "name": "Vito",
            "middleName": "Andolini",
            "surname": "Corleone"
        })
    }

    fn convert(input: Value, options: ArrayOptions<'_>) -> Value {
        Value::Array(to_array(input, options).unwrap())
    }

    fn by_value(a: &KeyValue, b: &KeyValue) -> Ordering {
        a.value.as_str().cmp(&b.value.as_str())
    }

    #[test]
    fn test_default_conversion() {
        assert_eq!(convert(json!({}), ArrayOptions::new()), json!([]));
        assert_eq!(convert(json!({"whatever": 123}), ArrayOptions::new()), json!([123]));
        assert_eq!(
            convert(json!({"name": "Vito", "surname": "Corleone"}), ArrayOptions::new()),
            json!(["Vito", "Corleone"])
        );
    }

    #[test]
    fn test_default_follows_insertion_order() {
        assert_eq!(
            convert(
                json!({"foo": "bar", "2": "Corleone", "1": "Andolini", "0": "Vito"}),
                ArrayOptions::new()
            ),
            json!(["bar", "Corleone", "Andolini", "Vito"])
        );
    }

    #[test]
    fn test_array_input_is_returned() {
        assert_eq!(
            convert(json!([11, 22, 33]), ArrayOptions::new()),
            json!([11, 22, 33])
        );
    }

    #[test]
    fn test_use_keys() {
        let input = json!({"name": "Vito", "surname": "Corleone"});
        assert_eq!(
            convert(input, ArrayOptions::new().with_use_keys()),
            json!(["name", "surname"])
        );
    }

    #[test]
    fn test_key_and_value_pairs() {
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_key_and_value_pairs()),
            json!([["name", "Vito"], ["middleName", "Andolini"], ["surname", "Corleone"]])
        );
    }

    #[test]
    fn test_inverted_key_and_value_pairs() {
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_inverted_key_and_value_pairs()),
            json!([["Vito", "name"], ["Andolini", "middleName"], ["Corleone", "surname"]])
        );
    }

    #[test]
    fn test_key_and_value_objects() {
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_key_and_value_objects()),
            json!([
                {"key": "name", "value": "Vito"},
                {"key": "middleName", "value": "Andolini"},
                {"key": "surname", "value": "Corleone"}
            ])
        );
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_property_names("k", "v")),
            json!([
                {"k": "name", "v": "Vito"},
                {"k": "middleName", "v": "Andolini"},
                {"k": "surname", "v": "Corleone"}
            ])
        );
    }

    #[test]
    fn test_sorter() {
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_sorter(Sorter::new(by_value))),
            json!(["Andolini", "Corleone", "Vito"])
        );
    }

    #[test]
    fn test_sorter_with_mapping_option() {
        let options = ArrayOptions::new()
            .with_sorter(Sorter::new(by_value))
            .with_key_and_value_pairs();
        assert_eq!(
            convert(godfather(), options),
            json!([["middleName", "Andolini"], ["surname", "Corleone"], ["name", "Vito"]])
        );
    }

    #[test]
    fn test_sorter_with_mapper_sees_sorted_entries() {
        let options = ArrayOptions::new()
            .with_sorter(Sorter::new(|a, b| by_value(b, a)))
            .with_mapper(Mapper::returning(|entry: &KeyValue| Some(entry.key.clone())));
        assert_eq!(
            convert(godfather(), options),
            json!(["name", "surname", "middleName"])
        );
    }

    #[test]
    fn test_inconsistent_sorter_does_not_abort() {
        let mut calls: u32 = 0;
        let sorter = Sorter::new(|_, _| {
            calls = calls.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match calls >> 16 & 3 {
                0 => Ordering::Less,
                1 => Ordering::Greater,
                _ => Ordering::Equal,
            }
        });
        let object: serde_json::Map<String, Value> =
            (0..200).map(|i| (format!("key{}", i), json!(i))).collect();

        let result = to_array(
            Value::Object(object),
            ArrayOptions::new().with_use_keys().with_sorter(sorter),
        )
        .unwrap();

        assert_eq!(result.len(), 200);
        let mut keys: Vec<String> = result
            .iter()
            .filter_map(|key| key.as_str().map(str::to_string))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 200);
    }

    #[test]
    fn test_returning_mapper() {
        let mapper = Mapper::returning(|entry: &KeyValue| {
            Some(json!(format!(
                "The {} is \"{}\"",
                entry.key_str()?,
                entry.value.as_str()?
            )))
        });
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_mapper(mapper)),
            json!([
                "The name is \"Vito\"",
                "The middleName is \"Andolini\"",
                "The surname is \"Corleone\""
            ])
        );
    }

    #[test]
    fn test_in_place_mapper() {
        let mapper = Mapper::in_place(|entry: &KeyValue, acc: &mut Vec<Value>| {
            if let (Some(key), Some(value)) = (entry.key_str(), entry.value.as_str()) {
                acc.push(json!(format!("The {} is \"{}\"", key, value)));
            }
            acc.push(json!("...an additional item..."));
        });
        assert_eq!(
            convert(godfather(), ArrayOptions::new().with_mapper(mapper)),
            json!([
                "The name is \"Vito\"",
                "...an additional item...",
                "The middleName is \"Andolini\"",
                "...an additional item...",
                "The surname is \"Corleone\"",
                "...an additional item..."
            ])
        );
    }

    #[test]
    fn test_no_op_mapper_yields_empty_array() {
        let mapper = Mapper::returning(|_: &KeyValue| None);
        assert_eq!(convert(godfather(), ArrayOptions::new().with_mapper(mapper)), json!([]));
    }

    #[test]
    fn test_unknown_options_fall_back_to_default() {
        let options = ArrayOptions::from_json(&json!({"someInvalidOption": true})).unwrap();
        assert_eq!(
            convert(godfather(), options),
            json!(["Vito", "Andolini", "Corleone"])
        );
    }
}

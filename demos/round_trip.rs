//! Converts a small object to pairs and back, logging strategy selection.
//!
//! Run with `RUST_LOG=debug cargo run --example round_trip`.

use obrray::{to_array, to_object, ArrayOptions, KeyValue, Mapper, ObjectOptions, Sorter};
use serde_json::{json, Value};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let crew = json!({
        "captain": "Zaphod",
        "navigator": "Trillian",
        "hitchhiker": "Arthur"
    });

    let pairs = to_array(
        crew.clone(),
        ArrayOptions::new()
            .with_key_and_value_pairs()
            .with_sorter(Sorter::new(|a, b| a.key_str().cmp(&b.key_str()))),
    )?;
    println!("sorted pairs: {}", Value::Array(pairs.clone()));

    let rebuilt = to_object(
        Value::Array(pairs),
        ObjectOptions::new().with_key_and_value_pairs(),
    )?;
    println!("rebuilt:      {}", Value::Object(rebuilt));

    let records = to_array(crew, ArrayOptions::new().with_key_and_value_objects())?;
    let by_name = to_object(
        Value::Array(records),
        ObjectOptions::new().with_mapper(Mapper::returning(|record: &Value| {
            Some(KeyValue::new(record["value"].clone(), record["key"].clone()))
        })),
    )?;
    println!("by name:      {}", Value::Object(by_name));

    // callbacks cannot come from JSON, so "mapper" here is just an unknown name
    let options = ObjectOptions::from_json(&json!({
        "sameKeyAndValue": true,
        "mapper": "ignored"
    }))?;
    println!("{}", Value::Object(to_object(json!(["don't", "panic"]), options)?));

    Ok(())
}

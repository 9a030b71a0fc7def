//! Public converters between arrays and objects

use crate::conversion::config::{ArrayOptions, ObjectOptions};
use crate::conversion::strategy::{ArrayPlan, ObjectStrategy};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, Operation};
use log::trace;
use serde_json::{Map, Value};

/// Converts arrays into objects with a strategy fixed at construction
#[derive(Debug)]
pub struct ArrayToObjectConverter<'a> {
    strategy: ObjectStrategy<'a>,
}

impl<'a> ArrayToObjectConverter<'a> {
    /// Create a converter, rejecting conflicting options up front
    pub fn new(options: ObjectOptions<'a>) -> ConversionResult<Self> {
        let strategy = ObjectStrategy::select(options)?;
        Ok(Self { strategy })
    }

    /// Convert `input`, returning objects unchanged
    pub fn convert(self, input: Value) -> ConversionResult<Map<String, Value>> {
        match input {
            Value::Object(object) => Ok(object),
            Value::Array(items) => self.convert_items(items),
            _ => Err(ConversionError::invalid_input(Operation::ToObject)),
        }
    }

    /// Convert the items of an array
    pub fn convert_items(self, items: Vec<Value>) -> ConversionResult<Map<String, Value>> {
        trace!(
            "converting {} items to an object via {}",
            items.len(),
            self.strategy.name()
        );
        self.strategy.apply(items)
    }
}

/// Converts objects into arrays with a strategy fixed at construction
#[derive(Debug)]
pub struct ObjectToArrayConverter<'a> {
    plan: ArrayPlan<'a>,
}

impl<'a> ObjectToArrayConverter<'a> {
    /// Create a converter, rejecting conflicting options up front
    pub fn new(options: ArrayOptions<'a>) -> ConversionResult<Self> {
        let plan = ArrayPlan::select(options)?;
        Ok(Self { plan })
    }

    /// Convert `input`, returning arrays unchanged
    pub fn convert(self, input: Value) -> ConversionResult<Vec<Value>> {
        match input {
            Value::Array(items) => Ok(items),
            Value::Object(object) => Ok(self.convert_entries(object)),
            _ => Err(ConversionError::invalid_input(Operation::ToArray)),
        }
    }

    /// Convert the entries of an object
    pub fn convert_entries(self, object: Map<String, Value>) -> Vec<Value> {
        trace!(
            "converting {} entries to an array via {}",
            object.len(),
            self.plan.strategy.name()
        );
        self.plan.apply(object)
    }
}

/// Convert an array into an object.
///
/// An object input is returned as-is. The input shape is checked before the
/// options, so an object passes through even with conflicting options.
pub fn to_object(
    input: Value,
    options: ObjectOptions<'_>,
) -> ConversionResult<Map<String, Value>> {
    match input {
        Value::Object(object) => Ok(object),
        Value::Array(items) => ArrayToObjectConverter::new(options)?.convert_items(items),
        _ => Err(ConversionError::invalid_input(Operation::ToObject)),
    }
}

/// Convert an object into an array.
///
/// An array input is returned as-is. The input shape is checked before the
/// options, so an array passes through even with conflicting options.
pub fn to_array(input: Value, options: ArrayOptions<'_>) -> ConversionResult<Vec<Value>> {
    match input {
        Value::Array(items) => Ok(items),
        Value::Object(object) => {
            Ok(ObjectToArrayConverter::new(options)?.convert_entries(object))
        }
        _ => Err(ConversionError::invalid_input(Operation::ToArray)),
    }
}

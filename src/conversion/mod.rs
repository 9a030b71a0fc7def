//! Array/object conversion module
//!
//! This module contains the option records, strategy selection, and the
//! strategies for both directions.

pub mod config;
pub mod engine;
pub mod record;
pub mod strategy;
pub mod to_array;
pub mod to_object;

pub use config::{
    ArrayMapper, ArrayOptions, Mapper, ObjectMapper, ObjectOptions, PairIndices, PropertyNames,
    Sorter, Toggle,
};
pub use engine::{to_array, to_object, ArrayToObjectConverter, ObjectToArrayConverter};
pub use record::KeyValue;
pub use strategy::{ArrayPlan, ArrayStrategy, ObjectStrategy};

/// Result type for conversion operations
pub use crate::error::ConversionResult;

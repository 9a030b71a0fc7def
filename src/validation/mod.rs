//! Input validation shared by the object-producing strategies

pub mod keys;
pub mod pairs;

pub use keys::{key_string, validate_key};
pub use pairs::validate_key_value_pairs;

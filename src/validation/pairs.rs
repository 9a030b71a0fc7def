//! Shape validation for arrays of key-value pairs

use crate::conversion::{ConversionResult, PairIndices};
use crate::error::ConversionError;
use serde_json::Value;

/// Check that every item is an array long enough to hold both positions.
///
/// The whole input is checked before anything is inserted, so a malformed
/// item never leaves a half-built mapping behind.
pub fn validate_key_value_pairs(items: &[Value], indices: &PairIndices) -> ConversionResult<()> {
    let min_len = indices.min_pair_len();

    match items
        .iter()
        .position(|item| !item.as_array().is_some_and(|pair| pair.len() >= min_len))
    {
        Some(index) => Err(ConversionError::MalformedPair { index }),
        None => Ok(()),
    }
}

//! Strategy selection
//!
//! An options record is parsed exactly once into a single strategy value.
//! Enabling more than one mapping option of the same family is rejected here,
//! so the strategies themselves never see conflicting settings.

use crate::conversion::config::{
    ArrayMapper, ArrayOptions, ObjectMapper, ObjectOptions, PairIndices, PropertyNames, Sorter,
};
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use log::debug;

/// How array items become object entries
#[derive(Debug)]
pub enum ObjectStrategy<'a> {
    /// Item positions become the keys
    Indexed,
    SameKeyAndValue,
    KeyAndValuePairs(PairIndices),
    InvertedKeyAndValuePairs,
    KeyAndValueObjects(PropertyNames),
    Mapper(ObjectMapper<'a>),
}

impl<'a> ObjectStrategy<'a> {
    /// Pick the single strategy enabled by `options`.
    ///
    /// No enabled option selects [`ObjectStrategy::Indexed`].
    pub fn select(options: ObjectOptions<'a>) -> ConversionResult<Self> {
        let enabled = enabled_options(&[
            ("sameKeyAndValue", options.same_key_and_value),
            ("keyAndValuePairs", options.key_and_value_pairs.is_enabled()),
            ("invertedKeyAndValuePairs", options.inverted_key_and_value_pairs),
            ("keyAndValueObjects", options.key_and_value_objects.is_enabled()),
            ("mapper", options.mapper.is_some()),
        ])?;

        let ObjectOptions {
            key_and_value_pairs,
            key_and_value_objects,
            mapper,
            ..
        } = options;

        let strategy = match enabled {
            Some("sameKeyAndValue") => Self::SameKeyAndValue,
            Some("invertedKeyAndValuePairs") => Self::InvertedKeyAndValuePairs,
            _ => {
                if let Some(indices) = key_and_value_pairs.into_settings() {
                    Self::KeyAndValuePairs(indices)
                } else if let Some(names) = key_and_value_objects.into_settings() {
                    Self::KeyAndValueObjects(names)
                } else if let Some(mapper) = mapper {
                    Self::Mapper(mapper)
                } else {
                    Self::Indexed
                }
            }
        };

        debug!("selected object strategy: {}", strategy.name());
        Ok(strategy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::SameKeyAndValue => "sameKeyAndValue",
            Self::KeyAndValuePairs(_) => "keyAndValuePairs",
            Self::InvertedKeyAndValuePairs => "invertedKeyAndValuePairs",
            Self::KeyAndValueObjects(_) => "keyAndValueObjects",
            Self::Mapper(_) => "mapper",
        }
    }
}

/// How object entries become array items
#[derive(Debug)]
pub enum ArrayStrategy<'a> {
    Values,
    Keys,
    KeyAndValuePairs,
    InvertedKeyAndValuePairs,
    KeyAndValueObjects(PropertyNames),
    Mapper(ArrayMapper<'a>),
}

impl ArrayStrategy<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::Keys => "useKeys",
            Self::KeyAndValuePairs => "toKeyAndValuePairs",
            Self::InvertedKeyAndValuePairs => "toInvertedKeyAndValuePairs",
            Self::KeyAndValueObjects(_) => "toKeyAndValueObjects",
            Self::Mapper(_) => "mapper",
        }
    }
}

/// Array strategy together with the optional entry ordering
#[derive(Debug)]
pub struct ArrayPlan<'a> {
    pub sorter: Option<Sorter<'a>>,
    pub strategy: ArrayStrategy<'a>,
}

impl<'a> ArrayPlan<'a> {
    /// Pick the single strategy enabled by `options`; the sorter rides along.
    ///
    /// No enabled option selects [`ArrayStrategy::Values`].
    pub fn select(options: ArrayOptions<'a>) -> ConversionResult<Self> {
        let enabled = enabled_options(&[
            ("useKeys", options.use_keys),
            ("toKeyAndValuePairs", options.to_key_and_value_pairs),
            ("toInvertedKeyAndValuePairs", options.to_inverted_key_and_value_pairs),
            ("toKeyAndValueObjects", options.to_key_and_value_objects.is_enabled()),
            ("mapper", options.mapper.is_some()),
        ])?;

        let ArrayOptions {
            to_key_and_value_objects,
            mapper,
            sorter,
            ..
        } = options;

        let strategy = match enabled {
            Some("useKeys") => ArrayStrategy::Keys,
            Some("toKeyAndValuePairs") => ArrayStrategy::KeyAndValuePairs,
            Some("toInvertedKeyAndValuePairs") => ArrayStrategy::InvertedKeyAndValuePairs,
            _ => {
                if let Some(names) = to_key_and_value_objects.into_settings() {
                    ArrayStrategy::KeyAndValueObjects(names)
                } else if let Some(mapper) = mapper {
                    ArrayStrategy::Mapper(mapper)
                } else {
                    ArrayStrategy::Values
                }
            }
        };

        debug!(
            "selected array strategy: {} (sorted: {})",
            strategy.name(),
            sorter.is_some()
        );
        Ok(Self { sorter, strategy })
    }
}

/// Name of the one enabled option, if any; two or more is a conflict.
fn enabled_options(family: &[(&'static str, bool)]) -> ConversionResult<Option<&'static str>> {
    let enabled: Vec<&'static str> = family
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    if enabled.len() > 1 {
        debug!("rejecting conflicting mapping options: {:?}", enabled);
        return Err(ConversionError::conflicting(enabled));
    }

    Ok(enabled.first().copied())
}

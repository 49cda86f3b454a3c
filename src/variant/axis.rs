use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::foundation::error::{MotifError, suggest};
use crate::variant::props::PropertySet;

/// Lookup failure for a single axis.
///
/// Surfaced to callers as [`MotifError::UnknownVariantOption`] by resolution.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("axis '{axis}' has no option '{option}'")]
pub struct UnknownOption {
    /// Axis that was searched.
    pub axis: String,
    /// Option that was not declared on it.
    pub option: String,
}

impl UnknownOption {
    /// Wrap into the caller-facing error, with a suggestion drawn from `axis`.
    pub fn into_variant_error(self, axis: &VariantAxis) -> MotifError {
        let suggestion = suggest(&self.option, axis.option_names());
        MotifError::UnknownVariantOption {
            axis: self.axis,
            value: self.option,
            suggestion,
        }
    }
}

/// A named, mutually exclusive set of options for one styling dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantAxis {
    name: String,
    options: IndexMap<String, PropertySet>,
    descriptions: BTreeMap<String, String>,
}

impl VariantAxis {
    /// Axis with no options yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
            descriptions: BTreeMap::new(),
        }
    }

    /// Build an axis from `(option, props)` pairs; a repeated option name keeps the last props.
    pub fn from_options<K, I>(name: impl Into<String>, options: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PropertySet)>,
    {
        let mut axis = Self::new(name);
        for (k, props) in options {
            axis.options.insert(k.into(), props);
        }
        axis
    }

    /// Add (or replace) one option.
    pub fn option_with(mut self, option: impl Into<String>, props: PropertySet) -> Self {
        self.options.insert(option.into(), props);
        self
    }

    /// Attach a human-readable description to an option.
    pub fn describe(mut self, option: impl Into<String>, text: impl Into<String>) -> Self {
        self.descriptions.insert(option.into(), text.into());
        self
    }

    /// Axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties of `option`.
    pub fn option(&self, option: &str) -> Result<&PropertySet, UnknownOption> {
        self.options.get(option).ok_or_else(|| UnknownOption {
            axis: self.name.clone(),
            option: option.to_string(),
        })
    }

    /// Whether `option` is declared.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    /// Option names in declaration order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// `(option, props)` pairs in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &PropertySet)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Description attached with [`describe`](Self::describe), if any.
    pub fn description(&self, option: &str) -> Option<&str> {
        self.descriptions.get(option).map(String::as_str)
    }

    pub(crate) fn descriptions(&self) -> &BTreeMap<String, String> {
        &self.descriptions
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the axis declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::{
    foundation::error::{MotifError, MotifResult},
    variant::{
        axis::VariantAxis,
        compound::CompoundRule,
        props::PropertySet,
        schema::{VariantSchema, validate},
    },
};

/// Builder for [`VariantSchema`](crate::VariantSchema).
///
/// Nothing is checked until [`build`](Self::build); the builder can be cloned and built any
/// number of times, each build producing an independent schema.
#[derive(Clone, Debug, Default)]
pub struct VariantBuilder {
    base: PropertySet,
    axes: IndexMap<String, VariantAxis>,
    defaults: BTreeMap<String, String>,
    compounds: Vec<CompoundRule>,
    vocabulary: Option<BTreeSet<String>>,
}

impl VariantBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `props` into the base set; later calls win on overlapping keys.
    pub fn with_base(mut self, props: PropertySet) -> Self {
        self.base.merge(&props);
        self
    }

    /// Declare an axis from `(option, props)` pairs.
    ///
    /// Declaring the same axis name again replaces the earlier definition but keeps its
    /// position in declaration order.
    pub fn add_axis<K, I>(self, name: impl Into<String>, options: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PropertySet)>,
    {
        self.add_described_axis(VariantAxis::from_options(name, options))
    }

    /// Declare a fully formed axis (for options that carry descriptions).
    pub fn add_described_axis(mut self, axis: VariantAxis) -> Self {
        self.axes.insert(axis.name().to_string(), axis);
        self
    }

    /// Record the default option for an axis.
    pub fn set_default(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.defaults.insert(axis.into(), option.into());
        self
    }

    /// Record several defaults at once.
    pub fn set_defaults<K, V, I>(mut self, defaults: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (axis, option) in defaults {
            self.defaults.insert(axis.into(), option.into());
        }
        self
    }

    /// Append a compound rule; declaration order is overlay order.
    pub fn add_compound<K, V, I>(mut self, conditions: I, overlay: PropertySet) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.compounds.push(CompoundRule::new(conditions, overlay));
        self
    }

    /// Restrict every property key used by this schema to `keys`.
    pub fn vocabulary<K, I>(mut self, keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        self.vocabulary = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Validate and build an immutable [`VariantSchema`](crate::VariantSchema).
    ///
    /// Every dangling default and compound condition is reported together in a single
    /// [`MotifError::SchemaValidation`].
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(axes = self.axes.len(), compounds = self.compounds.len())
    )]
    pub fn build(&self) -> MotifResult<VariantSchema> {
        let violations = validate(
            &self.base,
            &self.axes,
            &self.defaults,
            &self.compounds,
            self.vocabulary.as_ref(),
        );
        if !violations.is_empty() {
            return Err(MotifError::SchemaValidation(violations));
        }
        Ok(VariantSchema {
            base: self.base.clone(),
            axes: self.axes.clone(),
            defaults: self.defaults.clone(),
            compounds: self.compounds.clone(),
            vocabulary: self.vocabulary.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variant/builder.rs"]
mod tests;

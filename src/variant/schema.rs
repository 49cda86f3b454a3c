use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::{
    foundation::error::{MotifError, MotifResult, SchemaViolation, SchemaViolations},
    variant::{
        axis::VariantAxis, builder::VariantBuilder, compound::CompoundRule, props::PropertySet,
    },
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Caller-chosen axis -> option map.
///
/// Axes omitted here fall back to the schema defaults.
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// Empty selection: every axis takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `option` on `axis` and return `self` for chaining.
    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.insert(axis, option);
        self
    }

    /// Select `option` on `axis`, returning the option it replaces.
    pub fn insert(
        &mut self,
        axis: impl Into<String>,
        option: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(axis.into(), option.into())
    }

    /// Option chosen for `axis`.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    /// `(axis, option)` pairs sorted by axis.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of chosen axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Selection {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Immutable variant surface of one component type.
///
/// Built once through [`VariantBuilder`] (or deserialized, which validates the same way) and
/// shared read-only by every instance of the component.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SchemaDefinition", into = "SchemaDefinition")]
pub struct VariantSchema {
    pub(crate) base: PropertySet,
    pub(crate) axes: IndexMap<String, VariantAxis>,
    pub(crate) defaults: BTreeMap<String, String>,
    pub(crate) compounds: Vec<CompoundRule>,
    pub(crate) vocabulary: Option<BTreeSet<String>>,
}

impl VariantSchema {
    /// Start a [`VariantBuilder`].
    pub fn builder() -> VariantBuilder {
        VariantBuilder::new()
    }

    /// Properties applied to every selection.
    pub fn base(&self) -> &PropertySet {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &VariantAxis> {
        self.axes.values()
    }

    /// Axis declared as `name`.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.get(name)
    }

    /// Axis -> default option.
    pub fn defaults(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// Compound rules in declaration order.
    pub fn compounds(&self) -> &[CompoundRule] {
        &self.compounds
    }

    /// Allowed property keys, if the schema restricts them.
    pub fn vocabulary(&self) -> Option<&BTreeSet<String>> {
        self.vocabulary.as_ref()
    }

    /// Resolve a selection into a fresh flat property set.
    ///
    /// Order: base, then each declared axis in declaration order, then every satisfied compound
    /// rule in declaration order. Later overlays win key by key. Selected axes the schema does
    /// not declare are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, selection: &Selection) -> MotifResult<PropertySet> {
        self.resolve_impl(selection, false)
    }

    /// Like [`resolve`](Self::resolve), but undeclared selected axes fail with
    /// [`MotifError::UnknownAxis`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve_strict(&self, selection: &Selection) -> MotifResult<PropertySet> {
        self.resolve_impl(selection, true)
    }

    /// Effective option per declared axis after applying defaults.
    ///
    /// Axes with neither a selection nor a default are absent.
    pub fn effective_selection(&self, selection: &Selection) -> MotifResult<Selection> {
        Ok(self.effective(selection, false)?.into_iter().collect())
    }

    /// Option names and defaults per axis, for documentation consumers.
    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            base: self.base.clone(),
            axes: self
                .axes
                .iter()
                .map(|(name, axis)| {
                    (
                        name.clone(),
                        AxisSummary {
                            options: axis.option_names().map(str::to_string).collect(),
                            default: self.defaults.get(name).cloned(),
                        },
                    )
                })
                .collect(),
            compounds: self.compounds.clone(),
        }
    }

    fn resolve_impl(&self, selection: &Selection, strict: bool) -> MotifResult<PropertySet> {
        let effective = self.effective(selection, strict)?;

        let mut result = self.base.clone();
        for (name, axis) in &self.axes {
            let Some(option) = effective.get(name) else {
                continue;
            };
            let props = axis
                .option(option)
                .map_err(|e| e.into_variant_error(axis))?;
            result.merge(props);
        }

        for rule in &self.compounds {
            if rule.matches(&effective) {
                result.merge(&rule.overlay);
            }
        }

        Ok(result)
    }

    fn effective(
        &self,
        selection: &Selection,
        strict: bool,
    ) -> MotifResult<IndexMap<String, String>> {
        for (axis, option) in selection.iter() {
            if self.axes.contains_key(axis) {
                continue;
            }
            if strict {
                return Err(MotifError::UnknownAxis {
                    axis: axis.to_string(),
                });
            }
            tracing::debug!(axis, option, "ignoring selection for undeclared axis");
        }

        let mut effective = IndexMap::new();
        for (name, axis) in &self.axes {
            let chosen = match selection.get(name) {
                Some(option) => {
                    if let Err(e) = axis.option(option) {
                        return Err(e.into_variant_error(axis));
                    }
                    option
                }
                None => match self.defaults.get(name) {
                    Some(option) => option.as_str(),
                    None => continue,
                },
            };
            effective.insert(name.clone(), chosen.to_string());
        }
        Ok(effective)
    }
}

/// Collect every structural problem in one pass.
pub(crate) fn validate(
    base: &PropertySet,
    axes: &IndexMap<String, VariantAxis>,
    defaults: &BTreeMap<String, String>,
    compounds: &[CompoundRule],
    vocabulary: Option<&BTreeSet<String>>,
) -> SchemaViolations {
    let mut out = Vec::new();

    for (axis, option) in defaults {
        match axes.get(axis) {
            None => out.push(SchemaViolation::DanglingDefaultAxis {
                axis: axis.clone(),
                option: option.clone(),
            }),
            Some(a) if !a.has_option(option) => out.push(SchemaViolation::DanglingDefaultOption {
                axis: axis.clone(),
                option: option.clone(),
            }),
            Some(_) => {}
        }
    }

    for (idx, rule) in compounds.iter().enumerate() {
        for axis in rule.conditions.keys() {
            if !axes.contains_key(axis) {
                out.push(SchemaViolation::DanglingCompoundAxis {
                    compound: idx,
                    axis: axis.clone(),
                });
            }
        }
    }

    if let Some(vocab) = vocabulary {
        let mut check = |location: String, props: &PropertySet| {
            for key in props.keys() {
                if !vocab.contains(key) {
                    out.push(SchemaViolation::UnknownPropertyKey {
                        location: location.clone(),
                        key: key.to_string(),
                    });
                }
            }
        };
        check("base".to_string(), base);
        for (name, axis) in axes {
            for (option, props) in axis.options() {
                check(format!("{name}.{option}"), props);
            }
        }
        for (idx, rule) in compounds.iter().enumerate() {
            check(format!("compound[{idx}]"), &rule.overlay);
        }
    }

    SchemaViolations(out)
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Serializable, unvalidated form of a [`VariantSchema`].
pub struct SchemaDefinition {
    /// Properties applied unconditionally.
    #[serde(default)]
    pub base: PropertySet,
    /// Axis -> option -> properties, in declaration order.
    #[serde(default, alias = "variants")]
    pub axes: IndexMap<String, IndexMap<String, PropertySet>>,
    /// Axis -> default option.
    #[serde(default, alias = "default_variants")]
    pub defaults: BTreeMap<String, String>,
    /// Compound rules in declaration order.
    #[serde(default, alias = "compound_variants")]
    pub compounds: Vec<CompoundRule>,
    /// Axis -> option -> description.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: BTreeMap<String, BTreeMap<String, String>>,
    /// Allowed property keys, when restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
}

impl SchemaDefinition {
    /// Validate and materialize.
    pub fn into_schema(self) -> MotifResult<VariantSchema> {
        let mut b = VariantBuilder::new().with_base(self.base);
        for (name, options) in self.axes {
            let mut axis = VariantAxis::from_options(name.as_str(), options);
            if let Some(descs) = self.descriptions.get(&name) {
                for (option, text) in descs {
                    axis = axis.describe(option.as_str(), text.as_str());
                }
            }
            b = b.add_described_axis(axis);
        }
        b = b.set_defaults(self.defaults);
        for rule in self.compounds {
            b = b.add_compound(rule.conditions, rule.overlay);
        }
        if let Some(vocab) = self.vocabulary {
            b = b.vocabulary(vocab);
        }
        b.build()
    }
}

impl TryFrom<SchemaDefinition> for VariantSchema {
    type Error = MotifError;

    fn try_from(def: SchemaDefinition) -> Result<Self, Self::Error> {
        def.into_schema()
    }
}

impl From<VariantSchema> for SchemaDefinition {
    fn from(s: VariantSchema) -> Self {
        let descriptions = s
            .axes
            .iter()
            .filter(|(_, a)| !a.descriptions().is_empty())
            .map(|(name, a)| (name.clone(), a.descriptions().clone()))
            .collect();
        let axes = s
            .axes
            .iter()
            .map(|(name, a)| {
                (
                    name.clone(),
                    a.options()
                        .map(|(k, v)| (k.to_string(), v.clone()))
                        .collect(),
                )
            })
            .collect();
        Self {
            base: s.base,
            axes,
            defaults: s.defaults,
            compounds: s.compounds,
            descriptions,
            vocabulary: s.vocabulary.map(|v| v.into_iter().collect()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Compact description of a schema's variant surface.
pub struct SchemaSummary {
    /// Base properties.
    pub base: PropertySet,
    /// Per-axis summary in declaration order.
    pub axes: IndexMap<String, AxisSummary>,
    /// Compound rules in declaration order.
    pub compounds: Vec<CompoundRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Option names and default of one axis.
pub struct AxisSummary {
    /// Option names in declaration order.
    pub options: Vec<String>,
    /// Default option, if declared.
    pub default: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/variant/schema.rs"]
mod tests;

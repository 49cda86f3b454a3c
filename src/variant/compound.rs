use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::variant::props::PropertySet;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Overlay applied only when every listed axis holds exactly the listed option.
pub struct CompoundRule {
    /// Axis name -> required option name (a conjunction).
    pub conditions: BTreeMap<String, String>,
    /// Properties merged in when all conditions hold.
    #[serde(alias = "props")]
    pub overlay: PropertySet,
}

impl CompoundRule {
    /// Rule from `(axis, option)` conditions and the overlay to apply.
    pub fn new<K, V, I>(conditions: I, overlay: PropertySet) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            conditions: conditions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            overlay,
        }
    }

    /// `true` when every condition matches the effective option of its axis.
    ///
    /// An axis with no effective option never satisfies a condition on it. A rule with no
    /// conditions always matches.
    pub fn matches(&self, effective: &IndexMap<String, String>) -> bool {
        self.conditions
            .iter()
            .all(|(axis, want)| effective.get(axis).is_some_and(|got| got == want))
    }
}

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

/// Well-known property keys shared by the builtin presets and container rendering.
pub mod keys {
    /// Background color token name.
    pub const BG_COLOR: &str = "bg_color";
    /// Foreground (text) color token name.
    pub const FG_COLOR: &str = "fg_color";
    /// Border width in points; `0` means no border.
    pub const BORDER_WIDTH: &str = "border_width";
    /// Border color token name.
    pub const BORDER_COLOR: &str = "border_color";
    /// Corner radius in points.
    pub const BORDER_RADIUS: &str = "border_radius";
    /// `true` for the soft shadow, or a named shadow such as `"heavy"`.
    pub const SHADOW: &str = "shadow";
    /// Inner padding in inches.
    pub const PADDING: &str = "padding";
    /// Font size in points.
    pub const FONT_SIZE: &str = "font_size";
    /// Numeric font weight.
    pub const FONT_WEIGHT: &str = "font_weight";
    /// Fixed height in inches.
    pub const HEIGHT: &str = "height";

    /// Every key above, in declaration order.
    pub const ALL: &[&str] = &[
        BG_COLOR,
        FG_COLOR,
        BORDER_WIDTH,
        BORDER_COLOR,
        BORDER_RADIUS,
        SHADOW,
        PADDING,
        FONT_SIZE,
        FONT_WEIGHT,
        HEIGHT,
    ];
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A single leaf value.
pub enum Scalar {
    /// `true` / `false`.
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String, usually a token name.
    Text(String),
}

impl Scalar {
    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean view.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A property value: a scalar or a flat record of scalars.
///
/// Records hold scalars only, so property values can never nest or alias each other.
pub enum PropValue {
    /// A leaf value.
    Scalar(Scalar),
    /// A flat, key-sorted record of leaf values.
    Record(BTreeMap<String, Scalar>),
}

impl PropValue {
    /// The leaf, unless this is a record.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Record(_) => None,
        }
    }

    /// See [`Scalar::as_f64`].
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// See [`Scalar::as_str`].
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// See [`Scalar::as_bool`].
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    /// The record, unless this is a leaf.
    pub fn as_record(&self) -> Option<&BTreeMap<String, Scalar>> {
        match self {
            Self::Record(r) => Some(r),
            Self::Scalar(_) => None,
        }
    }
}

impl From<Scalar> for PropValue {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Scalar(Scalar::Bool(v))
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        Self::Scalar(Scalar::Int(v))
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(v)))
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Scalar(Scalar::Float(v))
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Scalar(Scalar::Text(v.to_string()))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Scalar(Scalar::Text(v))
    }
}

impl From<BTreeMap<String, Scalar>> for PropValue {
    fn from(r: BTreeMap<String, Scalar>) -> Self {
        Self::Record(r)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// An ordered key -> value property set.
///
/// Keys keep their first insertion position; equality ignores order.
pub struct PropertySet(IndexMap<String, PropValue>);

impl PropertySet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert and return `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Numeric value under `key`; integers widen.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_f64)
    }

    /// Text value under `key`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Boolean value under `key`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow, per-key merge: every key of `overlay` replaces or appends.
    ///
    /// Existing keys keep their position; new keys are appended in overlay order.
    pub fn merge(&mut self, overlay: &PropertySet) {
        for (k, v) in &overlay.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// [`merge`](Self::merge) into a copy.
    pub fn merged(&self, overlay: &PropertySet) -> PropertySet {
        let mut out = self.clone();
        out.merge(overlay);
        out
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = indexmap::map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`PropertySet`] from `key => value` pairs.
///
/// ```
/// let p = motif::props! { "radius" => 12, "bg" => "card", "shadow" => true };
/// assert_eq!(p.get_f64("radius"), Some(12.0));
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::PropertySet::new() };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut set = $crate::PropertySet::new();
        $( set.insert($k, $v); )+
        set
    }};
}

#[cfg(test)]
#[path = "../../tests/unit/variant/props.rs"]
mod tests;

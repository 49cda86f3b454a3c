use std::fmt;

/// Convenience result type used across Motif.
pub type MotifResult<T> = Result<T, MotifError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotifError {
    /// A selection named an option that its axis does not declare.
    #[error("unknown variant option: axis '{axis}' has no option '{value}'{}", hint(.suggestion))]
    UnknownVariantOption {
        /// Axis the caller selected on.
        axis: String,
        /// Offending option name.
        value: String,
        /// Closest declared option, if any is close enough.
        suggestion: Option<String>,
    },

    /// A strict selection named an axis the schema does not declare.
    #[error("unknown variant axis: '{axis}'")]
    UnknownAxis {
        /// Offending axis name.
        axis: String,
    },

    /// Structural problems found while building a schema.
    #[error("schema validation error: {0}")]
    SchemaValidation(SchemaViolations),

    /// A component with this name is already registered.
    #[error("duplicate component: '{0}' is already registered")]
    DuplicateComponent(String),

    /// No component with this name is registered.
    #[error("component not found: '{name}'{}", hint(.suggestion))]
    NotFound {
        /// Requested component name.
        name: String,
        /// Closest registered name, if any is close enough.
        suggestion: Option<String>,
    },

    /// Errors reported by a rendering surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

impl MotifError {
    /// Build a [`MotifError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MotifError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`MotifError::NotFound`] value, suggesting the closest of `known`.
    pub fn not_found<'a>(name: &str, known: impl IntoIterator<Item = &'a str>) -> Self {
        Self::NotFound {
            name: name.to_string(),
            suggestion: suggest(name, known),
        }
    }
}

impl From<serde_json::Error> for MotifError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

/// One structural problem in a variant schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaViolation {
    /// A default was recorded for an axis that was never declared.
    DanglingDefaultAxis {
        /// Undeclared axis.
        axis: String,
        /// Default option recorded for it.
        option: String,
    },
    /// A default names an option its axis does not declare.
    DanglingDefaultOption {
        /// Declared axis.
        axis: String,
        /// Undeclared option.
        option: String,
    },
    /// A compound rule conditions on an axis that was never declared.
    DanglingCompoundAxis {
        /// Position of the rule in declaration order.
        compound: usize,
        /// Undeclared axis.
        axis: String,
    },
    /// A property key outside the schema's declared vocabulary.
    UnknownPropertyKey {
        /// Where the key was found (`base`, `size.lg`, `compound[0]`).
        location: String,
        /// Offending key.
        key: String,
    },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingDefaultAxis { axis, option } => {
                write!(f, "default '{option}' set for undeclared axis '{axis}'")
            }
            Self::DanglingDefaultOption { axis, option } => {
                write!(f, "default for axis '{axis}' names unknown option '{option}'")
            }
            Self::DanglingCompoundAxis { compound, axis } => {
                write!(f, "compound[{compound}] conditions on undeclared axis '{axis}'")
            }
            Self::UnknownPropertyKey { location, key } => {
                write!(f, "{location} uses property key '{key}' outside the vocabulary")
            }
        }
    }
}

/// Every violation found by one validation pass, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaViolations(pub Vec<SchemaViolation>);

impl SchemaViolations {
    /// Borrow the collected violations.
    pub fn iter(&self) -> std::slice::Iter<'_, SchemaViolation> {
        self.0.iter()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Closest candidate within edit distance 3, used for "did you mean" hints.
pub(crate) fn suggest<'a>(
    needle: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    candidates
        .into_iter()
        .map(|c| (strsim::levenshtein(needle, c), c))
        .filter(|(d, _)| *d <= 3)
        .min_by_key(|(d, _)| *d)
        .map(|(_, c)| c.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Rgba8,
    error::{MotifError, MotifResult},
};

/// Font selection handed to rendering surfaces.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontDescriptor {
    /// Family name.
    pub family: String,
    /// Size in points.
    pub size_pt: f64,
    /// CSS-style weight (400 normal, 700 bold).
    #[serde(default = "default_weight")]
    pub weight: u16,
    /// Line height as a multiple of `size_pt`.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

fn default_weight() -> u16 {
    400
}

fn default_line_height() -> f64 {
    1.5
}

impl FontDescriptor {
    /// Regular weight, 1.5 line height.
    pub fn new(family: impl Into<String>, size_pt: f64) -> Self {
        Self {
            family: family.into(),
            size_pt,
            weight: default_weight(),
            line_height: default_line_height(),
        }
    }

    /// Override the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Override the line height.
    pub fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}

/// Read-only token lookup consumed by sub-component rendering.
///
/// Variant resolution never consults the theme; only rendering does.
pub trait Theme: std::fmt::Debug {
    /// Color for a dotted token such as `card.foreground`.
    fn resolve_color(&self, token: &str) -> Option<Rgba8>;

    /// Font for a text-role token such as `h4` or `body-sm`.
    fn resolve_font(&self, token: &str) -> Option<FontDescriptor>;
}

/// Typographic role of a rendered text fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    /// Card title.
    H4,
    /// Smaller heading.
    H5,
    /// Running text.
    #[default]
    Body,
    /// Secondary running text.
    BodySm,
    /// Footers and fine print.
    Caption,
    /// Badge labels.
    Label,
}

impl TextRole {
    /// Font token looked up in the theme.
    pub fn token(self) -> &'static str {
        match self {
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::Body => "body",
            Self::BodySm => "body-sm",
            Self::Caption => "caption",
            Self::Label => "label",
        }
    }

    /// Font used when the theme has no entry for [`token`](Self::token).
    pub fn fallback_font(self) -> FontDescriptor {
        match self {
            Self::H4 => FontDescriptor::new("Inter", 22.0).weight(500).line_height(1.375),
            Self::H5 => FontDescriptor::new("Inter", 18.0).weight(500),
            Self::Body => FontDescriptor::new("Inter", 14.0).line_height(1.625),
            Self::BodySm => FontDescriptor::new("Inter", 12.0).line_height(1.625),
            Self::Caption => FontDescriptor::new("Inter", 10.0),
            Self::Label => FontDescriptor::new("Inter", 10.0).weight(600),
        }
    }
}

/// Resolve a color, falling back to opaque black.
pub fn color_or_black(theme: &dyn Theme, token: &str) -> Rgba8 {
    theme.resolve_color(token).unwrap_or_else(|| {
        tracing::warn!(token, "theme has no color for token, using black");
        Rgba8::BLACK
    })
}

/// Resolve the font for a role, falling back to [`TextRole::fallback_font`].
pub fn font_for(theme: &dyn Theme, role: TextRole) -> FontDescriptor {
    theme
        .resolve_font(role.token())
        .unwrap_or_else(|| role.fallback_font())
}

/// Map-backed [`Theme`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TokenTheme {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Color token -> color.
    #[serde(default)]
    pub colors: BTreeMap<String, Rgba8>,
    /// Font token -> font.
    #[serde(default)]
    pub fonts: BTreeMap<String, FontDescriptor>,
}

impl TokenTheme {
    /// Empty theme; every lookup falls back.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a color from a `#rrggbb` / `#rrggbbaa` string.
    pub fn with_color(mut self, token: impl Into<String>, hex: &str) -> MotifResult<Self> {
        self.colors.insert(token.into(), Rgba8::from_hex(hex)?);
        Ok(self)
    }

    /// Add a font for a text-role token.
    pub fn with_font(mut self, token: impl Into<String>, font: FontDescriptor) -> Self {
        self.fonts.insert(token.into(), font);
        self
    }

    /// Parse a theme from JSON (`name`, `colors`, `fonts`).
    pub fn from_json_str(s: &str) -> MotifResult<Self> {
        serde_json::from_str(s).map_err(|e| MotifError::serde(format!("theme: {e}")))
    }

    /// Read and parse a JSON theme file.
    pub fn from_path(path: &Path) -> MotifResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read theme '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

impl Theme for TokenTheme {
    fn resolve_color(&self, token: &str) -> Option<Rgba8> {
        self.colors.get(token).copied()
    }

    fn resolve_font(&self, token: &str) -> Option<FontDescriptor> {
        self.fonts.get(token).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/tokens.rs"]
mod tests;

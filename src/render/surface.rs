use crate::foundation::{
    core::{Align, Rect, Rgba8, pt_to_in},
    error::MotifResult,
};
use crate::theme::tokens::FontDescriptor;

/// Opaque handle returned by a surface for one placed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Handle(pub u64);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// What to place.
pub enum PlaceKind {
    /// Background shape that hosts a composed component.
    Container,
    /// One paragraph of text.
    Paragraph {
        /// Text content.
        text: String,
    },
    /// Horizontal divider line.
    Rule,
}

/// Outline of a container or the line of a rule.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Line color.
    pub color: Rgba8,
    /// Width in points.
    pub width_pt: f64,
}

/// Drop shadow under a container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Blur radius in points.
    pub blur_pt: f64,
    /// Offset distance in points.
    pub distance_pt: f64,
}

impl Shadow {
    /// Shadow for `shadow: true`.
    pub const SOFT: Self = Self {
        blur_pt: 10.0,
        distance_pt: 4.0,
    };
    /// Shadow for `shadow: "heavy"`.
    pub const HEAVY: Self = Self {
        blur_pt: 20.0,
        distance_pt: 8.0,
    };
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Visual parameters for a placement; unset fields mean "surface default".
pub struct PlaceStyle {
    /// Background fill.
    pub fill: Option<Rgba8>,
    /// Outline or rule line.
    pub stroke: Option<Stroke>,
    /// Corner radius in points.
    pub radius_pt: Option<f64>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
    /// Text color.
    pub color: Option<Rgba8>,
    /// Text font.
    pub font: Option<FontDescriptor>,
    /// Render text bold regardless of the font weight.
    pub bold: bool,
    /// Horizontal text alignment.
    pub align: Align,
    /// Space above, in points.
    pub space_before_pt: f64,
    /// Space below, in points.
    pub space_after_pt: f64,
}

/// Result of one placement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Handle of the placed element.
    pub handle: Handle,
    /// Vertical extent consumed, in inches, including spacing.
    pub extent: f64,
}

/// Rendering primitive consumed by composition traversal.
///
/// Geometry is in inches. Implementations decide exact layout; traversal only relies on the
/// returned extent to stack fragments.
pub trait Surface {
    /// Place one element of `kind` into `geometry` and report what was placed.
    fn place(
        &mut self,
        kind: PlaceKind,
        geometry: Rect,
        style: &PlaceStyle,
    ) -> MotifResult<Placement>;
}

/// One recorded call to [`Surface::place`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedItem {
    /// Handle returned to the caller.
    pub handle: Handle,
    /// What was placed.
    pub kind: PlaceKind,
    /// Frame passed in, in inches.
    pub geometry: Rect,
    /// Style passed in.
    pub style: PlaceStyle,
    /// Estimated extent, in inches.
    pub extent: f64,
}

/// In-memory surface for tests and debugging.
///
/// Extents are estimated from font size, line height and spacing, so repeated renders of the
/// same input record identical items.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    items: Vec<PlacedItem>,
}

impl RecordingSurface {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements in call order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Paragraph texts in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|it| match &it.kind {
                PlaceKind::Paragraph { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget every recorded placement. Handles restart at zero.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn estimate_extent(kind: &PlaceKind, geometry: Rect, style: &PlaceStyle) -> f64 {
        let spacing = pt_to_in(style.space_before_pt + style.space_after_pt);
        match kind {
            PlaceKind::Container => geometry.height(),
            PlaceKind::Paragraph { .. } => {
                let line = style
                    .font
                    .as_ref()
                    .map(|f| f.size_pt * f.line_height)
                    .unwrap_or(14.0 * 1.5);
                spacing + pt_to_in(line)
            }
            PlaceKind::Rule => {
                let width = style.stroke.map(|s| s.width_pt).unwrap_or(1.0);
                spacing + pt_to_in(width)
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn place(
        &mut self,
        kind: PlaceKind,
        geometry: Rect,
        style: &PlaceStyle,
    ) -> MotifResult<Placement> {
        let handle = Handle(self.items.len() as u64);
        let extent = Self::estimate_extent(&kind, geometry, style);
        self.items.push(PlacedItem {
            handle,
            kind,
            geometry,
            style: style.clone(),
            extent,
        });
        Ok(Placement { handle, extent })
    }
}

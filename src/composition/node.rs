use std::sync::Arc;

use crate::{
    composition::sub::{RenderedFragment, SubComponent, below},
    foundation::{core::Rect, error::MotifResult},
    render::surface::{Handle, PlaceKind, PlaceStyle, Shadow, Stroke, Surface},
    theme::tokens::{Theme, color_or_black},
    variant::{
        props::{PropValue, PropertySet, Scalar, keys},
        schema::{Selection, VariantSchema},
    },
};

/// Shared, read-only theme handle.
pub type SharedTheme = Arc<dyn Theme + Send + Sync>;

/// Observable population state of a [`CompositionNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// No children yet.
    Empty,
    /// At least one child.
    Populated,
}

/// A component instance: resolved properties, theme and an ordered child list.
///
/// Insertion order is rendering order. Rendering does not mutate the node.
#[derive(Clone, Debug)]
pub struct CompositionNode {
    props: PropertySet,
    theme: SharedTheme,
    children: Vec<SubComponent>,
}

impl CompositionNode {
    /// Node with no children.
    pub fn new(props: PropertySet, theme: SharedTheme) -> Self {
        Self {
            props,
            theme,
            children: Vec::new(),
        }
    }

    /// Resolve `selection` against `schema` and seed a node with the result.
    pub fn from_schema(
        schema: &VariantSchema,
        selection: &Selection,
        theme: SharedTheme,
    ) -> MotifResult<Self> {
        Ok(Self::new(schema.resolve(selection)?, theme))
    }

    /// Append one child.
    pub fn add_child(&mut self, child: SubComponent) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Append children in iteration order.
    pub fn extend(&mut self, children: impl IntoIterator<Item = SubComponent>) -> &mut Self {
        self.children.extend(children);
        self
    }

    /// Children in render order.
    pub fn children(&self) -> &[SubComponent] {
        &self.children
    }

    /// Drop every child; the node returns to [`NodeState::Empty`].
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Current population state.
    pub fn state(&self) -> NodeState {
        if self.children.is_empty() {
            NodeState::Empty
        } else {
            NodeState::Populated
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Resolved properties styling the container.
    pub fn props(&self) -> &PropertySet {
        &self.props
    }

    /// Theme used for rendering.
    pub fn theme(&self) -> &SharedTheme {
        &self.theme
    }

    /// Place the container into `frame`, then every child top to bottom inside the padded area.
    #[tracing::instrument(
        level = "debug",
        skip(self, surface),
        fields(children = self.children.len())
    )]
    pub fn render(&self, surface: &mut dyn Surface, frame: Rect) -> MotifResult<NodeRender> {
        let theme = self.theme.as_ref();
        let container = surface.place(PlaceKind::Container, frame, &self.container_style())?;

        let pad = self.props.get_f64(keys::PADDING).unwrap_or(0.0).max(0.0);
        let inner = Rect::new(
            frame.x0 + pad,
            frame.y0 + pad,
            (frame.x1 - pad).max(frame.x0 + pad),
            (frame.y1 - pad).max(frame.y0 + pad),
        );

        let mut fragments = Vec::with_capacity(self.children.len());
        let mut used = 0.0;
        for child in &self.children {
            let frag = child.render(surface, theme, below(inner, used))?;
            used += frag.extent;
            fragments.push(frag);
        }

        Ok(NodeRender {
            container: container.handle,
            fragments,
            content_extent: used,
        })
    }

    fn container_style(&self) -> PlaceStyle {
        let theme = self.theme.as_ref();
        let fill = self
            .props
            .get_str(keys::BG_COLOR)
            .filter(|t| *t != "transparent")
            .map(|t| color_or_black(theme, t));

        let stroke = self
            .props
            .get_f64(keys::BORDER_WIDTH)
            .filter(|w| *w > 0.0)
            .map(|width_pt| Stroke {
                color: color_or_black(
                    theme,
                    self.props.get_str(keys::BORDER_COLOR).unwrap_or("border.DEFAULT"),
                ),
                width_pt,
            });

        let shadow = match self.props.get(keys::SHADOW) {
            Some(PropValue::Scalar(Scalar::Bool(true))) => Some(Shadow::SOFT),
            Some(PropValue::Scalar(Scalar::Text(s))) if s == "heavy" => Some(Shadow::HEAVY),
            Some(PropValue::Scalar(Scalar::Text(s))) if s != "none" => Some(Shadow::SOFT),
            _ => None,
        };

        PlaceStyle {
            fill,
            stroke,
            radius_pt: self.props.get_f64(keys::BORDER_RADIUS),
            shadow,
            ..PlaceStyle::default()
        }
    }
}

/// What one [`CompositionNode::render`] call produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeRender {
    /// Handle of the container shape.
    pub container: Handle,
    /// One entry per child, in child order.
    pub fragments: Vec<RenderedFragment>,
    /// Total vertical extent used by the children, in inches.
    pub content_extent: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/node.rs"]
mod tests;

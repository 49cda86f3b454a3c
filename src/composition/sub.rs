use crate::{
    foundation::{
        core::{Align, Rect},
        error::MotifResult,
    },
    render::surface::{Handle, PlaceKind, PlaceStyle, Placement, Stroke, Surface},
    theme::tokens::{TextRole, Theme, color_or_black, font_for},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Color family of a badge.
pub enum Tone {
    /// Primary color.
    #[default]
    Default,
    /// Secondary color.
    Secondary,
    /// Success color.
    Success,
    /// Warning color.
    Warning,
    /// Destructive color.
    Destructive,
}

impl Tone {
    /// Theme color token for the badge text.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Default => "primary.DEFAULT",
            Self::Secondary => "secondary.DEFAULT",
            Self::Success => "success.DEFAULT",
            Self::Warning => "warning.DEFAULT",
            Self::Destructive => "destructive.DEFAULT",
        }
    }
}

fn default_stack_spacing() -> f64 {
    0.1
}

fn default_generic_color() -> String {
    "foreground.DEFAULT".to_string()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A renderable fragment of a composed component.
///
/// Children are rendered top to bottom in sequence order; each variant carries exactly the data
/// it needs to render itself.
pub enum SubComponent {
    /// Title with an optional subtitle underneath.
    Header {
        /// Heading text.
        title: String,
        /// Smaller muted line under the title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    /// Compact standalone title.
    Title {
        /// Title text.
        text: String,
    },
    /// Muted descriptive text.
    Description {
        /// Description text.
        text: String,
    },
    /// Main body text.
    Content {
        /// Body text.
        text: String,
    },
    /// Small trailing text.
    Footer {
        /// Footer text.
        text: String,
        /// Horizontal alignment.
        #[serde(default)]
        align: Align,
    },
    /// Inline `[label]` marker.
    Badge {
        /// Marker text, rendered in brackets.
        label: String,
        /// Color family.
        #[serde(default)]
        tone: Tone,
    },
    /// Divider line.
    Separator,
    /// Nested children with fixed spacing (inches) between adjacent items.
    Stack {
        /// Children in render order.
        children: Vec<SubComponent>,
        /// Gap between adjacent children, in inches.
        #[serde(default = "default_stack_spacing")]
        spacing: f64,
    },
    /// Free-form text with caller-chosen role and color token.
    Generic {
        /// Caller's identifying tag. Not drawn; carried on the [`RenderedFragment`].
        label: String,
        /// Text drawn on the surface.
        text: String,
        /// Typographic role.
        #[serde(default)]
        role: TextRole,
        /// Color token.
        #[serde(default = "default_generic_color")]
        color: String,
    },
}

impl SubComponent {
    /// [`SubComponent::Header`].
    pub fn header(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self::Header {
            title: title.into(),
            subtitle,
        }
    }

    /// [`SubComponent::Title`].
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    /// [`SubComponent::Description`].
    pub fn description(text: impl Into<String>) -> Self {
        Self::Description { text: text.into() }
    }

    /// [`SubComponent::Content`].
    pub fn content(text: impl Into<String>) -> Self {
        Self::Content { text: text.into() }
    }

    /// [`SubComponent::Footer`].
    pub fn footer(text: impl Into<String>, align: Align) -> Self {
        Self::Footer {
            text: text.into(),
            align,
        }
    }

    /// [`SubComponent::Badge`].
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    /// [`SubComponent::Separator`].
    pub fn separator() -> Self {
        Self::Separator
    }

    /// [`SubComponent::Stack`].
    pub fn stack(children: Vec<SubComponent>, spacing: f64) -> Self {
        Self::Stack { children, spacing }
    }

    /// [`SubComponent::Generic`] in the default foreground color.
    pub fn generic(label: impl Into<String>, text: impl Into<String>, role: TextRole) -> Self {
        Self::Generic {
            label: label.into(),
            text: text.into(),
            role,
            color: default_generic_color(),
        }
    }

    /// Stable variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Title { .. } => "title",
            Self::Description { .. } => "description",
            Self::Content { .. } => "content",
            Self::Footer { .. } => "footer",
            Self::Badge { .. } => "badge",
            Self::Separator => "separator",
            Self::Stack { .. } => "stack",
            Self::Generic { .. } => "generic",
        }
    }

    /// Render into `area`, starting at its top edge.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        theme: &dyn Theme,
        area: Rect,
    ) -> MotifResult<RenderedFragment> {
        let mut frag = RenderedFragment::new(self.kind());
        match self {
            Self::Header { title, subtitle } => {
                let p = Text::new(title, TextRole::H4, "card.foreground")
                    .bold()
                    .place(surface, theme, area)?;
                frag.push(p);
                if let Some(sub) = subtitle {
                    let p = Text::new(sub, TextRole::BodySm, "muted.foreground")
                        .space_before(4.0)
                        .place(surface, theme, below(area, frag.extent))?;
                    frag.push(p);
                }
            }
            Self::Title { text } => {
                frag.push(
                    Text::new(text, TextRole::H5, "card.foreground")
                        .bold()
                        .place(surface, theme, area)?,
                );
            }
            Self::Description { text } => {
                frag.push(
                    Text::new(text, TextRole::Body, "muted.foreground")
                        .space_before(6.0)
                        .place(surface, theme, area)?,
                );
            }
            Self::Content { text } => {
                frag.push(
                    Text::new(text, TextRole::Body, "foreground.DEFAULT")
                        .space_before(8.0)
                        .place(surface, theme, area)?,
                );
            }
            Self::Footer { text, align } => {
                let mut t =
                    Text::new(text, TextRole::Caption, "muted.foreground").space_before(12.0);
                t.align = *align;
                frag.push(t.place(surface, theme, area)?);
            }
            Self::Badge { label, tone } => {
                let text = format!("[{label}]");
                frag.push(
                    Text::new(&text, TextRole::Label, tone.color_token())
                        .bold()
                        .place(surface, theme, area)?,
                );
            }
            Self::Separator => {
                let color = color_or_black(theme, "border.DEFAULT");
                let style = PlaceStyle {
                    color: Some(color),
                    stroke: Some(Stroke {
                        color,
                        width_pt: 1.0,
                    }),
                    space_before_pt: 8.0,
                    space_after_pt: 8.0,
                    ..PlaceStyle::default()
                };
                frag.push(surface.place(PlaceKind::Rule, area, &style)?);
            }
            Self::Stack { children, spacing } => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        frag.extent += spacing;
                    }
                    let inner = child.render(surface, theme, below(area, frag.extent))?;
                    frag.extent += inner.extent;
                    frag.handles.extend(inner.handles);
                }
            }
            Self::Generic {
                label,
                text,
                role,
                color,
            } => {
                frag.label = Some(label.clone());
                frag.push(Text::new(text, *role, color).place(surface, theme, area)?);
            }
        }
        Ok(frag)
    }
}

/// What rendering one child produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderedFragment {
    /// [`SubComponent::kind`] of the rendered child.
    pub kind: &'static str,
    /// Identifying tag of a [`SubComponent::Generic`] child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Surface handles in placement order.
    pub handles: Vec<Handle>,
    /// Vertical extent consumed, in inches.
    pub extent: f64,
}

impl RenderedFragment {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            label: None,
            handles: Vec::new(),
            extent: 0.0,
        }
    }

    fn push(&mut self, p: Placement) {
        self.handles.push(p.handle);
        self.extent += p.extent;
    }
}

/// `area` with its top edge moved down by `dy`.
pub(crate) fn below(area: Rect, dy: f64) -> Rect {
    let y0 = area.y0 + dy;
    Rect::new(area.x0, y0, area.x1, area.y1.max(y0))
}

struct Text<'a> {
    text: &'a str,
    role: TextRole,
    color: &'a str,
    bold: bool,
    align: Align,
    space_before_pt: f64,
}

impl<'a> Text<'a> {
    fn new(text: &'a str, role: TextRole, color: &'a str) -> Self {
        Self {
            text,
            role,
            color,
            bold: false,
            align: Align::Left,
            space_before_pt: 0.0,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn space_before(mut self, pt: f64) -> Self {
        self.space_before_pt = pt;
        self
    }

    fn place(
        self,
        surface: &mut dyn Surface,
        theme: &dyn Theme,
        area: Rect,
    ) -> MotifResult<Placement> {
        let style = PlaceStyle {
            color: Some(color_or_black(theme, self.color)),
            font: Some(font_for(theme, self.role)),
            bold: self.bold,
            align: self.align,
            space_before_pt: self.space_before_pt,
            ..PlaceStyle::default()
        };
        surface.place(
            PlaceKind::Paragraph {
                text: self.text.to_string(),
            },
            area,
            &style,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/sub.rs"]
mod tests;

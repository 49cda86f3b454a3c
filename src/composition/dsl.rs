use crate::{
    composition::sub::{SubComponent, Tone},
    foundation::core::Align,
    theme::tokens::TextRole,
};

/// Fluent builder for ordered [`SubComponent`](crate::SubComponent) lists.
///
/// Items queue up until [`build`](Self::build) drains them; a second `build` without new
/// additions returns an empty list.
#[derive(Clone, Debug, Default)]
pub struct CompositionBuilder {
    pending: Vec<SubComponent>,
}

impl CompositionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header with optional subtitle.
    pub fn header(&mut self, title: impl Into<String>, subtitle: Option<&str>) -> &mut Self {
        self.custom(SubComponent::header(title, subtitle.map(str::to_string)))
    }

    /// Append a standalone title.
    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.custom(SubComponent::title(text))
    }

    /// Append muted descriptive text.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        self.custom(SubComponent::description(text))
    }

    /// Append body text.
    pub fn content(&mut self, text: impl Into<String>) -> &mut Self {
        self.custom(SubComponent::content(text))
    }

    /// Append a footer.
    pub fn footer(&mut self, text: impl Into<String>, align: Align) -> &mut Self {
        self.custom(SubComponent::footer(text, align))
    }

    /// Append a badge.
    pub fn badge(&mut self, label: impl Into<String>, tone: Tone) -> &mut Self {
        self.custom(SubComponent::badge(label, tone))
    }

    /// Append a divider.
    pub fn separator(&mut self) -> &mut Self {
        self.custom(SubComponent::Separator)
    }

    /// Append a stack of `children` spaced `spacing` inches apart.
    pub fn stack(&mut self, children: Vec<SubComponent>, spacing: f64) -> &mut Self {
        self.custom(SubComponent::stack(children, spacing))
    }

    /// Append a free-form text fragment.
    pub fn generic(
        &mut self,
        label: impl Into<String>,
        text: impl Into<String>,
        role: TextRole,
    ) -> &mut Self {
        self.custom(SubComponent::generic(label, text, role))
    }

    /// Append an already constructed sub-component.
    pub fn custom(&mut self, item: SubComponent) -> &mut Self {
        self.pending.push(item);
        self
    }

    /// Number of queued items.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drain and return the queued items in insertion order.
    pub fn build(&mut self) -> Vec<SubComponent> {
        std::mem::take(&mut self.pending)
    }
}

/// Collect sub-components into an ordered list.
pub fn compose(items: impl IntoIterator<Item = SubComponent>) -> Vec<SubComponent> {
    items.into_iter().collect()
}

/// Insert a separator between every pair of adjacent items.
pub fn with_separator(items: impl IntoIterator<Item = SubComponent>) -> Vec<SubComponent> {
    let mut out = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(SubComponent::Separator);
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;

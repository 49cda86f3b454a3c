//! Motif is a variant resolution and composition engine for presentation components.
//!
//! A component declares its visual surface as a [`VariantSchema`]: base properties, named
//! axes of options, defaults and compound rules. Resolving a [`Selection`] against a schema
//! yields a flat [`PropertySet`]. A [`CompositionNode`] pairs resolved properties with a
//! [`Theme`] and an ordered list of [`SubComponent`]s that render onto any [`Surface`].
//!
//! # Resolution order
//!
//! 1. Start from a copy of the schema base.
//! 2. For each axis in declaration order, merge the selected (or default) option.
//! 3. For each compound rule in declaration order, merge its overlay when every condition holds.
//!
//! Later writes win. Unknown options fail with [`MotifError::UnknownVariantOption`].
//!
//! # Registry
//!
//! [`Registry`] catalogs schemas by name for discovery and documentation export.
//! [`registry()`] returns the process-wide instance with the builtin components installed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod foundation;
mod registry;
mod render;
mod theme;
mod variant;

/// Builtin variant schemas for the stock components.
pub mod presets {
    pub use crate::variant::presets::{badge, button, card};
}

pub use composition::dsl::{CompositionBuilder, compose, with_separator};
pub use composition::node::{CompositionNode, NodeRender, NodeState, SharedTheme};
pub use composition::sub::{RenderedFragment, SubComponent, Tone};
pub use foundation::core::{Align, POINTS_PER_INCH, Point, Rect, Rgba8, Size, pt_to_in};
pub use foundation::error::{MotifError, MotifResult, SchemaViolation, SchemaViolations};
pub use registry::catalog::{
    Category, ComponentDoc, ComponentEntry, ComponentMeta, EXPORT_VERSION, Example, ExportIndex,
    PropDefinition, RegisterPolicy, Registry, RegistryExport, SharedRegistry, install_builtins,
    shared as registry,
};
pub use render::surface::{
    Handle, PlaceKind, PlaceStyle, PlacedItem, Placement, RecordingSurface, Shadow, Stroke,
    Surface,
};
pub use theme::tokens::{FontDescriptor, TextRole, Theme, TokenTheme, color_or_black, font_for};
pub use variant::axis::{UnknownOption, VariantAxis};
pub use variant::builder::VariantBuilder;
pub use variant::compound::CompoundRule;
pub use variant::props::{PropValue, PropertySet, Scalar, keys};
pub use variant::schema::{AxisSummary, SchemaDefinition, SchemaSummary, Selection, VariantSchema};

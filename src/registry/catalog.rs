use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{
    foundation::error::{MotifError, MotifResult},
    variant::{
        compound::CompoundRule,
        presets,
        props::PropertySet,
        schema::{Selection, VariantSchema},
    },
};

/// Version stamped into [`RegistryExport`].
pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Grouping used for discovery.
pub enum Category {
    /// Slide-level arrangement helpers.
    Layout,
    /// Small interactive or status elements.
    Ui,
    /// Charts and plots.
    Chart,
    /// Tables and data displays.
    Data,
    /// Text blocks.
    Text,
    /// Images and embedded media.
    Media,
    /// Components that host other content.
    Container,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Self::Layout,
        Self::Ui,
        Self::Chart,
        Self::Data,
        Self::Text,
        Self::Media,
        Self::Container,
    ];
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One documented constructor argument of a component.
pub struct PropDefinition {
    /// Argument name.
    pub name: String,
    /// Type name as shown to users (`string`, `number`, ...).
    #[serde(rename = "type")]
    pub ty: String,
    /// Human-readable description.
    pub description: String,
    /// Whether callers must supply it.
    #[serde(default)]
    pub required: bool,
    /// Value used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Allowed values, when the argument is an enumeration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl PropDefinition {
    /// Optional argument with no default.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: description.into(),
            required: false,
            default: None,
            options: None,
        }
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, v: serde_json::Value) -> Self {
        self.default = Some(v);
        self
    }

    /// Restrict to an enumeration of values.
    pub fn options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A literal selection documented as typical usage.
pub struct Example {
    /// What the example shows.
    pub description: String,
    /// Variant selection used.
    pub selection: Selection,
    /// Optional usage snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Example {
    /// Example without a snippet.
    pub fn new(description: impl Into<String>, selection: Selection) -> Self {
        Self {
            description: description.into(),
            selection,
            code: None,
        }
    }

    /// Attach a usage snippet.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Descriptive data registered alongside a schema.
pub struct ComponentMeta {
    /// Discovery group.
    pub category: Category,
    /// One-line description, matched by search.
    pub description: String,
    /// Search tags.
    pub tags: BTreeSet<String>,
    /// Typical selections.
    pub examples: Vec<Example>,
    /// Documented constructor arguments.
    pub props: Vec<PropDefinition>,
    /// Component version, `1.0.0` unless set.
    pub version: String,
}

impl ComponentMeta {
    /// Metadata with no tags, examples or props.
    pub fn new(category: Category, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
            tags: BTreeSet::new(),
            examples: Vec::new(),
            props: Vec::new(),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Add a search tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add an example selection.
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Add a documented argument.
    pub fn prop(mut self, prop: PropDefinition) -> Self {
        self.props.push(prop);
        self
    }

    /// Override the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A registered component.
pub struct ComponentEntry {
    /// Unique registered name.
    pub name: String,
    /// Shared, immutable variant schema.
    pub schema: Arc<VariantSchema>,
    /// Descriptive metadata.
    pub meta: ComponentMeta,
}

impl ComponentEntry {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.meta.description.to_lowercase().contains(needle)
            || self.meta.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// What to do when registering a name that already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterPolicy {
    /// Fail with [`MotifError::DuplicateComponent`].
    #[default]
    Reject,
    /// Replace the existing entry in place (it keeps its registration position).
    Replace,
}

/// Catalog of components and their variant schemas, in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, Arc<ComponentEntry>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the builtin components.
    pub fn with_builtins() -> MotifResult<Self> {
        let mut reg = Self::new();
        install_builtins(&mut reg)?;
        Ok(reg)
    }

    /// Register `name`; fails if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        schema: VariantSchema,
        meta: ComponentMeta,
    ) -> MotifResult<Arc<ComponentEntry>> {
        self.register_with(name, schema, meta, RegisterPolicy::Reject)
    }

    /// Register `name`, resolving a name clash according to `policy`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(component = tracing::field::Empty, policy = ?policy)
    )]
    pub fn register_with(
        &mut self,
        name: impl Into<String>,
        schema: VariantSchema,
        meta: ComponentMeta,
        policy: RegisterPolicy,
    ) -> MotifResult<Arc<ComponentEntry>> {
        let name = name.into();
        tracing::Span::current().record("component", name.as_str());

        if self.entries.contains_key(&name) {
            match policy {
                RegisterPolicy::Reject => return Err(MotifError::DuplicateComponent(name)),
                RegisterPolicy::Replace => {
                    tracing::debug!(%name, "replacing registered component")
                }
            }
        }

        let entry = Arc::new(ComponentEntry {
            name: name.clone(),
            schema: Arc::new(schema),
            meta,
        });
        self.entries.insert(name, Arc::clone(&entry));
        Ok(entry)
    }

    /// Look up `name`; unknown names fail with [`MotifError::NotFound`] and a close match.
    pub fn get(&self, name: &str) -> MotifResult<Arc<ComponentEntry>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| MotifError::not_found(name, self.entries.keys().map(String::as_str)))
    }

    /// Documentation snapshot of one component, as it appears in [`export_all`](Self::export_all).
    pub fn doc(&self, name: &str) -> MotifResult<ComponentDoc> {
        Ok(ComponentDoc::from_entry(&*self.get(name)?))
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Case-insensitive substring match over name, description and tags, in registration order.
    pub fn search(&self, keyword: &str) -> Vec<Arc<ComponentEntry>> {
        let needle = keyword.to_lowercase();
        self.entries
            .values()
            .filter(|e| e.matches(&needle))
            .cloned()
            .collect()
    }

    /// Registered names in registration order.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Names in `category`, in registration order.
    pub fn list_by_category(&self, category: Category) -> Vec<String> {
        self.entries
            .values()
            .filter(|e| e.meta.category == category)
            .map(|e| e.name.clone())
            .collect()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Serializable snapshot of every entry.
    pub fn export_all(&self) -> RegistryExport {
        let components = self
            .entries
            .iter()
            .map(|(name, e)| (name.clone(), ComponentDoc::from_entry(e)))
            .collect();

        let by_category = Category::ALL
            .into_iter()
            .map(|c| (c, self.list_by_category(c)))
            .collect();

        let mut by_tag: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for e in self.entries.values() {
            for tag in &e.meta.tags {
                by_tag.entry(tag.clone()).or_default().push(e.name.clone());
            }
        }

        RegistryExport {
            version: EXPORT_VERSION.to_string(),
            components,
            index: ExportIndex {
                by_category,
                by_tag,
                all: self.list_names(),
            },
        }
    }

    /// [`export_all`](Self::export_all) as pretty JSON.
    pub fn export_json(&self) -> MotifResult<String> {
        Ok(serde_json::to_string_pretty(&self.export_all())?)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Documentation snapshot of the whole registry.
pub struct RegistryExport {
    /// Export format version.
    pub version: String,
    /// Name -> component documentation, in registration order.
    pub components: IndexMap<String, ComponentDoc>,
    /// Lookup tables over the component names.
    pub index: ExportIndex,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Name indexes included in a [`RegistryExport`].
pub struct ExportIndex {
    /// Names per category (every category present, possibly empty).
    pub by_category: BTreeMap<Category, Vec<String>>,
    /// Names per tag.
    pub by_tag: BTreeMap<String, Vec<String>>,
    /// Every name in registration order.
    pub all: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Documentation snapshot of one component.
pub struct ComponentDoc {
    /// One-line description.
    pub description: String,
    /// Discovery group.
    pub category: Category,
    /// Component version.
    pub version: String,
    /// Search tags, sorted.
    pub tags: Vec<String>,
    /// Schema base properties.
    pub base: PropertySet,
    /// Axis -> option -> properties, in declaration order.
    pub axes: IndexMap<String, IndexMap<String, PropertySet>>,
    /// Axis -> default option.
    pub defaults: BTreeMap<String, String>,
    /// Compound rules in declaration order.
    pub compounds: Vec<CompoundRule>,
    /// Typical selections.
    pub examples: Vec<Example>,
    /// Documented constructor arguments.
    pub props: Vec<PropDefinition>,
}

impl ComponentDoc {
    fn from_entry(e: &ComponentEntry) -> Self {
        let s = &e.schema;
        Self {
            description: e.meta.description.clone(),
            category: e.meta.category,
            version: e.meta.version.clone(),
            tags: e.meta.tags.iter().cloned().collect(),
            base: s.base().clone(),
            axes: s
                .axes()
                .map(|a| {
                    (
                        a.name().to_string(),
                        a.options()
                            .map(|(k, v)| (k.to_string(), v.clone()))
                            .collect(),
                    )
                })
                .collect(),
            defaults: s.defaults().clone(),
            compounds: s.compounds().to_vec(),
            examples: e.meta.examples.clone(),
            props: e.meta.props.clone(),
        }
    }
}

/// Register Button, Card and Badge with their preset schemas.
pub fn install_builtins(reg: &mut Registry) -> MotifResult<()> {
    reg.register(
        "Button",
        presets::button()?,
        ComponentMeta::new(Category::Ui, "Interactive button with variants and sizes")
            .tag("button")
            .tag("action")
            .tag("interactive")
            .prop(PropDefinition::new("text", "string", "Button label").required())
            .prop(
                PropDefinition::new("variant", "string", "Visual variant")
                    .options(["default", "secondary", "outline", "ghost", "destructive"])
                    .default_value("default".into()),
            )
            .example(Example::new(
                "Large destructive button",
                Selection::from([("variant", "destructive"), ("size", "lg")]),
            )),
    )?;
    reg.register(
        "Card",
        presets::card()?,
        ComponentMeta::new(
            Category::Container,
            "Container component with header, content and footer sections",
        )
        .tag("container")
        .tag("layout")
        .prop(PropDefinition::new("title", "string", "Card title"))
        .prop(
            PropDefinition::new("variant", "string", "Visual variant")
                .options(["default", "outlined", "elevated", "ghost"])
                .default_value("default".into()),
        )
        .example(Example::new(
            "Elevated card with roomy padding",
            Selection::from([("variant", "elevated"), ("padding", "lg")]),
        )),
    )?;
    reg.register(
        "Badge",
        presets::badge()?,
        ComponentMeta::new(Category::Ui, "Small status label")
            .tag("label")
            .tag("status")
            .prop(PropDefinition::new("text", "string", "Badge text").required())
            .example(Example::new("Success badge", Selection::from([("variant", "success")]))),
    )?;
    Ok(())
}

/// Process-wide registry guarded by a read/write lock.
///
/// Writers are serialized: of two concurrent registrations of one name, the first to take the
/// lock wins and the other gets [`MotifError::DuplicateComponent`].
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<Registry>,
}

impl SharedRegistry {
    /// Wrap `reg` for shared access.
    pub fn new(reg: Registry) -> Self {
        Self {
            inner: RwLock::new(reg),
        }
    }

    /// See [`Registry::register`].
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: VariantSchema,
        meta: ComponentMeta,
    ) -> MotifResult<Arc<ComponentEntry>> {
        self.inner.write().register(name, schema, meta)
    }

    /// See [`Registry::register_with`].
    pub fn register_with(
        &self,
        name: impl Into<String>,
        schema: VariantSchema,
        meta: ComponentMeta,
        policy: RegisterPolicy,
    ) -> MotifResult<Arc<ComponentEntry>> {
        self.inner.write().register_with(name, schema, meta, policy)
    }

    /// See [`Registry::get`].
    pub fn get(&self, name: &str) -> MotifResult<Arc<ComponentEntry>> {
        self.inner.read().get(name)
    }

    /// See [`Registry::doc`].
    pub fn doc(&self, name: &str) -> MotifResult<ComponentDoc> {
        self.inner.read().doc(name)
    }

    /// See [`Registry::search`].
    pub fn search(&self, keyword: &str) -> Vec<Arc<ComponentEntry>> {
        self.inner.read().search(keyword)
    }

    /// See [`Registry::list_names`].
    pub fn list_names(&self) -> Vec<String> {
        self.inner.read().list_names()
    }

    /// See [`Registry::export_all`].
    pub fn export_all(&self) -> RegistryExport {
        self.inner.read().export_all()
    }

    /// Remove every entry, for test isolation.
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Run `f` with exclusive access, e.g. to reinstall builtins after a reset.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Clone the current contents.
    pub fn snapshot(&self) -> Registry {
        self.inner.read().clone()
    }
}

static SHARED: LazyLock<SharedRegistry> = LazyLock::new(|| {
    let mut reg = Registry::new();
    if let Err(e) = install_builtins(&mut reg) {
        tracing::error!("builtin registration failed: {e}");
    }
    SharedRegistry::new(reg)
});

/// The process-wide registry, created on first use with the builtins installed.
pub fn shared() -> &'static SharedRegistry {
    &SHARED
}

#[cfg(test)]
#[path = "../../tests/unit/registry/catalog.rs"]
mod tests;

use super::*;
use crate::{props, variant::builder::VariantBuilder};

fn tiny_schema() -> VariantSchema {
    VariantBuilder::new()
        .with_base(props! { "radius" => 4 })
        .add_axis("tone", [("calm", props! { "fg" => "muted" })])
        .build()
        .unwrap()
}

fn meta(category: Category, description: &str) -> ComponentMeta {
    ComponentMeta::new(category, description)
}

#[test]
fn register_then_get_returns_same_schema() {
    let mut reg = Registry::new();
    let schema = tiny_schema();
    reg.register("Chip", schema.clone(), meta(Category::Ui, "chip")).unwrap();

    let got = reg.get("Chip").unwrap();
    assert_eq!(*got.schema, schema);
    assert_eq!(got.meta.version, "1.0.0");
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut reg = Registry::new();
    reg.register("Chip", tiny_schema(), meta(Category::Ui, "first")).unwrap();
    let err = reg
        .register("Chip", tiny_schema(), meta(Category::Ui, "second"))
        .unwrap_err();
    assert!(matches!(err, MotifError::DuplicateComponent(ref n) if n == "Chip"));
    assert_eq!(reg.get("Chip").unwrap().meta.description, "first");
}

#[test]
fn replace_policy_keeps_position() {
    let mut reg = Registry::new();
    reg.register("A", tiny_schema(), meta(Category::Ui, "a")).unwrap();
    reg.register("B", tiny_schema(), meta(Category::Ui, "b")).unwrap();
    reg.register_with(
        "A",
        tiny_schema(),
        meta(Category::Text, "a2"),
        RegisterPolicy::Replace,
    )
    .unwrap();

    assert_eq!(reg.list_names(), vec!["A", "B"]);
    assert_eq!(reg.get("A").unwrap().meta.description, "a2");
}

#[test]
fn missing_component_suggests_close_name() {
    let reg = Registry::with_builtins().unwrap();
    let err = reg.get("Buton").unwrap_err();
    match err {
        MotifError::NotFound { name, suggestion } => {
            assert_eq!(name, "Buton");
            assert_eq!(suggestion.as_deref(), Some("Button"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        reg.get("Spreadsheet"),
        Err(MotifError::NotFound { suggestion: None, .. })
    ));
}

#[test]
fn search_matches_tags_case_insensitively() {
    let mut reg = Registry::new();
    reg.register(
        "Button",
        tiny_schema(),
        meta(Category::Ui, "Interactive button").tag("action"),
    )
    .unwrap();
    reg.register("Card", tiny_schema(), meta(Category::Container, "Boxed content"))
        .unwrap();

    let hits: Vec<_> = reg.search("ACTION").iter().map(|e| e.name.clone()).collect();
    assert_eq!(hits, vec!["Button"]);
    assert!(reg.search("nothing-like-this").is_empty());
}

#[test]
fn search_matches_name_and_description_in_registration_order() {
    let reg = Registry::with_builtins().unwrap();
    let hits: Vec<_> = reg.search("b").iter().map(|e| e.name.clone()).collect();
    assert_eq!(hits, vec!["Button", "Badge"]);

    let by_desc: Vec<_> = reg.search("footer").iter().map(|e| e.name.clone()).collect();
    assert_eq!(by_desc, vec!["Card"]);
}

#[test]
fn list_by_category_filters() {
    let reg = Registry::with_builtins().unwrap();
    assert_eq!(reg.list_by_category(Category::Ui), vec!["Button", "Badge"]);
    assert_eq!(reg.list_by_category(Category::Container), vec!["Card"]);
    assert!(reg.list_by_category(Category::Chart).is_empty());
}

#[test]
fn reset_empties_registry() {
    let mut reg = Registry::with_builtins().unwrap();
    assert_eq!(reg.len(), 3);
    reg.reset();
    assert!(reg.is_empty());
    assert!(reg.get("Button").is_err());
}

#[test]
fn export_contains_every_component_and_index() {
    let reg = Registry::with_builtins().unwrap();
    let export = reg.export_all();

    assert_eq!(export.version, EXPORT_VERSION);
    assert_eq!(
        export.components.keys().cloned().collect::<Vec<_>>(),
        vec!["Button", "Card", "Badge"]
    );
    assert_eq!(export.index.all, vec!["Button", "Card", "Badge"]);
    assert_eq!(export.index.by_category[&Category::Ui], vec!["Button", "Badge"]);
    assert_eq!(export.index.by_tag["status"], vec!["Badge"]);

    let card = &export.components["Card"];
    assert_eq!(card.defaults["variant"], "default");
    assert!(card.axes["variant"].contains_key("elevated"));
}

#[test]
fn export_json_is_parseable() {
    let reg = Registry::with_builtins().unwrap();
    let json = reg.export_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["components"]["Button"]["category"], "ui");
    assert_eq!(v["index"]["by_category"]["container"][0], "Card");
    assert_eq!(
        v["components"]["Button"]["axes"]["size"]["lg"]["font_size"],
        16
    );
}

#[test]
fn shared_registry_serializes_same_name_races() {
    let shared = std::sync::Arc::new(SharedRegistry::new(Registry::new()));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || {
                shared
                    .register("Race", tiny_schema(), meta(Category::Ui, &format!("t{i}")))
                    .is_ok()
            })
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(wins, 1);
    assert_eq!(shared.list_names(), vec!["Race"]);
}

#[test]
fn global_registry_has_builtins() {
    let reg = shared();
    assert!(reg.get("Card").is_ok());
    assert!(!reg.search("button").is_empty());
}

#[test]
fn doc_returns_one_component_snapshot() {
    let reg = Registry::with_builtins().unwrap();
    let doc = reg.doc("Button").unwrap();

    assert_eq!(doc, reg.export_all().components["Button"]);
    assert_eq!(doc.category, Category::Ui);
    assert_eq!(doc.defaults["size"], "md");
    assert_eq!(
        doc.axes["size"].keys().cloned().collect::<Vec<_>>(),
        vec!["sm", "md", "lg"]
    );
    assert_eq!(doc.examples.len(), 1);
}

#[test]
fn doc_for_unknown_name_suggests_close_match() {
    let shared = SharedRegistry::new(Registry::with_builtins().unwrap());
    match shared.doc("Bagde") {
        Err(MotifError::NotFound { name, suggestion }) => {
            assert_eq!(name, "Bagde");
            assert_eq!(suggestion.as_deref(), Some("Badge"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

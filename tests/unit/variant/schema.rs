use super::*;
use crate::props;

fn card_schema() -> VariantSchema {
    VariantSchema::builder()
        .with_base(props! { "radius" => 12 })
        .add_axis(
            "variant",
            [
                ("default", props! { "bg" => "card" }),
                ("elevated", props! { "bg" => "card", "shadow" => true }),
            ],
        )
        .add_axis(
            "padding",
            [("sm", props! { "pad" => 0.25 }), ("lg", props! { "pad" => 0.75 })],
        )
        .set_default("variant", "default")
        .add_compound(
            [("variant", "elevated"), ("padding", "lg")],
            props! { "shadow" => "heavy" },
        )
        .build()
        .unwrap()
}

#[test]
fn compound_fires_when_all_conditions_hold() {
    let out = card_schema()
        .resolve(&Selection::from([("variant", "elevated"), ("padding", "lg")]))
        .unwrap();
    assert_eq!(
        out,
        props! { "radius" => 12, "bg" => "card", "shadow" => "heavy", "pad" => 0.75 }
    );
}

#[test]
fn compound_skipped_on_partial_match() {
    let out = card_schema()
        .resolve(&Selection::from([("variant", "elevated"), ("padding", "sm")]))
        .unwrap();
    assert_eq!(
        out,
        props! { "radius" => 12, "bg" => "card", "shadow" => true, "pad" => 0.25 }
    );
}

#[test]
fn omitted_selection_equals_explicit_defaults() {
    let s = card_schema();
    let implicit = s.resolve(&Selection::new()).unwrap();
    let explicit = s.resolve(&Selection::from([("variant", "default")])).unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(implicit, props! { "radius" => 12, "bg" => "card" });
}

#[test]
fn axis_without_default_or_selection_is_skipped() {
    let out = card_schema().resolve(&Selection::new()).unwrap();
    assert!(!out.contains_key("pad"));
}

#[test]
fn unknown_option_fails_with_axis_and_value() {
    let err = card_schema()
        .resolve(&Selection::from([("padding", "xl")]))
        .unwrap_err();
    match err {
        MotifError::UnknownVariantOption { axis, value, .. } => {
            assert_eq!(axis, "padding");
            assert_eq!(value, "xl");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn undeclared_axis_is_ignored_unless_strict() {
    let s = card_schema();
    let sel = Selection::from([("tone", "loud")]);
    assert_eq!(s.resolve(&sel).unwrap(), s.resolve(&Selection::new()).unwrap());
    assert!(matches!(
        s.resolve_strict(&sel),
        Err(MotifError::UnknownAxis { axis }) if axis == "tone"
    ));
}

#[test]
fn later_axis_wins_key_conflicts() {
    let s = VariantSchema::builder()
        .add_axis("first", [("a", props! { "color" => "red" })])
        .add_axis("second", [("b", props! { "color" => "blue" })])
        .set_defaults([("first", "a"), ("second", "b")])
        .build()
        .unwrap();
    assert_eq!(
        s.resolve(&Selection::new()).unwrap().get_str("color"),
        Some("blue")
    );
}

#[test]
fn axis_order_is_declaration_not_selection_order() {
    let s = VariantSchema::builder()
        .add_axis("z", [("on", props! { "k" => "z" })])
        .add_axis("a", [("on", props! { "k" => "a" })])
        .build()
        .unwrap();
    let out = s.resolve(&Selection::from([("a", "on"), ("z", "on")])).unwrap();
    assert_eq!(out.get_str("k"), Some("a"));
}

#[test]
fn later_compound_wins_and_all_matches_apply() {
    let s = VariantSchema::builder()
        .add_axis("v", [("x", PropertySet::new())])
        .add_axis("s", [("y", PropertySet::new())])
        .add_compound([("v", "x")], props! { "k" => 1, "only_first" => true })
        .add_compound([("v", "x"), ("s", "y")], props! { "k" => 2 })
        .build()
        .unwrap();
    let out = s.resolve(&Selection::from([("v", "x"), ("s", "y")])).unwrap();
    assert_eq!(out.get_f64("k"), Some(2.0));
    assert_eq!(out.get_bool("only_first"), Some(true));
}

#[test]
fn three_condition_compound_requires_every_condition() {
    let s = VariantSchema::builder()
        .add_axis("a", [("1", PropertySet::new()), ("2", PropertySet::new())])
        .add_axis("b", [("1", PropertySet::new()), ("2", PropertySet::new())])
        .add_axis("c", [("1", PropertySet::new()), ("2", PropertySet::new())])
        .set_defaults([("a", "1"), ("b", "1"), ("c", "1")])
        .add_compound([("a", "1"), ("b", "1"), ("c", "1")], props! { "hit" => true })
        .build()
        .unwrap();

    assert!(s.resolve(&Selection::new()).unwrap().contains_key("hit"));
    for axis in ["a", "b", "c"] {
        let out = s.resolve(&Selection::new().with(axis, "2")).unwrap();
        assert!(!out.contains_key("hit"), "flipping {axis} must drop the overlay");
    }
}

#[test]
fn compounds_match_defaulted_values() {
    let s = VariantSchema::builder()
        .add_axis("variant", [("primary", PropertySet::new()), ("ghost", PropertySet::new())])
        .add_axis("size", [("md", PropertySet::new()), ("lg", PropertySet::new())])
        .set_defaults([("variant", "primary"), ("size", "md")])
        .add_compound([("variant", "primary"), ("size", "md")], props! { "weight" => 600 })
        .build()
        .unwrap();
    let out = s.resolve(&Selection::from([("variant", "primary")])).unwrap();
    assert_eq!(out.get_f64("weight"), Some(600.0));
}

#[test]
fn equivalent_selections_resolve_equal() {
    let s = card_schema();
    let a = Selection::from([("padding", "lg")]);
    let b = Selection::from([("padding", "lg"), ("variant", "default"), ("extra", "ignored")]);
    assert_eq!(s.resolve(&a).unwrap(), s.resolve(&b).unwrap());
    assert_eq!(s.resolve(&a).unwrap(), s.resolve(&a).unwrap());
}

#[test]
fn result_does_not_alias_schema() {
    let s = card_schema();
    let mut out = s.resolve(&Selection::new()).unwrap();
    out.insert("radius", 99);
    assert_eq!(s.base().get_f64("radius"), Some(12.0));
    assert_eq!(
        s.resolve(&Selection::new()).unwrap().get_f64("radius"),
        Some(12.0)
    );
}

#[test]
fn effective_selection_applies_defaults() {
    let eff = card_schema()
        .effective_selection(&Selection::from([("padding", "sm")]))
        .unwrap();
    assert_eq!(eff, Selection::from([("variant", "default"), ("padding", "sm")]));
}

#[test]
fn summary_lists_options_and_defaults() {
    let summary = card_schema().summary();
    let variant = summary.axes.get("variant").unwrap();
    assert_eq!(variant.options, vec!["default", "elevated"]);
    assert_eq!(variant.default.as_deref(), Some("default"));
    assert_eq!(summary.axes.get("padding").unwrap().default, None);
    assert_eq!(summary.compounds.len(), 1);
}

#[test]
fn json_roundtrip_preserves_schema() {
    let s = card_schema();
    let json = serde_json::to_string(&s).unwrap();
    let back: VariantSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(s, back);
}

#[test]
fn invalid_json_schema_is_rejected_on_load() {
    let json = r#"{
        "base": {"radius": 12},
        "variants": {"padding": {"sm": {"pad": 0.25}}},
        "default_variants": {"padding": "md"}
    }"#;
    let err = serde_json::from_str::<VariantSchema>(json).unwrap_err();
    assert!(err.to_string().contains("'padding'"));
    assert!(err.to_string().contains("'md'"));
}

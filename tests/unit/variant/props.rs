use super::*;

#[test]
fn merge_is_shallow_and_overlay_wins() {
    let mut base = crate::props! { "radius" => 12, "bg" => "card" };
    let overlay = crate::props! { "bg" => "primary", "shadow" => true };
    base.merge(&overlay);

    assert_eq!(base.get_str("bg"), Some("primary"));
    assert_eq!(base.get_bool("shadow"), Some(true));
    assert_eq!(base.get_f64("radius"), Some(12.0));
    assert_eq!(base.keys().collect::<Vec<_>>(), vec!["radius", "bg", "shadow"]);
}

#[test]
fn merge_replaces_records_whole() {
    let mut rec = BTreeMap::new();
    rec.insert("x".to_string(), Scalar::Int(1));
    rec.insert("y".to_string(), Scalar::Int(2));
    let mut base = PropertySet::new().with("offset", rec);

    let mut over = BTreeMap::new();
    over.insert("x".to_string(), Scalar::Int(5));
    base.merge(&PropertySet::new().with("offset", over));

    let offset = base.get("offset").and_then(PropValue::as_record).unwrap();
    assert_eq!(offset.len(), 1);
    assert_eq!(offset.get("x"), Some(&Scalar::Int(5)));
}

#[test]
fn equality_ignores_key_order() {
    let a = crate::props! { "a" => 1, "b" => 2 };
    let b = crate::props! { "b" => 2, "a" => 1 };
    assert_eq!(a, b);
}

#[test]
fn merged_leaves_receiver_untouched() {
    let base = crate::props! { "pad" => 0.25 };
    let out = base.merged(&crate::props! { "pad" => 0.75 });
    assert_eq!(base.get_f64("pad"), Some(0.25));
    assert_eq!(out.get_f64("pad"), Some(0.75));
}

#[test]
fn json_shapes_map_to_expected_variants() {
    let p: PropertySet = serde_json::from_str(
        r#"{"radius": 12, "pad": 0.5, "bg": "card", "shadow": false, "inset": {"top": 1}}"#,
    )
    .unwrap();
    assert_eq!(p.get("radius"), Some(&PropValue::Scalar(Scalar::Int(12))));
    assert_eq!(p.get("pad"), Some(&PropValue::Scalar(Scalar::Float(0.5))));
    assert_eq!(p.get_str("bg"), Some("card"));
    assert_eq!(p.get_bool("shadow"), Some(false));
    assert!(p.get("inset").and_then(PropValue::as_record).is_some());
}

#[test]
fn nested_records_are_rejected() {
    let r: Result<PropertySet, _> = serde_json::from_str(r#"{"a": {"b": {"c": 1}}}"#);
    assert!(r.is_err());
}

#[test]
fn integer_reads_as_float() {
    let p = crate::props! { "radius" => 8 };
    assert_eq!(p.get_f64("radius"), Some(8.0));
    assert_eq!(p.get_str("radius"), None);
}

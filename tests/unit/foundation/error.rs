use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotifError::UnknownVariantOption {
            axis: "size".into(),
            value: "xxl".into(),
            suggestion: None,
        }
        .to_string()
        .contains("unknown variant option:")
    );
    assert!(
        MotifError::SchemaValidation(SchemaViolations::default())
            .to_string()
            .contains("schema validation error:")
    );
    assert!(
        MotifError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        MotifError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_option_names_axis_value_and_hint() {
    let err = MotifError::UnknownVariantOption {
        axis: "padding".into(),
        value: "mdd".into(),
        suggestion: Some("md".into()),
    };
    let msg = err.to_string();
    assert!(msg.contains("'padding'"));
    assert!(msg.contains("'mdd'"));
    assert!(msg.contains("did you mean 'md'?"));
}

#[test]
fn violations_are_joined_in_order() {
    let v = SchemaViolations(vec![
        SchemaViolation::DanglingDefaultOption {
            axis: "padding".into(),
            option: "md".into(),
        },
        SchemaViolation::DanglingCompoundAxis {
            compound: 1,
            axis: "tone".into(),
        },
    ]);
    assert_eq!(
        v.to_string(),
        "default for axis 'padding' names unknown option 'md'; \
         compound[1] conditions on undeclared axis 'tone'"
    );
}

#[test]
fn suggest_picks_closest_within_distance() {
    assert_eq!(
        suggest("elevatd", ["default", "elevated", "ghost"]),
        Some("elevated".to_string())
    );
    assert_eq!(suggest("zzzzzzzz", ["sm", "lg"]), None);
}

#[test]
fn not_found_carries_suggestion() {
    let err = MotifError::not_found("Crad", ["Card", "Badge"]);
    assert!(err.to_string().contains("did you mean 'Card'?"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotifError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

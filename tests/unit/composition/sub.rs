use super::*;
use crate::{
    foundation::core::Rgba8,
    render::surface::RecordingSurface,
    theme::tokens::{FontDescriptor, TokenTheme},
};

fn theme() -> TokenTheme {
    TokenTheme::new("test")
        .with_color("card.foreground", "#101010")
        .unwrap()
        .with_color("muted.foreground", "#808080")
        .unwrap()
        .with_color("border.DEFAULT", "#dddddd")
        .unwrap()
        .with_color("success.DEFAULT", "#00aa00")
        .unwrap()
}

fn area() -> Rect {
    Rect::new(0.0, 0.0, 4.0, 3.0)
}

#[test]
fn header_places_title_then_subtitle() {
    let mut s = RecordingSurface::new();
    let frag = SubComponent::header("Revenue", Some("Q3".into()))
        .render(&mut s, &theme(), area())
        .unwrap();

    assert_eq!(frag.kind, "header");
    assert_eq!(frag.handles.len(), 2);
    assert_eq!(s.texts(), vec!["Revenue", "Q3"]);

    let title = &s.items()[0];
    assert!(title.style.bold);
    assert_eq!(title.style.color, Some(Rgba8::opaque(16, 16, 16)));
    let sub = &s.items()[1];
    assert_eq!(sub.style.space_before_pt, 4.0);
    assert!(sub.geometry.y0 > title.geometry.y0);
    assert!((frag.extent - (title.extent + sub.extent)).abs() < 1e-9);
}

#[test]
fn header_without_subtitle_places_one_paragraph() {
    let mut s = RecordingSurface::new();
    let frag = SubComponent::header("Only", None)
        .render(&mut s, &theme(), area())
        .unwrap();
    assert_eq!(frag.handles.len(), 1);
}

#[test]
fn footer_keeps_alignment() {
    let mut s = RecordingSurface::new();
    SubComponent::footer("page 2", Align::Right)
        .render(&mut s, &theme(), area())
        .unwrap();
    assert_eq!(s.items()[0].style.align, Align::Right);
    assert_eq!(s.items()[0].style.space_before_pt, 12.0);
}

#[test]
fn badge_wraps_label_and_uses_tone_color() {
    let mut s = RecordingSurface::new();
    SubComponent::badge("NEW", Tone::Success)
        .render(&mut s, &theme(), area())
        .unwrap();
    assert_eq!(s.texts(), vec!["[NEW]"]);
    assert_eq!(s.items()[0].style.color, Some(Rgba8::opaque(0, 0xaa, 0)));
}

#[test]
fn separator_is_a_rule() {
    let mut s = RecordingSurface::new();
    SubComponent::separator()
        .render(&mut s, &theme(), area())
        .unwrap();
    assert_eq!(s.items()[0].kind, PlaceKind::Rule);
    assert_eq!(s.items()[0].style.space_after_pt, 8.0);
}

#[test]
fn missing_color_token_falls_back_to_black() {
    let mut s = RecordingSurface::new();
    SubComponent::content("body")
        .render(&mut s, &TokenTheme::default(), area())
        .unwrap();
    assert_eq!(s.items()[0].style.color, Some(Rgba8::BLACK));
    assert_eq!(
        s.items()[0].style.font,
        Some(TextRole::Body.fallback_font())
    );
}

#[test]
fn stack_renders_children_in_order_with_spacing() {
    let mut s = RecordingSurface::new();
    let stack = SubComponent::stack(
        vec![SubComponent::title("a"), SubComponent::content("b")],
        0.5,
    );
    let frag = stack.render(&mut s, &theme(), area()).unwrap();

    assert_eq!(s.texts(), vec!["a", "b"]);
    let first = &s.items()[0];
    let second = &s.items()[1];
    assert!((second.geometry.y0 - (first.extent + 0.5)).abs() < 1e-9);
    assert!((frag.extent - (first.extent + 0.5 + second.extent)).abs() < 1e-9);
}

#[test]
fn generic_uses_role_font_from_theme() {
    let t = theme().with_font("caption", FontDescriptor::new("Mono", 9.0));
    let mut s = RecordingSurface::new();
    SubComponent::generic("note", "fine print", TextRole::Caption)
        .render(&mut s, &t, area())
        .unwrap();
    assert_eq!(s.items()[0].style.font.as_ref().unwrap().family, "Mono");
}

#[test]
fn json_is_tagged_by_kind() {
    let parts: Vec<SubComponent> = serde_json::from_str(
        r#"[
            {"kind": "header", "title": "T"},
            {"kind": "separator"},
            {"kind": "badge", "label": "beta", "tone": "warning"},
            {"kind": "stack", "children": [{"kind": "content", "text": "x"}]}
        ]"#,
    )
    .unwrap();
    assert_eq!(parts[0], SubComponent::header("T", None));
    assert_eq!(parts[1], SubComponent::Separator);
    assert_eq!(parts[2], SubComponent::badge("beta", Tone::Warning));
    assert_eq!(
        parts[3],
        SubComponent::stack(vec![SubComponent::content("x")], 0.1)
    );
}

#[test]
fn below_never_inverts_area() {
    let r = below(Rect::new(0.0, 0.0, 1.0, 1.0), 3.0);
    assert_eq!(r.y0, 3.0);
    assert_eq!(r.y1, 3.0);
}

#[test]
fn generic_label_tags_fragment_without_being_drawn() {
    let mut s = RecordingSurface::new();
    let frag = SubComponent::generic("legal", "fine print", TextRole::Caption)
        .render(&mut s, &theme(), area())
        .unwrap();

    assert_eq!(frag.kind, "generic");
    assert_eq!(frag.label.as_deref(), Some("legal"));
    assert_eq!(s.texts(), vec!["fine print"]);

    let other = SubComponent::content("body")
        .render(&mut s, &theme(), area())
        .unwrap();
    assert_eq!(other.label, None);
}

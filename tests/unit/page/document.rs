use super::*;

fn doc() -> Document {
    Document::layout(&PageConfig::default(), Viewport::new(1280.0, 720.0).unwrap()).unwrap()
}

#[test]
fn sections_stack_and_fill_viewport() {
    let d = doc();
    let mut prev_bottom = 0.0;
    for i in 0..SECTION_COUNT {
        let r = d.section_rect(i).unwrap();
        assert_eq!(r.y0, prev_bottom);
        assert!(r.height() >= 720.0);
        prev_bottom = r.y1;
    }
    assert_eq!(d.page_height(), prev_bottom);
    assert!(d.section_rect(3).is_none());
}

#[test]
fn heading_is_not_animatable_and_is_hit() {
    let d = doc();
    let heading = d.get(d.heading()).unwrap();
    assert!(matches!(heading.kind, ElementKind::Heading { section: 0 }));
    assert!(!d.query_animatable().contains(&d.heading()));
    assert_eq!(d.hit_test(heading.rect.center()), Some(d.heading()));
}

#[test]
fn hit_test_ignores_section_background() {
    let d = doc();
    let r = d.section_rect(0).unwrap();
    assert_eq!(d.hit_test(Point::new(r.x1 - 1.0, r.y0 + 1.0)), None);
}

#[test]
fn animatable_query_matches_config_tags() {
    let cfg = PageConfig::default();
    let tagged = cfg
        .sections
        .iter()
        .flat_map(|s| &s.blocks)
        .filter(|b| b.animatable)
        .count();
    assert_eq!(doc().query_animatable().len(), tagged);
}

#[test]
fn listener_on_missing_element_fails_loudly() {
    let mut d = doc();
    let err = d.add_click_listener(ElementId(9999)).unwrap_err();
    assert!(matches!(err, ChiliError::Lifecycle(_)));
}

#[test]
fn listener_attach_detach() {
    let mut d = doc();
    let h = d.heading();
    d.add_click_listener(h).unwrap();
    assert!(d.add_click_listener(h).is_err());
    assert!(d.has_click_listener(h));
    assert!(d.remove_click_listener(h));
    assert!(!d.remove_click_listener(h));
    assert_eq!(d.listener_count(), 0);
}

#[test]
fn wraps_long_text() {
    let lines = wrap_lines("aaaa bbbb cccc", 10.0, 50.0);
    // 9 glyphs = 49.5px fit; the third word does not.
    assert_eq!(lines.len(), 2);
    assert!((lines[0] - 49.5).abs() < 1e-9);
    assert_eq!(wrap_lines("", 10.0, 50.0), vec![0.0]);
}

#[test]
fn inline_style_defaults() {
    let d = doc();
    let e = d.get(d.heading()).unwrap();
    assert!(e.style.is_empty());
    assert_eq!(e.opacity(), 1.0);
    assert_eq!(e.translate_y(), 0.0);
}

use super::*;

#[test]
fn starts_invisible_without_overrides() {
    let m = GrowMarker::default();
    assert_eq!(m.scale(), 0.0);
    assert!(!m.has_overrides());
    assert!(!m.is_visible());
}

#[test]
fn full_scale_covers_viewport_from_any_corner() {
    let vp = Viewport::new(1920.0, 1080.0).unwrap();
    let mut m = GrowMarker::default();
    m.position_at(Point::new(0.0, 0.0));
    m.set_scale(1000.0);
    assert!(m.covers(vp));
    m.set_scale(10.0);
    assert!(!m.covers(vp));
}

#[test]
fn clear_props_resets_everything() {
    let mut m = GrowMarker::default();
    m.position_at(Point::new(3.0, 4.0));
    m.set_scale(2.0);
    assert!(m.is_visible());
    m.clear_props();
    assert_eq!(m.scale(), 0.0);
    assert_eq!(m.origin(), None);
    assert!(!m.has_overrides());
}

#[test]
fn cover_scale_reaches_farthest_corner() {
    let vp = Viewport::new(3840.0, 2160.0).unwrap();
    let mut m = GrowMarker::default();
    assert!((m.cover_scale(vp) - vp.diagonal() / 2.5).abs() < 1e-9);

    m.position_at(Point::new(3840.0, 0.0));
    m.set_scale(m.cover_scale(vp) * 1.000_001);
    assert!(m.covers(vp));
    m.set_scale(m.cover_scale(vp) * 0.99);
    assert!(!m.covers(vp));
}

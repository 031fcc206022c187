use super::*;
use serde_json::json;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_floor(1.5), 90);
}

#[test]
fn fps_ceil_does_not_overshoot_exact_frames() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(2.0), 60);
    assert_eq!(fps.secs_to_frames_ceil(2.01), 61);
}

#[test]
fn viewport_validation() {
    assert!(Viewport::new(0.0, 10.0).is_err());
    assert!(Viewport::new(f64::NAN, 10.0).is_err());
    let vp = Viewport::new(300.0, 400.0).unwrap();
    assert_eq!(vp.diagonal(), 500.0);
    assert_eq!(vp.pixel_size(), (300, 400));
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#fd2c2a")).unwrap();
    assert_eq!(c, Rgba8::CHILI);

    let c: Rgba8 = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zz0000").is_err());
}

#[test]
fn parses_byte_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn hex_serialization_omits_opaque_alpha() {
    assert_eq!(serde_json::to_value(Rgba8::CHILI).unwrap(), json!("#fd2c2a"));
    assert_eq!(
        serde_json::to_value(Rgba8::rgba(0, 0, 0, 0x80)).unwrap(),
        json!("#00000080")
    );
}

#[test]
fn with_opacity_scales_alpha_only() {
    let c = Rgba8::WHITE.with_opacity(0.5);
    assert_eq!((c.r, c.g, c.b), (255, 255, 255));
    assert_eq!(c.a, 128);
}

use super::*;
use crate::foundation::core::Palette;

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0).unwrap()
}

fn mount(host: &ScrollHost) -> App {
    App::mount(PageConfig::default(), viewport(), host, AppOpts::default()).unwrap()
}

fn run(app: &mut App, secs: f64) {
    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    while t < secs {
        app.tick(dt);
        t += dt;
    }
}

#[test]
fn mount_attaches_everything() {
    let host = ScrollHost::new();
    let app = mount(&host);
    assert!(app.is_mounted());
    assert!(host.is_attached());
    assert!(app.document().has_click_listener(app.document().heading()));
    assert!(app.fade().is_registered());
    assert!(!app.revealed());
    assert_eq!(app.rendered_canvas_counts(), [0, 0, 0]);
    assert!(app.snapshot().canvases.is_empty());
}

#[test]
fn heading_click_reveals_and_mounts_canvases() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    assert!(app.click_heading().unwrap());
    assert!(app.revealed());
    assert_eq!(
        app.rendered_canvas_counts(),
        app.config().canvas_counts()
    );

    assert!(app.click_heading().unwrap());
    assert!(!app.revealed());
    assert_eq!(app.rendered_canvas_counts(), [0, 0, 0]);
}

#[test]
fn clicks_elsewhere_are_ignored() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    assert!(!app.click(Point::new(1279.0, 1.0)).unwrap());
    assert!(!app.revealed());
    assert!(!app.marker().has_overrides());
}

#[test]
fn click_origin_is_viewport_point() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    let at = app.heading_center().unwrap();
    app.click(at).unwrap();
    assert_eq!(app.marker().origin(), Some(at));
    let snap = app.snapshot();
    assert!(snap.revealed);
    assert!(snap.marker.is_none());
}

#[test]
fn full_reveal_sequence_settles() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    app.click_heading().unwrap();
    run(&mut app, 1.0);
    assert!(app.snapshot().marker.is_some());
    run(&mut app, 1.2);
    let snap = app.snapshot();
    assert!(snap.marker.is_none());
    assert!(!app.marker().has_overrides());
    assert_eq!(snap.palette, Palette::REVEALED);
}

#[test]
fn unmount_is_idempotent_and_stops_input() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    app.click_heading().unwrap();
    run(&mut app, 0.5);
    assert!(app.unmount());
    assert!(!app.unmount());
    assert_eq!(host.release_count(), 1);
    assert_eq!(app.document().listener_count(), 0);

    let revealed = app.revealed();
    assert!(!app.click_heading().unwrap());
    assert_eq!(app.revealed(), revealed);
    let clock = app.clock_s();
    app.tick(1.0);
    assert_eq!(app.clock_s(), clock);
    drop(app);
    assert_eq!(host.release_count(), 1);
}

#[test]
fn remount_cycles_do_not_leak() {
    let host = ScrollHost::new();
    for _ in 0..4 {
        let mut app = mount(&host);
        app.unmount();
    }
    for _ in 0..4 {
        let _app = mount(&host);
    }
    assert!(!host.is_attached());
    assert_eq!(host.attach_count(), 8);
    assert_eq!(host.release_count(), 8);
}

#[test]
fn second_mount_on_same_host_fails_until_release() {
    let host = ScrollHost::new();
    let first = mount(&host);
    let err = App::mount(PageConfig::default(), viewport(), &host, AppOpts::default()).unwrap_err();
    assert!(matches!(err, ChiliError::Lifecycle(_)));
    drop(first);
    let _second = mount(&host);
}

#[test]
fn wheel_scrolls_and_clicks_account_for_offset() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    app.wheel(300.0);
    run(&mut app, 3.0);
    assert_eq!(app.scroll_y(), 300.0);

    let at = app.heading_center().unwrap();
    let page_center = app
        .document()
        .get(app.document().heading())
        .unwrap()
        .rect
        .center();
    assert_eq!(at.y, page_center.y - 300.0);
    assert!(app.click(at).unwrap());
}

#[test]
fn canvases_are_not_faded() {
    let host = ScrollHost::new();
    let mut app = mount(&host);
    let before = app.fade().registered_count();
    app.click_heading().unwrap();
    run(&mut app, 0.5);
    assert_eq!(app.fade().registered_count(), before);
}

#[test]
fn opts_fill_missing_fields_from_defaults() {
    let opts = AppOpts::from_json_str(
        r#"{ "reveal": { "grow_s": 3.0 }, "fade": { "start": "center 50%" } }"#,
    )
    .unwrap();
    assert_eq!(opts.reveal.grow_s, 3.0);
    assert_eq!(opts.reveal.color_s, 1.2);
    assert_eq!(opts.fade.start.viewport, 0.5);
    assert_eq!(opts.smoothing, SmoothingOpts::default());

    assert_eq!(AppOpts::from_json_str("{}").unwrap(), AppOpts::default());
    assert!(AppOpts::from_json_str(r#"{ "smoothing": { "lerp": 0.0 } }"#).is_err());
}

#[test]
fn covering_marker_is_flagged_in_snapshot() {
    let host = ScrollHost::new();
    let vp = Viewport::new(3840.0, 2160.0).unwrap();
    let mut app = App::mount(PageConfig::default(), vp, &host, AppOpts::default()).unwrap();
    app.click_heading().unwrap();
    app.tick(1.5);
    let marker = app.snapshot().marker.unwrap();
    assert!(marker.covers_viewport);
    assert!(app.marker().covers(vp));
}

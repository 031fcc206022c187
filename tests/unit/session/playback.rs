use super::*;
use serde_json::json;

fn script(events: serde_json::Value) -> Script {
    Script::from_json_str(
        &json!({
            "viewport": { "width": 1280.0, "height": 720.0 },
            "fps": { "num": 10, "den": 1 },
            "duration_s": 3.0,
            "events": events
        })
        .to_string(),
    )
    .unwrap()
}

fn session(events: serde_json::Value) -> Session {
    Session::new(PageConfig::default(), &script(events), AppOpts::default()).unwrap()
}

#[test]
fn plays_every_frame_once() {
    let mut s = session(json!([]));
    let frames = s.run().unwrap();
    assert_eq!(frames.len(), 30);
    assert_eq!(frames[0].time_s, 0.0);
    assert!((frames[29].time_s - 2.9).abs() < 1e-9);
    assert!(s.step().unwrap().is_none());
    assert!(frames.iter().all(|f| !f.revealed));
}

#[test]
fn events_fire_on_their_frame() {
    let mut s = session(json!([{ "at_s": 1.0, "kind": "click_heading" }]));
    let frames = s.run().unwrap();
    assert!(!frames[9].revealed);
    assert!(frames[10].revealed);
    assert!(frames[10].canvases.len() == 13);
    assert_eq!(s.stats().heading_clicks, 1);
    assert_eq!(s.stats().events, 1);
}

#[test]
fn unmount_releases_host_once() {
    let mut s = session(json!([
        { "at_s": 0.5, "kind": "click_heading" },
        { "at_s": 0.8, "kind": "unmount" },
        { "at_s": 1.0, "kind": "unmount" },
        { "at_s": 1.2, "kind": "click_heading" }
    ]));
    s.run().unwrap();
    assert_eq!(s.host().release_count(), 1);
    assert!(!s.app().is_mounted());
    assert_eq!(s.stats().heading_clicks, 1);
    assert!(s.app().revealed());
}

#[test]
fn seek_clamps_to_last_frame() {
    let mut s = session(json!([{ "at_s": 0.2, "kind": "wheel", "delta": 200.0 }]));
    let f = s.seek(100.0).unwrap();
    assert!((f.time_s - 2.9).abs() < 1e-9);
    assert!(f.scroll_y > 150.0);
    assert!(s.is_finished());
}

#[test]
fn seek_returns_requested_frame() {
    let mut s = session(json!([]));
    let f = s.seek(1.25).unwrap();
    assert!((f.time_s - 1.2).abs() < 1e-9);
    assert_eq!(s.stats().frames, 13);
}

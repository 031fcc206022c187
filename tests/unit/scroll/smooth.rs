use super::*;

fn attach(host: &ScrollHost) -> SmoothScroll {
    SmoothScroll::attach(host, 1000.0, SmoothingOpts::default()).unwrap()
}

#[test]
fn single_adapter_per_host() {
    let host = ScrollHost::new();
    let _a = attach(&host);
    let err = SmoothScroll::attach(&host, 10.0, SmoothingOpts::default()).unwrap_err();
    assert!(matches!(err, ChiliError::Lifecycle(_)));
}

#[test]
fn release_is_idempotent_and_drop_does_not_double_release() {
    let host = ScrollHost::new();
    {
        let mut s = attach(&host);
        s.release();
        s.release();
        assert!(!host.is_attached());
    }
    assert_eq!(host.attach_count(), 1);
    assert_eq!(host.release_count(), 1);
}

#[test]
fn drop_releases() {
    let host = ScrollHost::new();
    for _ in 0..3 {
        let _s = attach(&host);
        assert!(host.is_attached());
    }
    assert!(!host.is_attached());
    assert_eq!(host.attach_count(), 3);
    assert_eq!(host.release_count(), 3);
}

#[test]
fn wheel_clamps_to_limit() {
    let host = ScrollHost::new();
    let mut s = attach(&host);
    s.wheel(-50.0);
    assert_eq!(s.target(), 0.0);
    s.wheel(5000.0);
    assert_eq!(s.target(), 1000.0);
}

#[test]
fn tick_converges_and_snaps() {
    let host = ScrollHost::new();
    let mut s = attach(&host);
    s.wheel(400.0);
    s.tick(1.0 / 60.0);
    assert!((s.offset() - 40.0).abs() < 1e-9);
    for _ in 0..600 {
        s.tick(1.0 / 60.0);
    }
    assert_eq!(s.offset(), 400.0);
    assert!(s.is_settled());
}

#[test]
fn damping_is_frame_rate_independent() {
    let host_a = ScrollHost::new();
    let host_b = ScrollHost::new();
    let mut a = attach(&host_a);
    let mut b = attach(&host_b);
    a.wheel(300.0);
    b.wheel(300.0);
    for _ in 0..4 {
        a.tick(1.0 / 120.0);
    }
    for _ in 0..2 {
        b.tick(1.0 / 60.0);
    }
    assert!((a.offset() - b.offset()).abs() < 1e-6);
}

#[test]
fn wheel_after_release_is_ignored() {
    let host = ScrollHost::new();
    let mut s = attach(&host);
    s.release();
    s.wheel(100.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn rejects_bad_opts() {
    let host = ScrollHost::new();
    let opts = SmoothingOpts {
        lerp: 0.0,
        ..SmoothingOpts::default()
    };
    assert!(SmoothScroll::attach(&host, 10.0, opts).is_err());
    assert!(!host.is_attached());
}

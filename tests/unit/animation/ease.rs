use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::InOutCubic.apply(7.0), 1.0);
}

#[test]
fn web_aliases_deserialize() {
    let e: Ease = serde_json::from_str("\"power1.inOut\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
    let e: Ease = serde_json::from_str("\"power1.out\"").unwrap();
    assert_eq!(e, Ease::OutQuad);
    let e: Ease = serde_json::from_str("\"OutCubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}

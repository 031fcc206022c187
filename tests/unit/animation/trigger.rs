use super::*;

fn element() -> Rect {
    Rect::new(0.0, 1000.0, 200.0, 1100.0)
}

fn trigger() -> ScrollTrigger {
    ScrollTrigger::for_element(
        element(),
        500.0,
        TriggerPosition::TOP_80,
        TriggerPosition::BOTTOM_TOP,
        ToggleActions::PLAY_NONE_NONE_REVERSE,
    )
}

#[test]
fn parses_positions() {
    let p: TriggerPosition = "top 80%".parse().unwrap();
    assert_eq!(p, TriggerPosition::TOP_80);
    let p: TriggerPosition = "center 50%".parse().unwrap();
    assert_eq!(p.element, 0.5);
    assert_eq!(p.viewport, 0.5);
    assert!("top".parse::<TriggerPosition>().is_err());
    assert!("top 80".parse::<TriggerPosition>().is_err());
    assert!("middle 10%".parse::<TriggerPosition>().is_err());
}

#[test]
fn position_display_parses_back() {
    let s = TriggerPosition::TOP_80.to_string();
    assert_eq!(s, "top 80%");
    assert_eq!(s.parse::<TriggerPosition>().unwrap(), TriggerPosition::TOP_80);
}

#[test]
fn parses_toggle_actions() {
    let a: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(a, ToggleActions::PLAY_NONE_NONE_REVERSE);
    assert!("play none none".parse::<ToggleActions>().is_err());
    assert!("play none none rewind".parse::<ToggleActions>().is_err());
}

#[test]
fn start_is_element_top_at_eighty_percent() {
    let t = trigger();
    assert_eq!(t.start(), 600.0);
    assert_eq!(t.end(), 1100.0);
}

#[test]
fn crossings_follow_scroll_direction() {
    let mut t = trigger();
    assert!(t.update(0.0).is_empty());
    assert_eq!(t.update(650.0), vec![TriggerCallback::Enter]);
    assert!(t.update(700.0).is_empty());
    assert_eq!(t.update(1200.0), vec![TriggerCallback::Leave]);
    assert_eq!(t.update(900.0), vec![TriggerCallback::EnterBack]);
    assert_eq!(t.update(100.0), vec![TriggerCallback::LeaveBack]);
}

#[test]
fn jumps_report_both_crossings() {
    let mut t = trigger();
    t.update(0.0);
    assert_eq!(
        t.update(5000.0),
        vec![TriggerCallback::Enter, TriggerCallback::Leave]
    );
    assert_eq!(
        t.update(0.0),
        vec![TriggerCallback::EnterBack, TriggerCallback::LeaveBack]
    );
}

#[test]
fn first_update_past_start_enters() {
    let mut t = trigger();
    assert_eq!(t.update(800.0), vec![TriggerCallback::Enter]);
    assert!(t.is_active());
}

#[test]
fn play_none_none_reverse_mapping() {
    let a = ToggleActions::PLAY_NONE_NONE_REVERSE;
    assert_eq!(a.action_for(TriggerCallback::Enter), ToggleAction::Play);
    assert_eq!(a.action_for(TriggerCallback::Leave), ToggleAction::None);
    assert_eq!(a.action_for(TriggerCallback::EnterBack), ToggleAction::None);
    assert_eq!(a.action_for(TriggerCallback::LeaveBack), ToggleAction::Reverse);
}

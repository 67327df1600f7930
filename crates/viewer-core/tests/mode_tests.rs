// Mode negotiation table and transition rules.

use viewer_core::{
    CapabilitySnapshot, HeadsetHints, ModeDirective, ModeNegotiator, TourMode, ViewMode,
};

fn caps(vr: bool) -> CapabilitySnapshot {
    CapabilitySnapshot {
        has_immersive_api: vr,
        immersive_vr_supported: vr,
        immersive_ar_supported: false,
        hints: HeadsetHints::default(),
    }
}

#[test]
fn web_tour_is_always_web() {
    for vr in [false, true] {
        let (neg, directive) = ModeNegotiator::negotiate(TourMode::Web, &caps(vr));
        assert_eq!(neg.mode(), ViewMode::Web);
        assert_eq!(directive, None);
    }
}

#[test]
fn vr_tour_with_capability_auto_requests() {
    let (neg, directive) = ModeNegotiator::negotiate(TourMode::Vr, &caps(true));
    assert_eq!(neg.mode(), ViewMode::Vr);
    assert_eq!(directive, Some(ModeDirective::RequestSession));
}

#[test]
fn vr_tour_without_capability_falls_back_silently() {
    let (mut neg, directive) = ModeNegotiator::negotiate(TourMode::Vr, &caps(false));
    assert_eq!(neg.mode(), ViewMode::Web);
    assert_eq!(directive, None, "silent fallback never prompts or requests");
    // The fallback is final: no later selection can request a session.
    assert_eq!(neg.select_vr(), None);
    assert_eq!(neg.mode(), ViewMode::Web);
}

#[test]
fn both_tour_asks_only_when_capable() {
    let (neg, directive) = ModeNegotiator::negotiate(TourMode::Both, &caps(true));
    assert_eq!(neg.mode(), ViewMode::Ask);
    assert_eq!(directive, Some(ModeDirective::PromptUser));

    let (neg, directive) = ModeNegotiator::negotiate(TourMode::Both, &caps(false));
    assert_eq!(neg.mode(), ViewMode::Web);
    assert_eq!(directive, None);
}

#[test]
fn select_web_is_terminal() {
    let (mut neg, _) = ModeNegotiator::negotiate(TourMode::Both, &caps(true));
    neg.select_web();
    assert_eq!(neg.mode(), ViewMode::Web);
    // Stays web even though capability would still allow immersive.
    assert_eq!(neg.select_vr(), None);
    assert_eq!(neg.mode(), ViewMode::Web);
}

#[test]
fn select_vr_requests_exactly_once() {
    let (mut neg, _) = ModeNegotiator::negotiate(TourMode::Both, &caps(true));
    assert_eq!(neg.select_vr(), Some(ModeDirective::RequestSession));
    assert_eq!(neg.mode(), ViewMode::Vr);
    // Already in vr: a second selection issues nothing.
    assert_eq!(neg.select_vr(), None);
}

#[test]
fn session_end_returns_to_web_without_reprompting() {
    let (mut neg, _) = ModeNegotiator::negotiate(TourMode::Both, &caps(true));
    neg.select_vr();
    neg.session_ended();
    assert_eq!(neg.mode(), ViewMode::Web, "never re-enters ask within a mount");
    // The enter-VR affordance may re-request from this non-terminal web state.
    assert_eq!(neg.select_vr(), Some(ModeDirective::RequestSession));
}

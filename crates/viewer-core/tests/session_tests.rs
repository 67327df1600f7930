// Session lifecycle: idempotence, the mid-flight teardown race, and the
// fixed teardown order.

use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{PresentingChange, SessionDirective, SessionEnd, SessionLifecycle};

type Lifecycle = SessionLifecycle<u32>;

fn attached() -> Lifecycle {
    let mut lc = Lifecycle::new();
    let _ = lc.attach_renderer();
    lc
}

#[test]
fn enable_is_idempotent() {
    let mut lc = attached();
    let first = lc.set_immersive_enabled(true);
    assert_eq!(first.as_slice(), [SessionDirective::SetRendererImmersive(true)]);
    let second = lc.set_immersive_enabled(true);
    assert!(second.is_empty(), "same value twice is a no-op");
}

#[test]
fn enable_before_renderer_exists_is_deferred() {
    let mut lc = Lifecycle::new();
    assert!(lc.set_immersive_enabled(true).is_empty());
    assert!(!lc.immersive_enabled());
    let on_attach = lc.attach_renderer();
    assert_eq!(on_attach.as_slice(), [SessionDirective::SetRendererImmersive(true)]);
    assert!(lc.immersive_enabled());
}

#[test]
fn disable_with_active_session_ends_detaches_then_disables() {
    let mut lc = attached();
    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());
    assert!(lc.session_created(7).is_empty());
    assert!(lc.presenting());

    let directives = lc.set_immersive_enabled(false);
    assert_eq!(
        directives.as_slice(),
        [
            SessionDirective::EndSession(7),
            SessionDirective::DetachSession,
            SessionDirective::StopFrameLoop,
            SessionDirective::SetRendererImmersive(false),
        ]
    );
    assert!(!lc.presenting(), "no session handle remains");

    // Second call: same end state, nothing left to do.
    assert!(lc.set_immersive_enabled(false).is_empty());
    assert!(!lc.presenting());
}

#[test]
fn at_most_one_request_and_one_session() {
    let mut lc = attached();
    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());
    assert!(!lc.begin_request(), "request already in flight");
    let _ = lc.session_created(1);
    assert!(!lc.begin_request(), "session already active");
}

#[test]
fn request_failure_allows_a_retry() {
    let mut lc = attached();
    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());
    lc.request_failed();
    assert!(lc.begin_request());
}

#[test]
fn teardown_during_request_ends_the_fresh_session() {
    let mut lc = attached();
    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());

    // Teardown lands while the creation promise is still pending.
    let td = lc.teardown();
    assert_eq!(
        td.as_slice(),
        [
            SessionDirective::DetachSession,
            SessionDirective::StopFrameLoop,
            SessionDirective::ReleaseGraphics,
        ]
    );

    // The promise settles afterwards: the new session must not dangle.
    let late = lc.session_created(9);
    assert_eq!(late.as_slice(), [SessionDirective::EndSession(9)]);
    assert!(!lc.presenting());
}

#[test]
fn teardown_with_active_session_runs_the_full_order() {
    let mut lc = attached();
    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());
    let _ = lc.session_created(3);

    let td = lc.teardown();
    assert_eq!(
        td.as_slice(),
        [
            SessionDirective::EndSession(3),
            SessionDirective::DetachSession,
            SessionDirective::StopFrameLoop,
            SessionDirective::ReleaseGraphics,
        ]
    );
    // Teardown is repeatable on every exit path.
    let again = lc.teardown();
    assert_eq!(
        again.as_slice(),
        [
            SessionDirective::DetachSession,
            SessionDirective::StopFrameLoop,
            SessionDirective::ReleaseGraphics,
        ]
    );
}

#[test]
fn subscribers_see_presenting_transitions_with_reasons() {
    let seen: Rc<RefCell<Vec<PresentingChange>>> = Rc::new(RefCell::new(Vec::new()));
    let mut lc = attached();
    let sink = seen.clone();
    lc.subscribe(move |change| sink.borrow_mut().push(change));

    let _ = lc.set_immersive_enabled(true);
    assert!(lc.begin_request());
    let _ = lc.session_created(1);
    let _ = lc.session_ended(SessionEnd::User);

    assert!(lc.begin_request());
    let _ = lc.session_created(2);
    let _ = lc.teardown();

    assert_eq!(
        seen.borrow().as_slice(),
        [
            PresentingChange::Started,
            PresentingChange::Ended(SessionEnd::User),
            PresentingChange::Started,
            PresentingChange::Ended(SessionEnd::Teardown),
        ]
    );
}

#[test]
fn session_end_event_without_a_session_is_ignored() {
    let mut lc = attached();
    assert!(lc.session_ended(SessionEnd::User).is_empty());
}

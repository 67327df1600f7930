//! Mode negotiation: flat web viewing, immersive VR, or ask the user.

use crate::capability::CapabilitySnapshot;
use crate::model::TourMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Ask,
    Web,
    Vr,
}

/// Startup/selection side effects the host must carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeDirective {
    /// Ask the session lifecycle to request an immersive session.
    RequestSession,
    /// Render a blocking web-or-VR choice prompt.
    PromptUser,
}

/// Small state machine deciding how the viewer runs, given the tour's
/// configured mode and the probed capability snapshot.
///
/// `Ask` is entered at most once per mount; a session ending returns the
/// viewer to `Web` without re-prompting.
#[derive(Clone, Debug)]
pub struct ModeNegotiator {
    mode: ViewMode,
    // Set when web viewing is final: tour configured web-only, capability
    // fell back silently, or the user explicitly chose web.
    web_locked: bool,
}

impl ModeNegotiator {
    pub fn negotiate(tour_mode: TourMode, caps: &CapabilitySnapshot) -> (Self, Option<ModeDirective>) {
        let immersive = caps.allows_immersive();
        match (tour_mode, immersive) {
            (TourMode::Web, _) => (Self::locked_web(), None),
            (TourMode::Vr, true) => (
                Self { mode: ViewMode::Vr, web_locked: false },
                Some(ModeDirective::RequestSession),
            ),
            // Silent fallback: never prompts, never requests a session.
            (TourMode::Vr, false) => (Self::locked_web(), None),
            (TourMode::Both, true) => (
                Self { mode: ViewMode::Ask, web_locked: false },
                Some(ModeDirective::PromptUser),
            ),
            (TourMode::Both, false) => (Self::locked_web(), None),
        }
    }

    fn locked_web() -> Self {
        Self { mode: ViewMode::Web, web_locked: true }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// User chose flat viewing from the prompt. Terminal: no session is
    /// ever requested afterwards.
    pub fn select_web(&mut self) {
        if self.mode == ViewMode::Ask {
            self.mode = ViewMode::Web;
            self.web_locked = true;
        }
    }

    /// User chose immersive viewing, either from the prompt or from the
    /// host's enter-VR affordance after a session ended.
    pub fn select_vr(&mut self) -> Option<ModeDirective> {
        match self.mode {
            ViewMode::Ask => {
                self.mode = ViewMode::Vr;
                Some(ModeDirective::RequestSession)
            }
            ViewMode::Web if !self.web_locked => {
                self.mode = ViewMode::Vr;
                Some(ModeDirective::RequestSession)
            }
            _ => None,
        }
    }

    /// The immersive session ended; the user continues flat without being
    /// re-prompted.
    pub fn session_ended(&mut self) {
        if self.mode == ViewMode::Vr {
            self.mode = ViewMode::Web;
        }
    }
}

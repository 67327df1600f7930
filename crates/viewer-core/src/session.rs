//! Immersive session lifecycle.
//!
//! The state machine is generic over the platform session handle (a JS
//! `XRSession` on the web frontend, a test double on the host) so the
//! ordering and race rules here are testable without a browser. Every
//! operation returns the ordered list of directives the platform layer
//! must execute; the machine itself performs no I/O.
//!
//! One lifecycle instance exists per viewer mount and is passed by
//! reference to collaborators, never held in a process-wide singleton.

use smallvec::SmallVec;

/// Why presenting stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Ended by the user or by a mode switch away from VR.
    User,
    /// Ended because the owning view is being torn down.
    Teardown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentingChange {
    Started,
    Ended(SessionEnd),
}

/// Platform work items, executed in order.
#[derive(Debug, PartialEq)]
pub enum SessionDirective<H> {
    SetRendererImmersive(bool),
    EndSession(H),
    DetachSession,
    StopFrameLoop,
    ReleaseGraphics,
}

pub type Directives<H> = SmallVec<[SessionDirective<H>; 4]>;

type Listener = Box<dyn FnMut(PresentingChange)>;

pub struct SessionLifecycle<H> {
    renderer_attached: bool,
    immersive_enabled: bool,
    // Enable/disable requested before the renderer existed.
    deferred_enable: Option<bool>,
    requesting: bool,
    teardown_requested: bool,
    session: Option<H>,
    listeners: Vec<Listener>,
}

impl<H> Default for SessionLifecycle<H> {
    fn default() -> Self {
        Self {
            renderer_attached: false,
            immersive_enabled: false,
            deferred_enable: None,
            requesting: false,
            teardown_requested: false,
            session: None,
            listeners: Vec::new(),
        }
    }
}

impl<H> SessionLifecycle<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an immersive session is actively rendering to the device.
    pub fn presenting(&self) -> bool {
        self.session.is_some()
    }

    pub fn immersive_enabled(&self) -> bool {
        self.immersive_enabled
    }

    /// Notified on presenting transitions: `Started` on session start,
    /// `Ended` on session end with the reason.
    pub fn subscribe(&mut self, listener: impl FnMut(PresentingChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: PresentingChange) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for l in &mut listeners {
            l(change);
        }
        // Subscriptions added from inside a callback are kept.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    /// The renderer now exists; apply any enable/disable that arrived
    /// before it did.
    pub fn attach_renderer(&mut self) -> Directives<H> {
        self.renderer_attached = true;
        match self.deferred_enable.take() {
            Some(enabled) => self.set_immersive_enabled(enabled),
            None => Directives::new(),
        }
    }

    /// Idempotent. Toggling to `false` while a session is active ends the
    /// session, detaches it, then disables the renderer flag, in that
    /// order.
    pub fn set_immersive_enabled(&mut self, enabled: bool) -> Directives<H> {
        if !self.renderer_attached {
            self.deferred_enable = Some(enabled);
            return Directives::new();
        }
        let mut out = Directives::new();
        if enabled {
            if !self.immersive_enabled {
                self.immersive_enabled = true;
                out.push(SessionDirective::SetRendererImmersive(true));
            }
            return out;
        }
        if !self.immersive_enabled && self.session.is_none() {
            return out; // second call in a row: no-op
        }
        if let Some(handle) = self.session.take() {
            out.push(SessionDirective::EndSession(handle));
            out.push(SessionDirective::DetachSession);
            out.push(SessionDirective::StopFrameLoop);
            self.notify(PresentingChange::Ended(SessionEnd::User));
        }
        self.immersive_enabled = false;
        out.push(SessionDirective::SetRendererImmersive(false));
        out
    }

    /// Gate for an async session request. At most one request is in
    /// flight and at most one session exists per viewer instance.
    pub fn begin_request(&mut self) -> bool {
        if self.teardown_requested || self.requesting || self.session.is_some() {
            return false;
        }
        self.requesting = true;
        true
    }

    /// The creation promise resolved. If teardown was requested while the
    /// request was in flight, the fresh session is ended immediately
    /// instead of dangling.
    pub fn session_created(&mut self, handle: H) -> Directives<H> {
        self.requesting = false;
        let mut out = Directives::new();
        if self.teardown_requested || !self.immersive_enabled {
            out.push(SessionDirective::EndSession(handle));
            return out;
        }
        self.session = Some(handle);
        self.notify(PresentingChange::Started);
        out
    }

    /// The creation promise rejected.
    pub fn request_failed(&mut self) {
        self.requesting = false;
    }

    /// The platform reported the session's end event (user exit or device
    /// interruption).
    pub fn session_ended(&mut self, reason: SessionEnd) -> Directives<H> {
        let mut out = Directives::new();
        if self.session.take().is_some() {
            out.push(SessionDirective::DetachSession);
            out.push(SessionDirective::StopFrameLoop);
            self.notify(PresentingChange::Ended(reason));
        }
        out
    }

    /// Unconditional, total teardown: end the session if any, then detach
    /// it, stop the frame loop and release graphics resources. The order
    /// is the same on every exit path. Safe to call more than once.
    pub fn teardown(&mut self) -> Directives<H> {
        self.teardown_requested = true;
        let was_presenting = self.session.is_some();
        let mut out = Directives::new();
        if let Some(handle) = self.session.take() {
            out.push(SessionDirective::EndSession(handle));
        }
        out.push(SessionDirective::DetachSession);
        out.push(SessionDirective::StopFrameLoop);
        out.push(SessionDirective::ReleaseGraphics);
        self.immersive_enabled = false;
        if was_presenting {
            self.notify(PresentingChange::Ended(SessionEnd::Teardown));
        }
        out
    }
}

//! Viewer façade: one instance per mount, owning all per-mount state.

use crate::capability::CapabilitySnapshot;
use crate::constants::{MARKER_PICK_RADIUS, MAX_MARKERS};
use crate::mode::{ModeDirective, ModeNegotiator, ViewMode};
use crate::model::{Hotspot, HotspotKind, Scene, Tour, TourMode};
use crate::navigator::SceneNavigator;
use crate::orientation::OrientationController;
use crate::picking::{pick_hotspot, screen_to_world_ray};
use crate::session::{Directives, SessionEnd, SessionLifecycle};

pub struct Viewer<H> {
    tour: Tour,
    capability: CapabilitySnapshot,
    navigator: SceneNavigator,
    negotiator: ModeNegotiator,
    orientation: OrientationController,
    lifecycle: SessionLifecycle<H>,
    capability_settled: bool,
    /// Non-null only while a hotspot detail view is open; cleared by the
    /// host.
    pending_interaction: Option<Hotspot>,
}

impl<H> Viewer<H> {
    pub fn new(
        tour: Tour,
        scenes: Vec<Scene>,
        capability: CapabilitySnapshot,
        initial_scene_id: Option<&str>,
    ) -> (Self, Option<ModeDirective>) {
        let (negotiator, directive) = ModeNegotiator::negotiate(tour.mode, &capability);
        let viewer = Self {
            tour,
            capability,
            navigator: SceneNavigator::new(scenes, initial_scene_id),
            negotiator,
            orientation: OrientationController::new(),
            lifecycle: SessionLifecycle::new(),
            capability_settled: false,
            pending_interaction: None,
        };
        (viewer, directive)
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn capability(&self) -> &CapabilitySnapshot {
        &self.capability
    }

    pub fn mode(&self) -> ViewMode {
        self.negotiator.mode()
    }

    pub fn presenting(&self) -> bool {
        self.lifecycle.presenting()
    }

    /// Whether host chrome should offer an enter-immersive affordance.
    pub fn immersive_affordance_visible(&self) -> bool {
        self.capability.immersive_vr_supported && self.tour.mode != TourMode::Web
    }

    pub fn navigator(&self) -> &SceneNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SceneNavigator {
        &mut self.navigator
    }

    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    pub fn orientation_mut(&mut self) -> &mut OrientationController {
        &mut self.orientation
    }

    pub fn lifecycle(&self) -> &SessionLifecycle<H> {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut SessionLifecycle<H> {
        &mut self.lifecycle
    }

    /// Apply a settled capability probe. A mount may start from an
    /// unknown snapshot so the first frame never waits on the async
    /// probe; the first settlement renegotiates the mode, later ones are
    /// ignored.
    pub fn capability_resolved(&mut self, capability: CapabilitySnapshot) -> Option<ModeDirective> {
        if self.capability_settled {
            return None;
        }
        self.capability_settled = true;
        let (negotiator, directive) = ModeNegotiator::negotiate(self.tour.mode, &capability);
        self.capability = capability;
        self.negotiator = negotiator;
        directive
    }

    pub fn select_web(&mut self) {
        self.negotiator.select_web();
    }

    pub fn select_vr(&mut self) -> Option<ModeDirective> {
        self.negotiator.select_vr()
    }

    /// Frame boundary: the only point where orientation authority may
    /// switch, so one frame never mixes pointer and head-pose input.
    pub fn begin_frame(&mut self) {
        let presenting = self.lifecycle.presenting();
        self.orientation.set_presenting(presenting);
        if !presenting {
            self.orientation.step();
        }
    }

    /// Session end reached the lifecycle; keep the negotiated mode in
    /// sync (the user continues flat without re-prompting).
    pub fn session_ended(&mut self, reason: SessionEnd) -> Directives<H> {
        let directives = self.lifecycle.session_ended(reason);
        self.negotiator.session_ended();
        directives
    }

    /// Full per-mount teardown. The session ends before the frame loop
    /// stops, and graphics release last.
    pub fn teardown(&mut self) -> Directives<H> {
        let directives = self.lifecycle.teardown();
        self.negotiator.session_ended();
        directives
    }

    /// Hit-test the current scene's markers with a ray through the given
    /// NDC position.
    pub fn pick_hotspot_at(&self, ndc_x: f32, ndc_y: f32, aspect: f32) -> Option<usize> {
        let scene = self.navigator.current()?;
        let (ro, rd) = screen_to_world_ray(ndc_x, ndc_y, aspect, self.orientation.orientation());
        // Only markers that fit the instance buffer are on screen.
        let visible = &scene.hotspots[..scene.hotspots.len().min(MAX_MARKERS)];
        pick_hotspot(ro, rd, visible, MARKER_PICK_RADIUS)
    }

    /// A marker was clicked. Records the pending interaction and returns
    /// the full hotspot record for the host callback.
    pub fn hotspot_clicked(&mut self, index: usize) -> Option<Hotspot> {
        let hotspot = self.navigator.current()?.hotspots.get(index)?.clone();
        self.pending_interaction = Some(hotspot.clone());
        Some(hotspot)
    }

    pub fn pending_interaction(&self) -> Option<&Hotspot> {
        self.pending_interaction.as_ref()
    }

    /// Host closed the detail view.
    pub fn clear_interaction(&mut self) {
        self.pending_interaction = None;
    }

    /// For navigation hotspots, the scene index the host should select.
    pub fn navigation_target_index(&self, hotspot: &Hotspot) -> Option<usize> {
        if hotspot.kind != HotspotKind::Navigation {
            return None;
        }
        hotspot
            .target_scene_id
            .as_deref()
            .and_then(|id| self.navigator.index_of(id))
    }
}

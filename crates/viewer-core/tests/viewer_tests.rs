// End-to-end facade behaviour: navigation via hotspots, picking, the
// interaction channel, and mode/session coupling.

use glam::Vec3;
use viewer_core::{
    CapabilitySnapshot, HeadsetHints, Hotspot, HotspotKind, ModeDirective, Scene, SessionEnd,
    Tour, TourMode, ViewMode, Viewer, MAX_MARKERS,
};

type TestViewer = Viewer<u32>;

fn caps(vr: bool) -> CapabilitySnapshot {
    CapabilitySnapshot {
        has_immersive_api: vr,
        immersive_vr_supported: vr,
        immersive_ar_supported: false,
        hints: HeadsetHints::default(),
    }
}

fn tour(mode: TourMode) -> Tour {
    Tour {
        id: "t1".to_string(),
        project_id: "p1".to_string(),
        mode,
    }
}

fn nav_hotspot(id: &str, target: &str, position: Vec3) -> Hotspot {
    Hotspot {
        id: id.to_string(),
        position,
        kind: HotspotKind::Navigation,
        title: None,
        description: None,
        media_url: None,
        target_scene_id: Some(target.to_string()),
    }
}

fn scene(id: &str, hotspots: Vec<Hotspot>) -> Scene {
    Scene {
        id: id.to_string(),
        name: format!("Scene {id}"),
        image_url: format!("/panoramas/{id}.jpg"),
        thumbnail_url: None,
        hotspots,
    }
}

fn three_scene_viewer(mode: TourMode, vr: bool) -> (TestViewer, Option<ModeDirective>) {
    let scenes = vec![
        scene("A", vec![nav_hotspot("h-to-b", "B", Vec3::new(0.0, 0.0, -40.0))]),
        scene("B", Vec::new()),
        scene("C", Vec::new()),
    ];
    Viewer::new(tour(mode), scenes, caps(vr), None)
}

#[test]
fn navigation_hotspot_resolves_to_scene_index() {
    let (mut viewer, _) = three_scene_viewer(TourMode::Web, false);
    let hotspot = viewer.hotspot_clicked(0).expect("scene A has a marker");
    let target = viewer
        .navigation_target_index(&hotspot)
        .expect("target B is part of the tour");
    assert_eq!(target, 1);
    assert!(viewer.navigator_mut().select_by_index(target));
    assert_eq!(viewer.navigator().current().unwrap().id, "B");
}

#[test]
fn pick_hits_a_marker_straight_ahead() {
    // Default orientation looks down -Z; the scene A marker sits there.
    let (viewer, _) = three_scene_viewer(TourMode::Web, false);
    assert_eq!(viewer.pick_hotspot_at(0.0, 0.0, 16.0 / 9.0), Some(0));
    // A ray towards the opposite hemisphere misses.
    assert_eq!(viewer.pick_hotspot_at(0.9, 0.9, 16.0 / 9.0), None);
}

#[test]
fn pick_prefers_the_nearest_marker() {
    let scenes = vec![scene(
        "A",
        vec![
            nav_hotspot("far", "B", Vec3::new(0.0, 0.0, -90.0)),
            nav_hotspot("near", "B", Vec3::new(0.0, 0.0, -30.0)),
        ],
    ), scene("B", Vec::new())];
    let (viewer, _) = Viewer::<u32>::new(tour(TourMode::Web), scenes, caps(false), None);
    assert_eq!(viewer.pick_hotspot_at(0.0, 0.0, 1.5), Some(1));
}

#[test]
fn interaction_channel_is_set_and_cleared() {
    let (mut viewer, _) = three_scene_viewer(TourMode::Web, false);
    assert!(viewer.pending_interaction().is_none());
    viewer.hotspot_clicked(0);
    assert_eq!(viewer.pending_interaction().unwrap().id, "h-to-b");
    viewer.clear_interaction();
    assert!(viewer.pending_interaction().is_none());
    // Out-of-range clicks change nothing.
    assert!(viewer.hotspot_clicked(7).is_none());
    assert!(viewer.pending_interaction().is_none());
}

#[test]
fn immersive_affordance_needs_capability_and_a_non_web_tour() {
    let (viewer, _) = three_scene_viewer(TourMode::Both, true);
    assert!(viewer.immersive_affordance_visible());
    let (viewer, _) = three_scene_viewer(TourMode::Both, false);
    assert!(!viewer.immersive_affordance_visible());
    let (viewer, _) = three_scene_viewer(TourMode::Web, true);
    assert!(!viewer.immersive_affordance_visible());
}

#[test]
fn markers_past_the_instance_capacity_are_not_pickable() {
    // Overfull scene: the marker past the buffer capacity is not drawn,
    // so it must not be clickable either.
    let mut hotspots: Vec<Hotspot> = (0..MAX_MARKERS)
        .map(|i| nav_hotspot(&format!("h{i}"), "B", Vec3::new(200.0, 200.0, 200.0)))
        .collect();
    hotspots.push(nav_hotspot("overfull", "B", Vec3::new(0.0, 0.0, -40.0)));
    let scenes = vec![scene("A", hotspots), scene("B", Vec::new())];
    let (viewer, _) = Viewer::<u32>::new(tour(TourMode::Web), scenes, caps(false), None);
    assert_eq!(viewer.pick_hotspot_at(0.0, 0.0, 1.5), None);
}

#[test]
fn capability_probe_may_settle_after_mount() {
    // A mount starts flat with an unknown snapshot so the first paint
    // never waits on the probe.
    let scenes = vec![scene("A", Vec::new())];
    let (mut viewer, directive) =
        Viewer::<u32>::new(tour(TourMode::Both), scenes, CapabilitySnapshot::none(), None);
    assert_eq!(directive, None);
    assert_eq!(viewer.mode(), ViewMode::Web);
    assert!(!viewer.immersive_affordance_visible());

    // The settled probe renegotiates and raises the prompt.
    let directive = viewer.capability_resolved(caps(true));
    assert_eq!(directive, Some(ModeDirective::PromptUser));
    assert_eq!(viewer.mode(), ViewMode::Ask);
    assert!(viewer.immersive_affordance_visible());

    // One snapshot per mount; later settlements change nothing.
    assert_eq!(viewer.capability_resolved(caps(false)), None);
    assert_eq!(viewer.mode(), ViewMode::Ask);
}

#[test]
fn late_probe_on_a_vr_tour_requests_a_session() {
    let scenes = vec![scene("A", Vec::new())];
    let (mut viewer, directive) =
        Viewer::<u32>::new(tour(TourMode::Vr), scenes, CapabilitySnapshot::none(), None);
    assert_eq!(directive, None);
    assert_eq!(
        viewer.capability_resolved(caps(true)),
        Some(ModeDirective::RequestSession)
    );
    assert_eq!(viewer.mode(), ViewMode::Vr);

    // An incapable answer keeps flat viewing with no prompt.
    let scenes = vec![scene("A", Vec::new())];
    let (mut viewer, _) =
        Viewer::<u32>::new(tour(TourMode::Vr), scenes, CapabilitySnapshot::none(), None);
    assert_eq!(viewer.capability_resolved(caps(false)), None);
    assert_eq!(viewer.mode(), ViewMode::Web);
}

#[test]
fn mount_negotiation_flows_through_the_facade() {
    let (viewer, directive) = three_scene_viewer(TourMode::Both, true);
    assert_eq!(viewer.mode(), ViewMode::Ask);
    assert_eq!(directive, Some(ModeDirective::PromptUser));

    let (viewer, directive) = three_scene_viewer(TourMode::Vr, true);
    assert_eq!(viewer.mode(), ViewMode::Vr);
    assert_eq!(directive, Some(ModeDirective::RequestSession));

    let (viewer, directive) = three_scene_viewer(TourMode::Vr, false);
    assert_eq!(viewer.mode(), ViewMode::Web);
    assert_eq!(directive, None);
}

#[test]
fn begin_frame_switches_authority_at_the_boundary() {
    let (mut viewer, _) = three_scene_viewer(TourMode::Both, true);
    let _ = viewer.select_vr();
    let _ = viewer.lifecycle_mut().attach_renderer();
    let _ = viewer.lifecycle_mut().set_immersive_enabled(true);
    assert!(viewer.lifecycle_mut().begin_request());
    let _ = viewer.lifecycle_mut().session_created(1);
    assert!(viewer.presenting());

    viewer.begin_frame();
    viewer.orientation_mut().set_head_pose(0.9, 0.2);
    // Pointer events arriving mid-session leave the pose untouched.
    viewer.orientation_mut().pointer_moved(1.0, 1.0);
    assert_eq!(viewer.orientation().state().yaw, 0.9);

    let _ = viewer.session_ended(SessionEnd::User);
    viewer.begin_frame();
    // Back on pointer authority with no orientation jump.
    assert_eq!(viewer.orientation().state().target_yaw, 0.9);
    assert_eq!(viewer.mode(), ViewMode::Web);
    // The affordance can re-enter immersive from this state.
    assert_eq!(viewer.select_vr(), Some(ModeDirective::RequestSession));
}

#[test]
fn teardown_syncs_mode_and_lifecycle() {
    let (mut viewer, _) = three_scene_viewer(TourMode::Vr, true);
    let _ = viewer.lifecycle_mut().attach_renderer();
    let _ = viewer.lifecycle_mut().set_immersive_enabled(true);
    assert!(viewer.lifecycle_mut().begin_request());
    let _ = viewer.lifecycle_mut().session_created(4);

    let directives = viewer.teardown();
    assert_eq!(directives.len(), 4, "end, detach, stop, release");
    assert!(!viewer.presenting());
    assert_eq!(viewer.mode(), ViewMode::Web);
}

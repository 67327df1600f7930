// Orientation authority switching, smoothing, and the pitch clamp.

use glam::EulerRot;
use viewer_core::{
    OrientationAuthority, OrientationController, MAX_PITCH, MAX_YAW, ORIENTATION_SMOOTHING,
    POINTER_GAIN,
};

#[test]
fn pointer_targets_follow_the_normalized_position() {
    let mut c = OrientationController::new();
    c.pointer_moved(1.0, 0.0);
    let s = c.state();
    assert!((s.target_yaw - MAX_YAW * POINTER_GAIN).abs() < 1e-6);
    assert_eq!(s.target_pitch, 0.0);

    c.pointer_moved(0.0, 1.0);
    assert!((c.state().target_pitch + MAX_PITCH * POINTER_GAIN).abs() < 1e-6);
}

#[test]
fn target_pitch_is_always_clamped() {
    let mut c = OrientationController::new();
    for ny in [-100.0f32, -1.5, -1.0, 0.0, 1.0, 1.5, 100.0, f32::MAX] {
        c.pointer_moved(0.0, ny);
        let tp = c.state().target_pitch;
        assert!(
            (-MAX_PITCH..=MAX_PITCH).contains(&tp),
            "target pitch {tp} escaped the clamp for input {ny}"
        );
    }
}

#[test]
fn step_converges_on_the_target() {
    let mut c = OrientationController::new();
    c.pointer_moved(1.0, -1.0);
    let target_yaw = c.state().target_yaw;
    // One step moves by the smoothing fraction of the remaining delta.
    c.step();
    assert!((c.state().yaw - target_yaw * ORIENTATION_SMOOTHING).abs() < 1e-6);
    for _ in 0..500 {
        c.step();
    }
    assert!((c.state().yaw - target_yaw).abs() < 1e-3);
    assert!((c.state().pitch - c.state().target_pitch).abs() < 1e-3);
}

#[test]
fn head_pose_authority_ignores_pointer_input() {
    let mut c = OrientationController::new();
    c.set_presenting(true);
    assert_eq!(c.authority(), OrientationAuthority::HeadPose);

    c.pointer_moved(1.0, 1.0);
    assert_eq!(c.state().target_yaw, 0.0, "pointer ignored while presenting");

    c.set_head_pose(0.7, -0.3);
    assert_eq!(c.state().yaw, 0.7);
    assert_eq!(c.state().pitch, -0.3);

    // step() does not smooth the device pose.
    c.step();
    assert_eq!(c.state().yaw, 0.7);
}

#[test]
fn head_pose_is_ignored_when_not_presenting() {
    let mut c = OrientationController::new();
    c.set_head_pose(1.0, 1.0);
    assert_eq!(c.state().yaw, 0.0);
}

#[test]
fn returning_to_pointer_resets_targets_to_current_orientation() {
    let mut c = OrientationController::new();
    c.set_presenting(true);
    c.set_head_pose(1.2, 0.4);
    c.set_presenting(false);
    let s = c.state();
    assert_eq!(s.target_yaw, 1.2, "no jump when authority returns to pointer");
    assert_eq!(s.target_pitch, 0.4);
    // With targets equal to current angles, a step changes nothing.
    c.step();
    assert_eq!(c.state().yaw, 1.2);
}

#[test]
fn orientation_quaternion_is_yaw_then_pitch() {
    let mut c = OrientationController::new();
    c.pointer_moved(0.5, -0.5);
    for _ in 0..1000 {
        c.step();
    }
    let (yaw, pitch, roll) = c.orientation().to_euler(EulerRot::YXZ);
    assert!((yaw - c.state().yaw).abs() < 1e-4);
    assert!((pitch - c.state().pitch).abs() < 1e-4);
    assert!(roll.abs() < 1e-4);
}

//! Camera orientation from pointer input or device head pose.
//!
//! Exactly one authority is active at a time, chosen by the presenting
//! flag. The controller has no rendering-API dependencies; frontends call
//! `step` once per frame and read the orientation quaternion.

use crate::constants::{MAX_PITCH, MAX_YAW, ORIENTATION_SMOOTHING, POINTER_GAIN};
use glam::{EulerRot, Quat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationAuthority {
    Pointer,
    HeadPose,
}

/// Yaw/pitch angles in radians. Pitch and target pitch are always within
/// `[-MAX_PITCH, MAX_PITCH]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationState {
    pub yaw: f32,
    pub pitch: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
}

#[derive(Debug, Default)]
pub struct OrientationController {
    state: OrientationState,
    presenting: bool,
}

impl OrientationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OrientationState {
        self.state
    }

    pub fn authority(&self) -> OrientationAuthority {
        if self.presenting {
            OrientationAuthority::HeadPose
        } else {
            OrientationAuthority::Pointer
        }
    }

    /// Switch authority. Read once per frame, at the frame boundary, so a
    /// single frame never mixes pointer and head-pose input. When authority
    /// returns to the pointer, targets reset to the current orientation so
    /// the camera does not jump.
    pub fn set_presenting(&mut self, presenting: bool) {
        if self.presenting && !presenting {
            self.state.target_yaw = self.state.yaw;
            self.state.target_pitch = self.state.pitch;
        }
        self.presenting = presenting;
    }

    /// Pointer position normalized to `[-1, 1]` on both axes relative to
    /// the render surface. Ignored entirely while presenting.
    pub fn pointer_moved(&mut self, norm_x: f32, norm_y: f32) {
        if self.presenting {
            return;
        }
        self.state.target_yaw = norm_x * MAX_YAW * POINTER_GAIN;
        self.state.target_pitch = (-norm_y * MAX_PITCH * POINTER_GAIN).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Device-reported head pose, applied unsmoothed (the driver already
    /// filters). Ignored when not presenting.
    pub fn set_head_pose(&mut self, yaw: f32, pitch: f32) {
        if !self.presenting {
            return;
        }
        self.state.yaw = yaw;
        self.state.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Per-frame smoothing toward the pointer targets. No-op while the
    /// head pose is authoritative.
    pub fn step(&mut self) {
        if self.presenting {
            return;
        }
        self.state.yaw = lerp(self.state.yaw, self.state.target_yaw, ORIENTATION_SMOOTHING);
        self.state.pitch = lerp(self.state.pitch, self.state.target_pitch, ORIENTATION_SMOOTHING)
            .clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Camera orientation rebuilt from `(pitch, yaw, 0)` in yaw-then-pitch
    /// order and applied instantaneously.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.state.yaw, self.state.pitch, 0.0)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

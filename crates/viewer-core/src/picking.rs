//! Hotspot picking math shared by both frontends.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR};
use crate::model::Hotspot;
use glam::{Mat4, Quat, Vec3, Vec4};

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Compute a world-space ray from NDC coordinates through the viewer's
/// camera. The camera sits at the sphere center, so the ray origin is the
/// world origin and only the direction depends on the orientation.
pub fn screen_to_world_ray(ndc_x: f32, ndc_y: f32, aspect: f32, orientation: Quat) -> (Vec3, Vec3) {
    let proj = Mat4::perspective_rh(CAMERA_FOV_RADIANS, aspect, CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::from_quat(orientation).inverse();
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let rd = (p_far.truncate() / p_far.w).normalize();
    (Vec3::ZERO, rd)
}

/// Nearest hotspot hit by the ray, if any.
pub fn pick_hotspot(
    ray_origin: Vec3,
    ray_dir: Vec3,
    hotspots: &[Hotspot],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, h) in hotspots.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, h.position, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

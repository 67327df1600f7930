use std::f32::consts::PI;

// Shared viewer tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_FOV_RADIANS: f32 = 75.0 * PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1500.0; // must enclose the panorama sphere

// Panorama sphere
pub const PANORAMA_RADIUS: f32 = 500.0;
pub const PANORAMA_SEGMENTS: u32 = 64; // fine enough to hide faceting at grazing angles
pub const SEAM_ROTATION: f32 = PI; // puts the image seam behind the initial view

// Orientation control
pub const MAX_YAW: f32 = PI; // ±180°
pub const MAX_PITCH: f32 = PI / 2.2; // ±~82°
pub const ORIENTATION_SMOOTHING: f32 = 0.08; // fraction of remaining delta per frame
pub const POINTER_GAIN: f32 = 0.25; // pointer sweep covers a quarter of the full range

// Hotspot markers
pub const MARKER_SCALE: f32 = 8.0; // world-space quad size
pub const MARKER_PICK_RADIUS: f32 = 8.0; // ray-sphere radius for picking
// Instance buffer capacity. Picking honours the same cap so a marker past
// it is neither drawn nor clickable.
pub const MAX_MARKERS: usize = 64;

// Shown while no panorama texture has loaded yet
pub const PLACEHOLDER_RGBA: [u8; 4] = [38, 40, 48, 255];

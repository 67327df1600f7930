//! Panorama sphere mesh generation.

use crate::constants::SEAM_ROTATION;
use std::f32::consts::{PI, TAU};

/// Interleaved position (xyz) + uv vertices and triangle indices for a
/// UV sphere wound for viewing from the interior.
pub struct SphereMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub const FLOATS_PER_VERTEX: usize = 5;

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / Self::FLOATS_PER_VERTEX
    }
}

/// Builds the enclosing sphere the equirectangular image is mapped onto.
///
/// The 180° seam rotation is baked into the parameterization so the image
/// seam lands behind the initial viewing direction, and `u` is mirrored
/// because the texture is seen from inside the sphere.
pub fn panorama_sphere_mesh(radius: f32, segments: u32) -> SphereMesh {
    let segs = segments.max(3);
    let ring = segs + 1;
    let mut vertices = Vec::with_capacity((ring * ring) as usize * SphereMesh::FLOATS_PER_VERTEX);
    for j in 0..=segs {
        let v = j as f32 / segs as f32;
        let phi = v * PI; // 0 at the top pole
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for i in 0..=segs {
            let u = i as f32 / segs as f32;
            let theta = u * TAU + SEAM_ROTATION;
            let x = ring_radius * theta.sin();
            let z = ring_radius * theta.cos();
            vertices.extend_from_slice(&[x, y, z, 1.0 - u, v]);
        }
    }
    let mut indices = Vec::with_capacity((segs * segs * 6) as usize);
    for j in 0..segs {
        for i in 0..segs {
            let a = j * ring + i;
            let b = a + ring;
            // Wound for back-face visibility (interior viewpoint).
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    SphereMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_counts_match_segments() {
        let mesh = panorama_sphere_mesh(500.0, 64);
        assert_eq!(mesh.vertex_count(), 65 * 65);
        assert_eq!(mesh.indices.len(), 64 * 64 * 6);
    }

    #[test]
    fn sphere_vertices_lie_on_the_sphere() {
        let mesh = panorama_sphere_mesh(500.0, 16);
        for chunk in mesh.vertices.chunks(SphereMesh::FLOATS_PER_VERTEX) {
            let r = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert!((r - 500.0).abs() < 0.1, "vertex off sphere: r={r}");
            assert!((0.0..=1.0).contains(&chunk[3]));
            assert!((0.0..=1.0).contains(&chunk[4]));
        }
    }

    #[test]
    fn sphere_indices_are_in_range() {
        let mesh = panorama_sphere_mesh(500.0, 8);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }
}

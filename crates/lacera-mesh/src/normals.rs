//! Vertex normal computation from triangle mesh data.
//!
//! This is the normal-estimator seam consumed after any geometry or
//! connectivity change: area-weighted face normals accumulated per
//! vertex, then normalized.

use glam::Vec3;

use crate::mesh::ClothMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex. Vertices referenced by no triangle keep a zero
/// normal rather than NaN.
///
/// Modifies `mesh.normals` in place.
pub fn compute_vertex_normals(mesh: &mut ClothMesh) {
    for n in mesh.normals.iter_mut() {
        *n = Vec3::ZERO;
    }

    for tri in &mesh.triangles {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

        let e1 = mesh.positions[b] - mesh.positions[a];
        let e2 = mesh.positions[c] - mesh.positions[a];

        // Magnitude = 2 × triangle area
        let face = e1.cross(e2);

        mesh.normals[a] += face;
        mesh.normals[b] += face;
        mesh.normals[c] += face;
    }

    for n in mesh.normals.iter_mut() {
        let len = n.length();
        if len > 1e-10 {
            *n /= len;
        }
    }
}

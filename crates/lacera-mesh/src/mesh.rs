//! Core cloth mesh type with parallel per-vertex attribute arrays.
//!
//! All per-vertex channels (`positions`, `normals`, `uvs`, `colors`) are
//! index-aligned: vertex `i` owns slot `i` of every array. The triangle
//! list references into these arrays; triple order encodes winding and is
//! preserved under mutation except for single retargeted slots.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use lacera_types::{LaceraError, LaceraResult};

/// A triangle mesh with index-aligned per-vertex attribute arrays.
///
/// This is the single source of truth handed to the rendering
/// collaborator. Vertices are only ever appended (splits grow every
/// array by one entry at the new highest index); no vertex is removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClothMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Vertex normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Vertex colors (RGB).
    pub colors: Vec<Vec3>,
    /// Triangle indices — each triangle is `[v0, v1, v2]`.
    pub triangles: Vec<[u32; 3]>,
}

impl ClothMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            normals: Vec::with_capacity(vertex_capacity),
            uvs: Vec::with_capacity(vertex_capacity),
            colors: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Appends one vertex with all of its attributes.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2, color: Vec3) {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        self.colors.push(color);
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All per-vertex arrays have the same length
    /// - Triangle indices are within bounds
    ///
    /// Degenerate triangles are *not* rejected: a torn mesh may hold
    /// triangles whose slots were retargeted mid-step.
    pub fn validate(&self) -> LaceraResult<()> {
        let n = self.positions.len();

        if self.normals.len() != n {
            return Err(LaceraError::InvalidMesh(format!(
                "Normal count ({}) != position count ({})",
                self.normals.len(),
                n
            )));
        }
        if self.uvs.len() != n {
            return Err(LaceraError::InvalidMesh(format!(
                "UV count ({}) != position count ({})",
                self.uvs.len(),
                n
            )));
        }
        if self.colors.len() != n {
            return Err(LaceraError::InvalidMesh(format!(
                "Color count ({}) != position count ({})",
                self.colors.len(),
                n
            )));
        }

        for (t, tri) in self.triangles.iter().enumerate() {
            for &idx in tri {
                if idx as usize >= n {
                    return Err(LaceraError::InvalidMesh(format!(
                        "Triangle {} references vertex {} (vertex count: {})",
                        t, idx, n
                    )));
                }
            }
        }

        Ok(())
    }
}

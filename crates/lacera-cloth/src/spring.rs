//! The mass-spring network — per-vertex adjacency lists.
//!
//! Springs are always inserted as symmetric pairs: if A holds a spring
//! to B with rest length L, B holds one back to A with the same L, or
//! neither exists. Spring order within a vertex reflects insertion
//! order, not geometric order; the tear detector's traversal relies on
//! that order being deterministic.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A directed half of a symmetric spring pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Index of the vertex at the other end.
    pub neighbor: u32,
    /// Rest length, fixed at insertion time.
    pub rest_length: f32,
}

/// Physical state carried per vertex when the cloth is simulated.
///
/// Meshes generated for drawing only omit this entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VertexDynamics {
    /// Accumulated force, owned by the external integrator.
    pub force: Vec3,
    /// Velocity, owned by the external integrator.
    pub velocity: Vec3,
    /// Outgoing springs, in insertion order.
    pub springs: Vec<Spring>,
}

/// The spring graph over all cloth vertices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpringNetwork {
    vertices: Vec<VertexDynamics>,
}

impl SpringNetwork {
    /// Creates a network of `n` vertices with no springs.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertices: vec![VertexDynamics::default(); n],
        }
    }

    /// Number of vertices in the network.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of directed spring entries across all vertices.
    pub fn spring_count(&self) -> usize {
        self.vertices.iter().map(|v| v.springs.len()).sum()
    }

    /// The outgoing springs of vertex `v`, in insertion order.
    pub fn springs_of(&self, v: u32) -> &[Spring] {
        &self.vertices[v as usize].springs
    }

    /// Mutable access to the dynamics of vertex `v`.
    pub fn dynamics_mut(&mut self, v: u32) -> &mut VertexDynamics {
        &mut self.vertices[v as usize]
    }

    /// Read access to the dynamics of vertex `v`.
    pub fn dynamics(&self, v: u32) -> &VertexDynamics {
        &self.vertices[v as usize]
    }

    /// Appends one vertex with no springs, returning its index.
    pub fn push_vertex(&mut self) -> u32 {
        self.vertices.push(VertexDynamics::default());
        (self.vertices.len() - 1) as u32
    }

    /// Returns true if `a` holds a spring to `b`.
    pub fn has_spring(&self, a: u32, b: u32) -> bool {
        self.vertices[a as usize]
            .springs
            .iter()
            .any(|s| s.neighbor == b)
    }

    /// Inserts the symmetric spring pair (a ↔ b) unconditionally.
    ///
    /// Used for diagonal springs: generation visits each diagonal pair
    /// exactly once, so no existence check is needed. An out-of-range
    /// index makes this a silent no-op, which boundary cells rely on.
    pub fn insert_pair(&mut self, a: u32, b: u32, rest_length: f32) {
        let n = self.vertices.len();
        if a as usize >= n || b as usize >= n {
            return;
        }
        self.vertices[a as usize].springs.push(Spring {
            neighbor: b,
            rest_length,
        });
        self.vertices[b as usize].springs.push(Spring {
            neighbor: a,
            rest_length,
        });
    }

    /// Inserts the symmetric spring pair (a ↔ b) unless a spring between
    /// that unordered pair already exists.
    ///
    /// Used for structural springs, which neighboring cells would
    /// otherwise insert twice. Existence is checked by a linear scan of
    /// `a`'s spring list. Same out-of-range rule as [`Self::insert_pair`].
    pub fn insert_pair_unique(&mut self, a: u32, b: u32, rest_length: f32) {
        let n = self.vertices.len();
        if a as usize >= n || b as usize >= n {
            return;
        }
        if self.has_spring(a, b) {
            return;
        }
        self.insert_pair(a, b, rest_length);
    }

    /// Moves the springs in `migrated` from `source` to `twin`, and
    /// retargets each neighbor's reciprocal spring from `source` to
    /// `twin`, keeping the symmetry invariant.
    ///
    /// Springs not found on `source` (already migrated by an earlier
    /// split this step) are skipped.
    pub fn rehome(&mut self, source: u32, twin: u32, migrated: &[Spring]) {
        for m in migrated {
            let src = &mut self.vertices[source as usize].springs;
            let Some(pos) = src.iter().position(|s| s.neighbor == m.neighbor) else {
                continue;
            };
            let spring = src.remove(pos);
            self.vertices[twin as usize].springs.push(spring);

            if let Some(back) = self.vertices[m.neighbor as usize]
                .springs
                .iter_mut()
                .find(|s| s.neighbor == source)
            {
                back.neighbor = twin;
            }
        }
    }
}

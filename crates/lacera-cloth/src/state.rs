//! The cloth state container — the mutable per-step data.
//!
//! Owns working copies of positions and normals, the live triangle
//! sequence, the spring network, and the render shape. The shape is
//! refreshed by explicit copy (`sync_shape`) before any render handoff,
//! never implicitly.

use glam::Vec3;
use tracing::debug;

use lacera_mesh::normals::compute_vertex_normals;
use lacera_mesh::ClothMesh;
use lacera_types::LaceraResult;

use crate::grid::{GridParams, generate};
use crate::split::PendingSplit;
use crate::spring::SpringNetwork;

/// Per-step cloth state: simulation-side arrays plus the render shape.
///
/// The integrator reads and writes `positions` and the per-vertex
/// dynamics in `network`; the tear engine mutates `triangles` and the
/// shape's uv/color arrays. All arrays stay index-aligned: vertex `i`
/// means the same vertex everywhere.
#[derive(Debug, Clone)]
pub struct ClothState {
    /// Working vertex positions, read/written by the integrator.
    pub positions: Vec<Vec3>,
    /// Working vertex normals, refreshed via [`Self::update_normals`].
    pub normals: Vec<Vec3>,
    /// The live triangle sequence, mutated in place by splits.
    pub triangles: Vec<[u32; 3]>,
    /// The spring graph with per-vertex force/velocity.
    pub network: SpringNetwork,
    /// Render shape handed to the drawing collaborator.
    pub shape: ClothMesh,
}

impl ClothState {
    /// Builds the full cloth state from grid parameters.
    pub fn from_params(params: &GridParams) -> LaceraResult<Self> {
        let (shape, network) = generate(params, true)?;
        let network = network.unwrap_or_default();

        Ok(Self {
            positions: shape.positions.clone(),
            normals: shape.normals.clone(),
            triangles: shape.triangles.clone(),
            network,
            shape,
        })
    }

    /// Number of vertices in the working arrays.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Copies the working arrays into the render shape.
    ///
    /// Must be called before handing `shape` to the renderer; after it
    /// returns, all shape arrays are index-aligned and triangle indices
    /// are in bounds.
    pub fn sync_shape(&mut self) {
        self.shape.positions = self.positions.clone();
        self.shape.normals = self.normals.clone();
        self.shape.triangles = self.triangles.clone();
    }

    /// Recomputes vertex normals from the working positions and the
    /// live triangle sequence.
    pub fn update_normals(&mut self) {
        self.sync_shape();
        compute_vertex_normals(&mut self.shape);
        self.normals = self.shape.normals.clone();
    }

    /// Completes a vertex split: the caller-side half of the contract
    /// left open by [`crate::split::split_vertex`].
    ///
    /// Duplicates the source's position and normal into the twin's new
    /// slot, creates the twin's dynamics (zero force and velocity), and
    /// re-homes the migrated springs so the symmetry invariant holds
    /// again. After this the working arrays and the shape's uv/color
    /// arrays are index-aligned once more.
    pub fn finish_split(&mut self, pending: PendingSplit) {
        let source = pending.source as usize;

        debug!(
            source = pending.source,
            twin = pending.twin,
            migrated = pending.migrated.len(),
            "finishing vertex split"
        );

        self.positions.push(self.positions[source]);
        self.normals.push(self.normals[source]);
        self.network.push_vertex();
        self.network
            .rehome(pending.source, pending.twin, &pending.migrated);
    }
}

//! Grid topology generator.
//!
//! Produces a regular rows × cols grid of vertices with an extra
//! "center" vertex per cell, fan-triangulated into 4 triangles per
//! cell, and (optionally) the mass-spring network over the same
//! vertices. Center vertices are appended immediately after each row's
//! regular vertices, so vertex indices are assigned in generation order:
//!
//! ```text
//! row 0: g g g g          indices 0..cols
//!          c c c          indices cols..2*cols-1
//! row 1: g g g g          ...
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::info;

use lacera_mesh::ClothMesh;
use lacera_types::constants::MIN_GRID_SAMPLES;
use lacera_types::{LaceraError, LaceraResult};

use crate::spring::SpringNetwork;

/// Parameters for cloth grid generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridParams {
    /// Number of samples along the row axis. Must be > 3.
    pub rows: u32,
    /// Number of samples along the column axis. Must be > 3.
    pub cols: u32,
    /// World-space position of the grid's first vertex.
    pub anchor: Vec3,
    /// Physical extent of one row of cells; cell spacing is
    /// `extent / (cols - 1)` on both axes (square cells).
    pub extent: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            anchor: Vec3::ZERO,
            extent: 1.0,
        }
    }
}

impl GridParams {
    /// Vertices per fully populated row: `cols` grid vertices followed
    /// by `cols - 1` center vertices. The last row has no centers.
    #[inline]
    fn row_stride(&self) -> u32 {
        2 * self.cols - 1
    }

    /// Index of the grid vertex at (row, col).
    #[inline]
    pub fn grid_index(&self, row: u32, col: u32) -> u32 {
        row * self.row_stride() + col
    }

    /// Index of the center vertex of cell (row, col).
    #[inline]
    pub fn center_index(&self, row: u32, col: u32) -> u32 {
        row * self.row_stride() + self.cols + col
    }
}

/// Generates the cloth mesh and, when `want_physics` is set, the spring
/// network over the same vertex indices.
///
/// Per interior cell the triangle fan is emitted in pinwheel order:
/// (center, top-left, top-right), (center, top-right, bottom-right),
/// (center, bottom-right, bottom-left), (center, bottom-left, top-left).
/// Winding is consistent across the grid and preserved by later splits.
///
/// # Errors
///
/// `LaceraError::InvalidArgument` when `rows` or `cols` is ≤ 3.
pub fn generate(
    params: &GridParams,
    want_physics: bool,
) -> LaceraResult<(ClothMesh, Option<SpringNetwork>)> {
    if params.rows < MIN_GRID_SAMPLES || params.cols < MIN_GRID_SAMPLES {
        return Err(LaceraError::InvalidArgument(format!(
            "grid dimensions must be > 3 (got {}x{})",
            params.rows, params.cols
        )));
    }

    let rows = params.rows;
    let cols = params.cols;
    let spacing = params.extent / (cols - 1) as f32;

    let vertex_count = (rows * cols + (rows - 1) * (cols - 1)) as usize;
    let triangle_count = (4 * (rows - 1) * (cols - 1)) as usize;

    let mut mesh = ClothMesh::with_capacity(vertex_count, triangle_count);

    // Vertices, row-major: each row's grid vertices, then that row's
    // center vertices, before moving to the next row.
    for i in 0..rows {
        for j in 0..cols {
            let u = i as f32 / (rows - 1) as f32;
            let v = j as f32 / (cols - 1) as f32;
            let pos = params.anchor + Vec3::new(j as f32 * spacing, i as f32 * spacing, 0.0);
            mesh.push_vertex(pos, Vec3::Z, Vec2::new(u, v), Vec3::ONE);
        }

        if i < rows - 1 {
            for j in 0..cols - 1 {
                let u = (i as f32 + 0.5) / (rows - 1) as f32;
                let v = (j as f32 + 0.5) / (cols - 1) as f32;
                let pos = params.anchor
                    + Vec3::new(
                        (j as f32 + 0.5) * spacing,
                        (i as f32 + 0.5) * spacing,
                        0.0,
                    );
                mesh.push_vertex(pos, Vec3::Z, Vec2::new(u, v), Vec3::ONE);
            }
        }
    }

    let mut network = want_physics.then(|| SpringNetwork::with_vertices(vertex_count));

    // Triangle fan + springs, per cell.
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let center = params.center_index(i, j);
            let top_left = params.grid_index(i, j);
            let top_right = top_left + 1;
            let bot_left = params.grid_index(i + 1, j);
            let bot_right = bot_left + 1;

            mesh.triangles.push([center, top_left, top_right]);
            mesh.triangles.push([center, top_right, bot_right]);
            mesh.triangles.push([center, bot_right, bot_left]);
            mesh.triangles.push([center, bot_left, top_left]);

            if let Some(net) = network.as_mut() {
                // Diagonal springs: rest length is the endpoint distance
                // at generation time. Each diagonal pair is visited once
                // by construction, so no dedup is needed.
                for corner in [top_left, top_right, bot_left, bot_right] {
                    let len = mesh.positions[center as usize]
                        .distance(mesh.positions[corner as usize]);
                    net.insert_pair(center, corner, len);
                }

                // Structural springs along the cell perimeter, shared
                // with neighboring cells and therefore deduplicated.
                net.insert_pair_unique(top_left, top_right, spacing);
                net.insert_pair_unique(top_left, bot_left, spacing);
                net.insert_pair_unique(top_right, bot_right, spacing);
                net.insert_pair_unique(bot_left, bot_right, spacing);
            }
        }
    }

    info!(
        rows,
        cols,
        spacing,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        springs = network.as_ref().map_or(0, SpringNetwork::spring_count),
        "generated cloth grid"
    );

    Ok((mesh, network))
}

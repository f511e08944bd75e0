//! Topology constants and generation defaults.

/// Minimum number of samples along each grid axis.
///
/// The generator rejects `rows` or `cols` ≤ 3: below this the interleaved
/// center-vertex layout degenerates and UV denominators approach zero.
pub const MIN_GRID_SAMPLES: u32 = 4;

/// Number of boundary (single-triangle) spring edges at which a vertex
/// must be split into two independent vertices.
pub const TEAR_BOUNDARY_THRESHOLD: usize = 4;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

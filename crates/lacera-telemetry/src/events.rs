//! Topology event types.
//!
//! Structured events emitted by the mesh generator and tear engine.
//! Events are lightweight value types that carry just enough data to
//! be useful for monitoring and post-mortem debugging of tears.

use serde::{Deserialize, Serialize};
use lacera_types::VertexId;

/// A topology event emitted by the engine.
///
/// Events are tagged with a simulation step index and carry
/// domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyEvent {
    /// Simulation step number (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A cloth grid was generated.
    GridGenerated {
        /// Total vertex count (grid + center vertices).
        vertices: u32,
        /// Triangle count.
        triangles: u32,
        /// Directed spring count across the network.
        springs: u32,
    },

    /// Boundary-edge census for a tear candidate.
    BoundaryEdges {
        /// The inspected vertex.
        vertex: VertexId,
        /// Number of its spring edges touching exactly one triangle.
        count: u32,
    },

    /// A spring edge bordered by zero triangles was found (inconsistency).
    EdgeWithoutTriangle {
        /// Vertex under inspection.
        vertex: VertexId,
        /// Its spring neighbor on the offending edge.
        neighbor: VertexId,
    },

    /// A triangle search came up empty during a split (non-fatal).
    TriangleSearchMiss {
        /// Vertex being split.
        vertex: VertexId,
        /// Spring neighbor with no shared triangle.
        neighbor: VertexId,
    },

    /// A vertex was split into two.
    VertexSplit {
        /// The vertex that tore.
        source: VertexId,
        /// Its newly appended twin.
        twin: VertexId,
        /// Number of springs migrated to the twin.
        migrated: u32,
    },
}

impl TopologyEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }
}

//! Single-vertex-at-a-time tear processing.
//!
//! Detection reads the live triangle sequence, so a split applied for
//! one vertex changes what the next detection must observe. The engine
//! therefore processes candidates strictly sequentially against one
//! edge map that is updated incrementally by every split — never
//! interleaving detection and mutation across vertices.

use lacera_mesh::EdgeTriangleMap;
use lacera_telemetry::{EventBus, EventKind, TopologyEvent};
use lacera_types::VertexId;

use crate::split::begin_split;
use crate::state::ClothState;
use crate::tear::should_break;

/// Per-step tear engine: adjacency map plus telemetry bus.
pub struct TearEngine {
    map: EdgeTriangleMap,
    bus: EventBus,
    step: u32,
}

impl TearEngine {
    /// Builds the engine and its edge map from the current state.
    pub fn new(state: &ClothState) -> Self {
        Self::with_bus(state, EventBus::new())
    }

    /// Builds the engine with a caller-provided telemetry bus.
    pub fn with_bus(state: &ClothState, bus: EventBus) -> Self {
        Self {
            map: EdgeTriangleMap::build(&state.triangles),
            bus,
            step: 0,
        }
    }

    /// Rebuilds the edge map at the start of a new simulation step.
    pub fn begin_step(&mut self, state: &ClothState) {
        self.map = EdgeTriangleMap::build(&state.triangles);
        self.step += 1;
    }

    /// The current edge map (reflecting all splits applied so far).
    pub fn map(&self) -> &EdgeTriangleMap {
        &self.map
    }

    /// The telemetry bus, for registering sinks.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Evaluates and applies splits for `candidates`, one at a time.
    ///
    /// For each flagged vertex, the affected springs are its direct
    /// springs restricted to the computed neighborhood; the split is
    /// applied and finished before the next candidate is evaluated, so
    /// every detection observes the triangle sequence as of the most
    /// recently applied split.
    ///
    /// Returns the number of splits applied.
    pub fn process(&mut self, state: &mut ClothState, candidates: &[u32]) -> usize {
        let mut splits = 0;

        for &vertex in candidates {
            let report = should_break(state, &self.map, vertex);

            self.bus.emit(TopologyEvent::new(
                self.step,
                EventKind::BoundaryEdges {
                    vertex: VertexId(vertex),
                    count: report.boundary_edges as u32,
                },
            ));
            for &neighbor in &report.dangling {
                self.bus.emit(TopologyEvent::new(
                    self.step,
                    EventKind::EdgeWithoutTriangle {
                        vertex: VertexId(vertex),
                        neighbor: VertexId(neighbor),
                    },
                ));
            }

            if !report.should_split {
                continue;
            }

            let affected: Vec<_> = state
                .network
                .springs_of(vertex)
                .iter()
                .filter(|s| report.neighborhood.contains(&s.neighbor))
                .copied()
                .collect();

            let outcome = begin_split(state, &mut self.map, vertex, affected);

            for &neighbor in &outcome.misses {
                self.bus.emit(TopologyEvent::new(
                    self.step,
                    EventKind::TriangleSearchMiss {
                        vertex: VertexId(vertex),
                        neighbor: VertexId(neighbor),
                    },
                ));
            }
            self.bus.emit(TopologyEvent::new(
                self.step,
                EventKind::VertexSplit {
                    source: VertexId(outcome.pending.source),
                    twin: VertexId(outcome.pending.twin),
                    migrated: outcome.pending.migrated.len() as u32,
                },
            ));

            state.finish_split(outcome.pending);
            splits += 1;
        }

        self.bus.flush();
        splits
    }
}

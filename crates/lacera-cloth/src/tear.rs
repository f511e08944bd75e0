//! Tear detection.
//!
//! A vertex must split once enough of its spring edges have become
//! boundary edges (edges touching exactly one triangle): each such edge
//! borders a hole or an existing tear, and a vertex holding 4 or more
//! of them is a structural hub keeping two cloth flaps pinned together.

use std::collections::{HashSet, VecDeque};

use tracing::warn;

use lacera_mesh::EdgeTriangleMap;
use lacera_types::constants::TEAR_BOUNDARY_THRESHOLD;

use crate::state::ClothState;

/// Result of evaluating one tear candidate.
///
/// `neighborhood` is always populated, even when `should_split` is
/// false; callers must gate on the boolean.
#[derive(Debug, Clone)]
pub struct TearReport {
    /// Whether the vertex has accumulated enough boundary edges to split.
    pub should_split: bool,
    /// Number of spring edges touching exactly one triangle.
    pub boundary_edges: usize,
    /// Spring neighbors whose edge touches zero triangles — a
    /// topological inconsistency, skipped but reported.
    pub dangling: Vec<u32>,
    /// One side of the star of neighbors around the vertex, in BFS
    /// discovery order: the set to migrate to a twin on split.
    pub neighborhood: Vec<u32>,
}

/// Evaluates whether `vertex` must split, and computes the connected
/// subset of its neighborhood lying on one side of the prospective tear.
///
/// Boundary census: every spring neighbor is checked against the edge
/// map. A count of 0 is an inconsistency (logged, skipped); a count of
/// exactly 1 marks the edge as boundary. The vertex is flagged once the
/// boundary count reaches [`TEAR_BOUNDARY_THRESHOLD`].
pub fn should_break(state: &ClothState, map: &EdgeTriangleMap, vertex: u32) -> TearReport {
    let springs = state.network.springs_of(vertex);

    if springs.is_empty() {
        return TearReport {
            should_split: false,
            boundary_edges: 0,
            dangling: Vec::new(),
            neighborhood: Vec::new(),
        };
    }

    let mut boundary_edges = 0;
    let mut dangling = Vec::new();

    for s in springs {
        match map.triangle_count(vertex, s.neighbor) {
            0 => {
                warn!(
                    vertex,
                    neighbor = s.neighbor,
                    "spring edge borders no triangle"
                );
                dangling.push(s.neighbor);
            }
            1 => boundary_edges += 1,
            _ => {}
        }
    }

    let neighborhood = side_of_tear(state, vertex, springs[0].neighbor);

    TearReport {
        should_split: boundary_edges >= TEAR_BOUNDARY_THRESHOLD,
        boundary_edges,
        dangling,
        neighborhood,
    }
}

/// Breadth-first search over the spring graph restricted to vertices
/// that still hold a spring back to `origin`.
///
/// Starting from `origin`'s first spring neighbor, a vertex C is
/// reachable from A when A has a spring to C and C has a spring to
/// `origin`. The filter confines the traversal to `origin`'s immediate
/// star, so the result is the connected side of that star containing
/// the start vertex. Output is discovery order, which is deterministic
/// because spring lists preserve insertion order.
fn side_of_tear(state: &ClothState, origin: u32, start: u32) -> Vec<u32> {
    let mut visited: HashSet<u32> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        order.push(v);

        for s in state.network.springs_of(v) {
            let candidate = s.neighbor;
            if visited.contains(&candidate) {
                continue;
            }
            // Only neighbors still connected back to the origin belong
            // to its star; this also keeps the origin itself out, since
            // no vertex holds a spring to itself.
            if state.network.has_spring(candidate, origin) {
                visited.insert(candidate);
                queue.push_back(candidate);
            }
        }
    }

    order
}

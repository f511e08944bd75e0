//! Topology mutation: splitting a torn vertex into two.
//!
//! The mutator rewrites triangle references from the old vertex to its
//! twin and duplicates the old vertex's uv/color attributes at the new
//! top index. It deliberately does *not* populate the twin's position,
//! velocity, force, or spring list — that half of the split is owed by
//! the caller and carried as a typed [`PendingSplit`] obligation
//! (see [`crate::state::ClothState::finish_split`] for the default
//! completion).

use tracing::warn;

use lacera_mesh::EdgeTriangleMap;

use crate::spring::Spring;
use crate::state::ClothState;

/// A split whose twin vertex still needs its geometry and dynamics.
///
/// Returned by [`begin_split`]. The holder must populate the twin's
/// position, normal, velocity, force, and spring list before the next
/// render or integration handoff; until then only the shape's uv/color
/// arrays cover the twin index.
#[derive(Debug, Clone)]
#[must_use = "the twin vertex is unpopulated until the split is finished"]
pub struct PendingSplit {
    /// The vertex that tore.
    pub source: u32,
    /// The newly introduced vertex index (the arrays' new top).
    pub twin: u32,
    /// Springs whose triangles were moved over to the twin.
    pub migrated: Vec<Spring>,
}

/// What a split actually did.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// The pending obligation to finish populating the twin.
    pub pending: PendingSplit,
    /// Spring neighbors for which no shared triangle was found.
    pub misses: Vec<u32>,
}

/// Reassigns triangle references from `old` to `new` for every affected
/// spring, then duplicates `old`'s uv and color at the new top index.
///
/// For each spring the first triangle (scan order) containing the edge
/// `(old, neighbor)` has exactly its `old` slot rewritten to `new`;
/// winding of the other two slots is untouched. A spring with no
/// triangle left is a non-fatal inconsistency: logged and skipped,
/// possible after repeated tearing. The uv/color append happens even
/// when `affected` is empty.
///
/// Returns the neighbors whose triangle search missed.
pub fn split_vertex(
    state: &mut ClothState,
    map: &mut EdgeTriangleMap,
    old: u32,
    new: u32,
    affected: &[Spring],
) -> Vec<u32> {
    let mut misses = Vec::new();

    for s in affected {
        let Some(tri) = map.first_triangle(old, s.neighbor) else {
            warn!(
                vertex = old,
                neighbor = s.neighbor,
                "no triangle to retarget for affected spring"
            );
            misses.push(s.neighbor);
            continue;
        };

        let triangle = &mut state.triangles[tri as usize];
        for slot in triangle.iter_mut() {
            if *slot == old {
                *slot = new;
                break;
            }
        }

        let updated = state.triangles[tri as usize];
        map.retarget(tri, old, new, updated);
    }

    let uv = state.shape.uvs[old as usize];
    let color = state.shape.colors[old as usize];
    state.shape.uvs.push(uv);
    state.shape.colors.push(color);

    misses
}

/// Allocates the twin slot and runs [`split_vertex`] against it.
///
/// The twin index is the current vertex count — the new highest index
/// once the caller finishes populating the parallel arrays.
pub fn begin_split(
    state: &mut ClothState,
    map: &mut EdgeTriangleMap,
    old: u32,
    affected: Vec<Spring>,
) -> SplitOutcome {
    let twin = state.vertex_count() as u32;
    let misses = split_vertex(state, map, old, twin, &affected);

    SplitOutcome {
        pending: PendingSplit {
            source: old,
            twin,
            migrated: affected,
        },
        misses,
    }
}

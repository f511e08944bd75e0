//! Integration tests for lacera-cloth.

use glam::Vec3;
use lacera_cloth::grid::{GridParams, generate};
use lacera_cloth::queue::TearEngine;
use lacera_cloth::split::begin_split;
use lacera_cloth::state::ClothState;
use lacera_cloth::tear::should_break;
use lacera_mesh::EdgeTriangleMap;
use lacera_telemetry::sinks::SharedSink;
use lacera_telemetry::EventKind;

fn square_params(n: u32) -> GridParams {
    GridParams {
        rows: n,
        cols: n,
        anchor: Vec3::ZERO,
        extent: 1.0,
    }
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn counts_match_closed_form() {
    for n in [4u32, 5, 7, 10] {
        let (mesh, _) = generate(&square_params(n), false).unwrap();
        assert_eq!(mesh.vertex_count() as u32, n * n + (n - 1) * (n - 1));
        assert_eq!(mesh.triangle_count() as u32, 4 * (n - 1) * (n - 1));
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn rejects_degenerate_dimensions() {
    for (rows, cols) in [(3, 8), (8, 3), (1, 1), (0, 5)] {
        let params = GridParams {
            rows,
            cols,
            ..GridParams::default()
        };
        assert!(generate(&params, false).is_err(), "{rows}x{cols} accepted");
    }
}

#[test]
fn drawable_only_mesh_has_no_network() {
    let (_, network) = generate(&square_params(4), false).unwrap();
    assert!(network.is_none());
}

#[test]
fn n4_scenario_counts_and_rest_lengths() {
    // 4x4 grid, anchor origin, extent 1.0: 16 base + 9 center vertices.
    let (mesh, network) = generate(&square_params(4), true).unwrap();
    let net = network.unwrap();

    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.triangle_count(), 36);
    assert_eq!(net.vertex_count(), 25);

    let params = square_params(4);
    let center0 = params.center_index(0, 0);

    for s in net.springs_of(0) {
        if s.neighbor == center0 {
            assert!((s.rest_length - std::f32::consts::SQRT_2 / 6.0).abs() < 1e-6);
        } else {
            assert!((s.rest_length - 1.0 / 3.0).abs() < 1e-6);
        }
    }
}

#[test]
fn uvs_are_analytic() {
    let params = square_params(5);
    let (mesh, _) = generate(&params, false).unwrap();

    let v = params.grid_index(2, 3) as usize;
    assert!((mesh.uvs[v].x - 2.0 / 4.0).abs() < 1e-6);
    assert!((mesh.uvs[v].y - 3.0 / 4.0).abs() < 1e-6);

    let c = params.center_index(1, 1) as usize;
    assert!((mesh.uvs[c].x - 1.5 / 4.0).abs() < 1e-6);
    assert!((mesh.uvs[c].y - 1.5 / 4.0).abs() < 1e-6);
}

#[test]
fn center_vertices_sit_half_a_cell_diagonally() {
    let params = square_params(4);
    let (mesh, _) = generate(&params, false).unwrap();
    let spacing = 1.0 / 3.0;

    let c = params.center_index(1, 2) as usize;
    let expected = Vec3::new(2.5 * spacing, 1.5 * spacing, 0.0);
    assert!((mesh.positions[c] - expected).length() < 1e-6);
}

#[test]
fn fan_winding_is_pinwheel_order() {
    let params = square_params(4);
    let (mesh, _) = generate(&params, false).unwrap();

    let c = params.center_index(0, 0);
    let tl = params.grid_index(0, 0);
    let tr = params.grid_index(0, 1);
    let bl = params.grid_index(1, 0);
    let br = params.grid_index(1, 1);

    assert_eq!(mesh.triangles[0], [c, tl, tr]);
    assert_eq!(mesh.triangles[1], [c, tr, br]);
    assert_eq!(mesh.triangles[2], [c, br, bl]);
    assert_eq!(mesh.triangles[3], [c, bl, tl]);
}

// ─── Spring Network Tests ─────────────────────────────────────

#[test]
fn springs_are_symmetric_with_equal_rest_length() {
    let (_, network) = generate(&square_params(5), true).unwrap();
    let net = network.unwrap();

    for v in 0..net.vertex_count() as u32 {
        for s in net.springs_of(v) {
            let reciprocal = net
                .springs_of(s.neighbor)
                .iter()
                .find(|r| r.neighbor == v)
                .unwrap_or_else(|| panic!("no reciprocal for {v} -> {}", s.neighbor));
            assert_eq!(reciprocal.rest_length, s.rest_length);
        }
    }
}

#[test]
fn no_duplicate_spring_pairs() {
    let (_, network) = generate(&square_params(6), true).unwrap();
    let net = network.unwrap();

    for v in 0..net.vertex_count() as u32 {
        let springs = net.springs_of(v);
        for (i, s) in springs.iter().enumerate() {
            assert!(
                !springs[i + 1..].iter().any(|t| t.neighbor == s.neighbor),
                "vertex {v} holds two springs to {}",
                s.neighbor
            );
        }
    }
}

#[test]
fn out_of_range_insertion_is_a_silent_noop() {
    let (_, network) = generate(&square_params(4), true).unwrap();
    let mut net = network.unwrap();
    let before = net.spring_count();

    net.insert_pair(0, 9999, 1.0);
    net.insert_pair(9999, 0, 1.0);
    net.insert_pair_unique(9999, 9999, 1.0);

    assert_eq!(net.spring_count(), before);
}

// ─── Adjacency Tests ──────────────────────────────────────────

#[test]
fn untorn_grid_edge_triangle_counts() {
    let params = square_params(5);
    let state = ClothState::from_params(&params).unwrap();
    let map = EdgeTriangleMap::build(&state.triangles);

    // Mesh-boundary structural edge
    assert_eq!(map.triangle_count(params.grid_index(0, 0), params.grid_index(0, 1)), 1);
    // Interior structural edge
    assert_eq!(map.triangle_count(params.grid_index(1, 1), params.grid_index(1, 2)), 2);
    // Diagonal edge (center to corner) always borders two fan triangles
    assert_eq!(map.triangle_count(params.center_index(1, 1), params.grid_index(1, 1)), 2);
}

// ─── Tear Detector Tests ──────────────────────────────────────

#[test]
fn untorn_vertices_do_not_break() {
    let params = square_params(5);
    let state = ClothState::from_params(&params).unwrap();
    let map = EdgeTriangleMap::build(&state.triangles);

    let candidates = [
        params.grid_index(0, 0),   // mesh corner
        params.grid_index(0, 2),   // mesh edge
        params.grid_index(2, 2),   // interior grid vertex
        params.center_index(1, 1), // center vertex
    ];
    for v in candidates {
        let report = should_break(&state, &map, v);
        assert!(!report.should_split, "vertex {v} flagged on untorn mesh");
        assert!(report.boundary_edges < 4);
        assert!(!report.neighborhood.is_empty());
    }
}

#[test]
fn neighborhood_is_deterministic() {
    let params = square_params(5);
    let state = ClothState::from_params(&params).unwrap();
    let map = EdgeTriangleMap::build(&state.triangles);

    let v = params.grid_index(2, 2);
    let a = should_break(&state, &map, v);
    let b = should_break(&state, &map, v);
    assert_eq!(a.neighborhood, b.neighborhood);
}

/// Carve the fan around one center vertex so each of its 4 spring edges
/// touches exactly one triangle.
fn tear_around_center(state: &mut ClothState, params: &GridParams, row: u32, col: u32) {
    let c = params.center_index(row, col);
    let base = 4 * ((row * (params.cols - 1) + col) as usize);

    // Removing two opposite fan triangles leaves each (center, corner)
    // edge with exactly one bordering triangle.
    debug_assert_eq!(state.triangles[base][0], c);
    state.triangles.remove(base + 2);
    state.triangles.remove(base);
}

#[test]
fn torn_center_vertex_breaks() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();
    let c = params.center_index(1, 1);

    tear_around_center(&mut state, &params, 1, 1);
    let map = EdgeTriangleMap::build(&state.triangles);

    let report = should_break(&state, &map, c);
    assert!(report.should_split);
    assert_eq!(report.boundary_edges, 4);
    assert!(report.dangling.is_empty());

    // The 4 direct neighbors are all reachable via the back-reference
    // traversal.
    for corner in [
        params.grid_index(1, 1),
        params.grid_index(1, 2),
        params.grid_index(2, 1),
        params.grid_index(2, 2),
    ] {
        assert!(
            report.neighborhood.contains(&corner),
            "neighborhood missing corner {corner}"
        );
    }
}

#[test]
fn dangling_edge_is_reported_not_fatal() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();
    let c = params.center_index(0, 0);

    // Remove the entire fan of cell (0, 0): every (center, corner) edge
    // now borders zero triangles.
    for _ in 0..4 {
        state.triangles.remove(0);
    }
    let map = EdgeTriangleMap::build(&state.triangles);

    let report = should_break(&state, &map, c);
    assert!(!report.should_split);
    assert_eq!(report.boundary_edges, 0);
    assert_eq!(report.dangling.len(), 4);
}

// ─── Split Tests ──────────────────────────────────────────────

#[test]
fn empty_split_still_appends_attributes() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();
    let mut map = EdgeTriangleMap::build(&state.triangles);

    let triangles_before = state.triangles.clone();
    let uvs_before = state.shape.uvs.len();

    let outcome = begin_split(&mut state, &mut map, 0, Vec::new());
    assert_eq!(state.triangles, triangles_before);
    assert_eq!(state.shape.uvs.len(), uvs_before + 1);
    assert_eq!(state.shape.colors.len(), uvs_before + 1);
    assert_eq!(state.shape.uvs[uvs_before], state.shape.uvs[0]);
    assert!(outcome.misses.is_empty());

    state.finish_split(outcome.pending);
    assert_eq!(state.vertex_count(), uvs_before + 1);
}

#[test]
fn split_rewrites_one_slot_per_spring() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();
    let mut map = EdgeTriangleMap::build(&state.triangles);

    let c = params.center_index(1, 1);
    let tl = params.grid_index(1, 1);
    let spring = state
        .network
        .springs_of(c)
        .iter()
        .find(|s| s.neighbor == tl)
        .copied()
        .unwrap();

    let twin = state.vertex_count() as u32;
    let outcome = begin_split(&mut state, &mut map, c, vec![spring]);
    assert!(outcome.misses.is_empty());
    assert_eq!(outcome.pending.twin, twin);

    // Exactly one triangle now references the twin, and it lost exactly
    // its center slot.
    let touched: Vec<_> = state
        .triangles
        .iter()
        .filter(|tri| tri.contains(&twin))
        .collect();
    assert_eq!(touched.len(), 1);
    assert!(touched[0].contains(&tl));
    assert!(!touched[0].contains(&c));

    state.finish_split(outcome.pending);
}

#[test]
fn engine_splits_torn_center_vertex() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();
    let c = params.center_index(1, 1);
    tear_around_center(&mut state, &params, 1, 1);

    let vertices_before = state.vertex_count();
    let mut engine = TearEngine::new(&state);
    let (sink, log) = SharedSink::new();
    engine.bus_mut().add_sink(Box::new(sink));

    let splits = engine.process(&mut state, &[c]);
    assert_eq!(splits, 1);

    let twin = vertices_before as u32;
    assert_eq!(state.vertex_count(), vertices_before + 1);
    assert_eq!(state.shape.uvs.len(), vertices_before + 1);

    // Both surviving fan triangles migrated to the twin (the second and
    // fourth rewrites miss, because the first two already moved the
    // edges over).
    let twin_triangles = state
        .triangles
        .iter()
        .filter(|tri| tri.contains(&twin))
        .count();
    assert_eq!(twin_triangles, 2);
    assert!(!state.triangles.iter().any(|tri| tri.contains(&c)));

    // Symmetry holds after the re-home.
    for s in state.network.springs_of(twin) {
        assert!(state.network.has_spring(s.neighbor, twin));
    }

    // Telemetry saw the census and the split.
    let events = log.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, EventKind::BoundaryEdges { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, EventKind::VertexSplit { migrated: 4, .. })));

    // The handoff snapshot is structurally valid.
    drop(events);
    state.update_normals();
    state.sync_shape();
    assert!(state.shape.validate().is_ok());
}

#[test]
fn splitting_twice_keeps_state_consistent() {
    let params = square_params(5);
    let mut state = ClothState::from_params(&params).unwrap();
    tear_around_center(&mut state, &params, 1, 2);
    tear_around_center(&mut state, &params, 1, 1);

    let c1 = params.center_index(1, 1);
    let c2 = params.center_index(1, 2);
    let mut engine = TearEngine::new(&state);

    let splits = engine.process(&mut state, &[c1, c2]);
    assert_eq!(splits, 2);

    state.sync_shape();
    assert!(state.shape.validate().is_ok());
    assert_eq!(state.network.vertex_count(), state.vertex_count());
}

// ─── State Tests ──────────────────────────────────────────────

#[test]
fn sync_shape_copies_working_arrays() {
    let params = square_params(4);
    let mut state = ClothState::from_params(&params).unwrap();

    state.positions[0] += Vec3::new(0.0, 0.0, 0.25);
    assert_ne!(state.shape.positions[0], state.positions[0]);

    state.sync_shape();
    assert_eq!(state.shape.positions[0], state.positions[0]);
}

#[test]
fn flat_grid_normals_point_up() {
    let params = square_params(5);
    let mut state = ClothState::from_params(&params).unwrap();
    state.update_normals();
    for n in &state.normals {
        assert!(n.z > 0.99, "normal {n} not facing +Z");
    }
}

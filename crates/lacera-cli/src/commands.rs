//! CLI command implementations.

use glam::Vec3;
use lacera_cloth::grid::{GridParams, generate as generate_grid};
use lacera_cloth::queue::TearEngine;
use lacera_cloth::state::ClothState;
use lacera_mesh::ClothMesh;
use lacera_telemetry::sinks::TracingSink;
use lacera_telemetry::{EventBus, EventKind, TopologyEvent};

/// Generate a cloth grid and report its topology.
pub fn generate(
    rows: u32,
    cols: u32,
    extent: f32,
    physics: bool,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lacera Grid Generator");
    println!("─────────────────────");

    let params = GridParams {
        rows,
        cols,
        anchor: Vec3::ZERO,
        extent,
    };
    let (mesh, network) = generate_grid(&params, physics)?;
    mesh.validate()?;

    println!("Vertices:   {}", mesh.vertex_count());
    println!("Triangles:  {}", mesh.triangle_count());
    if let Some(net) = &network {
        println!("Springs:    {} (directed)", net.spring_count());
    }

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    bus.emit(TopologyEvent::new(
        0,
        EventKind::GridGenerated {
            vertices: mesh.vertex_count() as u32,
            triangles: mesh.triangle_count() as u32,
            springs: network.as_ref().map_or(0, |n| n.spring_count()) as u32,
        },
    ));
    bus.flush();

    if let Some(path) = output_path {
        let json = serde_json::to_string_pretty(&mesh)?;
        std::fs::write(path, json)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Tear a grid open around one center vertex and run the engine.
pub fn tear(n: u32) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lacera Tear Demo");
    println!("────────────────");

    let params = GridParams {
        rows: n,
        cols: n,
        anchor: Vec3::ZERO,
        extent: 1.0,
    };
    let mut state = ClothState::from_params(&params)?;

    // Carve two opposite fan triangles out of cell (1, 1): each spring
    // edge of that cell's center vertex then borders exactly one
    // triangle, which is the tear condition.
    let (row, col) = (1u32, 1u32);
    let center = params.center_index(row, col);
    let base = (4 * (row * (params.cols - 1) + col)) as usize;
    state.triangles.remove(base + 2);
    state.triangles.remove(base);

    println!("Center vertex: {center}");
    println!("Triangles after carve: {}", state.triangles.len());

    let mut engine = TearEngine::new(&state);
    engine.bus_mut().add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let splits = engine.process(&mut state, &[center]);
    state.update_normals();
    state.sync_shape();
    state.shape.validate()?;

    println!("Splits applied: {splits}");
    println!("Vertices now:   {}", state.vertex_count());

    Ok(())
}

/// Validate a JSON mesh snapshot.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Lacera Validator");
    println!("────────────────");

    let content = std::fs::read_to_string(path)?;
    let mesh: ClothMesh = serde_json::from_str(&content)?;
    match mesh.validate() {
        Ok(()) => println!(
            "Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        ),
        Err(e) => println!("Mesh validation failed: {e}"),
    }

    Ok(())
}

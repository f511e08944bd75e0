//! # lacera-mesh
//!
//! Render-facing triangle mesh container with parallel per-vertex
//! attribute arrays, plus the adjacency queries the tear engine runs
//! against the triangle sequence.
//!
//! ## Key Types
//!
//! - [`ClothMesh`] — The core mesh type. Index-aligned position, normal,
//!   UV, and color arrays plus the winding-significant triangle list.
//! - [`EdgeTriangleMap`] — Edge → triangle multimap answering "how many
//!   triangles share this vertex pair" and "which triangle comes first".
//! - Area-weighted vertex normal recomputation.

pub mod adjacency;
pub mod mesh;
pub mod normals;

pub use adjacency::EdgeTriangleMap;
pub use mesh::ClothMesh;

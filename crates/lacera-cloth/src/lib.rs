//! # lacera-cloth
//!
//! The cloth topology core: grid generation, the mass-spring network,
//! tear detection, and the vertex-split topology mutator.
//!
//! ## Key Types
//!
//! - [`GridParams`] / [`generate`] — fan-triangulated grid + spring network
//! - [`SpringNetwork`] — per-vertex adjacency lists with symmetric springs
//! - [`ClothState`] — the mutable per-step container (positions, springs,
//!   triangles, render shape)
//! - [`TearEngine`] — single-vertex-at-a-time tear detection and splitting
//! - [`PendingSplit`] — typed obligation to finish populating a split twin

pub mod grid;
pub mod queue;
pub mod split;
pub mod spring;
pub mod state;
pub mod tear;

pub use grid::{GridParams, generate};
pub use queue::TearEngine;
pub use split::{PendingSplit, SplitOutcome, begin_split, split_vertex};
pub use spring::{Spring, SpringNetwork, VertexDynamics};
pub use state::ClothState;
pub use tear::{TearReport, should_break};

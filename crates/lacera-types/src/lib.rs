//! # lacera-types
//!
//! Shared types, identifiers, error types, and topology constants
//! for the Lacera tearable-cloth topology engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Lacera crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{LaceraError, LaceraResult};
pub use ids::{TriangleId, VertexId};

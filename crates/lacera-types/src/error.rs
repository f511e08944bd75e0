//! Error types for the Lacera engine.
//!
//! All crates return `LaceraResult<T>` from fallible operations.
//! Steady-state topology mutation is infallible by design: inconsistencies
//! found while tearing are logged and skipped, never propagated.

use thiserror::Error;

/// Unified error type for the Lacera engine.
#[derive(Debug, Error)]
pub enum LaceraError {
    /// A construction-time precondition was violated (e.g. grid dimension ≤ 3).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, LaceraError>`.
pub type LaceraResult<T> = Result<T, LaceraError>;

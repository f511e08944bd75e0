//! # lacera-telemetry
//!
//! Event bus for topology telemetry. The tear engine emits structured
//! events (generation summaries, boundary-edge counts, splits, detected
//! inconsistencies) that can be consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, TopologyEvent};

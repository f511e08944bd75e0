//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (collect for tests, forward to `tracing`, etc.).

use std::sync::{Arc, Mutex};

use crate::events::TopologyEvent;

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &TopologyEvent);

    /// Called when the engine shuts down. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A simple sink that collects events into a `Vec`.
pub struct VecSink {
    /// Collected events.
    pub events: Vec<TopologyEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &TopologyEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink whose collected events stay inspectable after the sink is
/// boxed and handed to a bus. Useful in tests.
pub struct SharedSink {
    events: Arc<Mutex<Vec<TopologyEvent>>>,
}

impl SharedSink {
    /// Creates a shared sink plus a handle to its event log.
    pub fn new() -> (Self, Arc<Mutex<Vec<TopologyEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }
}

impl EventSink for SharedSink {
    fn handle(&mut self, event: &TopologyEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    /// Minimum log level for events.
    _level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { _level: level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &TopologyEvent) {
        tracing::info!(step = event.step, event = ?event.kind, "topology_event");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

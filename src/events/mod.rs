// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod dispatch_events;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use bus::{EventBus, EventLogEntry};

pub use dispatch_events::{CandidatesResolved, DispatchCompleted, DispatchSkipped};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}

// src/lib.rs
// DispatchHub - Handler resolution and dispatch for abstract action requests
//
// Architecture:
// - Domain-centric: value objects and invariants live in domains
// - Event-driven: the dispatch service reports through events
// - Explicit: no implicit behavior, no magic
// - Collaborator seams: component registry and launch host are traits the
//   embedding platform implements

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod host;
pub mod registry;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Types
// ============================================================================

pub use domain::{
    validate_request,
    CandidateHandler,
    ChooserRequest,
    ComponentId,
    DispatchOutcome,
    LaunchKind,
    LaunchRequest,
    PackageId,
    RequestDescriptor,
    ResolutionOutcome,
    ResolutionResult,
    TargetRequest,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CandidatesResolved, DispatchCompleted, DispatchSkipped, DomainEvent,
    EventBus, EventLogEntry,
};

// ============================================================================
// PUBLIC API - Collaborator Seams
// ============================================================================

pub use host::LaunchHost;
pub use registry::{
    ComponentRegistry, FailingComponentRegistry, StaticComponentRegistry,
    SYSTEM_CHOOSER_COMPONENT,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{DispatchConfig, DispatchService};

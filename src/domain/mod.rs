// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod dispatch;
pub mod handler;
pub mod request;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Request Domain
pub use request::{validate_request, RequestDescriptor};

// Handler Domain
pub use handler::{CandidateHandler, ComponentId, PackageId};

// Dispatch Domain
pub use dispatch::{
    ChooserRequest, DispatchOutcome, LaunchKind, LaunchRequest, ResolutionOutcome,
    ResolutionResult, TargetRequest,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

// src/events/dispatch_events.rs
//
// Dispatch Events
//
// These events are the only outputs of the dispatch core besides the launch
// call itself. Observers use them for tracing and diagnostics.
//
// CRITICAL INVARIANTS:
// - All events are deterministic (no timestamps in event payload)
// - All events are immutable
// - All events are serializable
// - Event IDs are derived deterministically from fingerprints
// - occurred_at() returns SENTINEL_TIMESTAMP (Unix epoch) for trait compliance

use crate::events::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel timestamp for dispatch events (Unix epoch).
/// Dispatch events are deterministic and do not carry operational timestamps.
/// This constant satisfies the DomainEvent trait while maintaining determinism.
const SENTINEL_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

// ============================================================================
// CANDIDATES RESOLVED EVENT
// ============================================================================

/// Emitted after a resolution pass over the registry's candidate list.
///
/// DETERMINISM: No timestamp in payload. Identical pass produces identical
/// event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidatesResolved {
    /// The action of the request being resolved
    pub action: String,

    /// Raw candidate count returned by the registry (ignored entries included)
    pub total_candidates: usize,

    /// Targets surviving filtering, short-circuiting and deduplication
    pub eligible_targets: usize,

    /// Whether a short-circuit collapsed the pass to a single target
    pub collapsed: bool,

    /// Deterministic fingerprint for idempotency
    pub fingerprint: String,
}

impl CandidatesResolved {
    pub fn new(
        action: impl Into<String>,
        total_candidates: usize,
        eligible_targets: usize,
        collapsed: bool,
    ) -> Self {
        let action = action.into();
        let fingerprint =
            Self::compute_fingerprint(&action, total_candidates, eligible_targets, collapsed);

        Self {
            action,
            total_candidates,
            eligible_targets,
            collapsed,
            fingerprint,
        }
    }

    /// Compute deterministic fingerprint for idempotency.
    ///
    /// DETERMINISM COMPONENTS:
    /// - action
    /// - total_candidates
    /// - eligible_targets
    /// - collapsed flag
    fn compute_fingerprint(
        action: &str,
        total_candidates: usize,
        eligible_targets: usize,
        collapsed: bool,
    ) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        action.hash(&mut hasher);
        total_candidates.hash(&mut hasher);
        eligible_targets.hash(&mut hasher);
        collapsed.hash(&mut hasher);
        format!("resolve:{:016x}", hasher.finish())
    }
}

impl DomainEvent for CandidatesResolved {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "CandidatesResolved"
    }
}

// ============================================================================
// DISPATCH COMPLETED EVENT
// ============================================================================

/// Emitted when dispatch issues its single launch call.
///
/// DETERMINISM: No timestamp in payload. Identical dispatch produces
/// identical event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchCompleted {
    /// The action of the dispatched request
    pub action: String,

    /// Which decision branch was taken (default, single_candidate, chooser)
    pub launch_kind: String,

    /// Number of targets the branch operated on
    pub target_count: usize,

    /// Deterministic fingerprint for idempotency
    pub fingerprint: String,
}

impl DispatchCompleted {
    pub fn new(action: impl Into<String>, launch_kind: impl Into<String>, target_count: usize) -> Self {
        let action = action.into();
        let launch_kind = launch_kind.into();
        let fingerprint = Self::compute_fingerprint(&action, &launch_kind, target_count);

        Self {
            action,
            launch_kind,
            target_count,
            fingerprint,
        }
    }

    /// Compute deterministic fingerprint for idempotency.
    ///
    /// DETERMINISM COMPONENTS:
    /// - action
    /// - launch_kind
    /// - target_count
    fn compute_fingerprint(action: &str, launch_kind: &str, target_count: usize) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        action.hash(&mut hasher);
        launch_kind.hash(&mut hasher);
        target_count.hash(&mut hasher);
        format!("dispatch:{:016x}", hasher.finish())
    }
}

impl DomainEvent for DispatchCompleted {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "DispatchCompleted"
    }
}

// ============================================================================
// DISPATCH SKIPPED EVENT
// ============================================================================

/// Emitted when dispatch is invoked without a usable launch host and becomes
/// a defensive no-op.
///
/// DETERMINISM: No timestamp in payload. Identical skip produces identical
/// event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchSkipped {
    /// The action of the request that was not dispatched
    pub action: String,

    /// Why dispatch was skipped
    pub reason: String,

    /// Deterministic fingerprint for idempotency
    pub fingerprint: String,
}

impl DispatchSkipped {
    pub fn new(action: impl Into<String>, reason: impl Into<String>) -> Self {
        let action = action.into();
        let reason = reason.into();
        let fingerprint = Self::compute_fingerprint(&action, &reason);

        Self {
            action,
            reason,
            fingerprint,
        }
    }

    /// Compute deterministic fingerprint for idempotency.
    ///
    /// DETERMINISM COMPONENTS:
    /// - action
    /// - reason
    fn compute_fingerprint(action: &str, reason: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        action.hash(&mut hasher);
        reason.hash(&mut hasher);
        format!("skip:{:016x}", hasher.finish())
    }
}

impl DomainEvent for DispatchSkipped {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "DispatchSkipped"
    }
}

// ============================================================================
// TESTS
// ============================================================================

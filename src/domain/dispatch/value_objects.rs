// src/domain/dispatch/value_objects.rs
//
// Dispatch Value Objects
//
// Pure, immutable data structures representing resolution and dispatch
// outcomes. These are the bridge between the registry's raw candidate list
// and the launch host.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects
// - No I/O operations
// - Deterministic construction
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

use crate::domain::handler::PackageId;
use crate::domain::request::RequestDescriptor;

// ============================================================================
// TARGET REQUEST
// ============================================================================

/// A request descriptor bound to a specific package, produced per accepted
/// candidate during a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRequest {
    /// The original request descriptor (cloned, never the caller's instance)
    pub request: RequestDescriptor,

    /// The package constraint limiting which component may handle it
    pub package: PackageId,
}

impl TargetRequest {
    pub fn new(request: RequestDescriptor, package: PackageId) -> Self {
        Self { request, package }
    }
}

impl std::fmt::Display for TargetRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.request, self.package)
    }
}

// ============================================================================
// RESOLUTION OUTCOME (FOLD RESULT)
// ============================================================================

/// The outcome of folding the registry's candidate list.
///
/// `Collapsed` means a short-circuit fired (two-candidate rule or preferred
/// flag) and the single target is the whole answer; `Accumulated` carries the
/// ordered, package-deduplicated list for the chooser path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// A short-circuit fired; this target is the sole entry
    Collapsed(TargetRequest),

    /// No short-circuit; all accepted targets in registry order
    Accumulated(Vec<TargetRequest>),
}

impl ResolutionOutcome {
    /// Returns true if a short-circuit fired
    pub fn is_collapsed(&self) -> bool {
        matches!(self, ResolutionOutcome::Collapsed(_))
    }

    /// Convert the outcome into the final ordered target list
    pub fn into_targets(self) -> Vec<TargetRequest> {
        match self {
            ResolutionOutcome::Collapsed(target) => vec![target],
            ResolutionOutcome::Accumulated(targets) => targets,
        }
    }
}

// ============================================================================
// RESOLUTION RESULT
// ============================================================================

/// The immutable result of one resolution pass.
///
/// Every pass builds a fresh value; nothing accumulates across passes.
/// Callers needing caching hold on to the value explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    targets: Vec<TargetRequest>,
}

impl ResolutionResult {
    /// Build a result from a fold outcome
    pub fn from_outcome(outcome: ResolutionOutcome) -> Self {
        Self {
            targets: outcome.into_targets(),
        }
    }

    /// The ordered target list; entry 0 is the chooser's primary entry
    pub fn targets(&self) -> &[TargetRequest] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

// ============================================================================
// CHOOSER REQUEST
// ============================================================================

/// A disambiguation presentation listing multiple eligible candidates.
///
/// The primary entry is always target-list entry 0; the alternatives preserve
/// the order produced by the resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserRequest {
    /// The entry highlighted as the chooser's primary subject
    pub primary: TargetRequest,

    /// Title shown on the disambiguation prompt
    pub title: String,

    /// Remaining candidates, in resolution order
    pub alternatives: Vec<TargetRequest>,
}

impl ChooserRequest {
    pub fn new(primary: TargetRequest, title: String, alternatives: Vec<TargetRequest>) -> Self {
        Self {
            primary,
            title,
            alternatives,
        }
    }

    /// Total number of candidates the chooser presents
    pub fn candidate_count(&self) -> usize {
        1 + self.alternatives.len()
    }
}

// ============================================================================
// LAUNCH REQUEST
// ============================================================================

/// What the launch host receives: a plain request, a package-bound request,
/// or a chooser-flavored request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchRequest {
    /// The original descriptor, untouched (default-handler path)
    Direct(RequestDescriptor),

    /// A single package-bound request (sole eligible candidate)
    Target(TargetRequest),

    /// A disambiguation chooser wrapping the candidate list
    Chooser(ChooserRequest),
}

impl LaunchRequest {
    /// The underlying request descriptor, whichever shape the launch takes
    pub fn descriptor(&self) -> &RequestDescriptor {
        match self {
            LaunchRequest::Direct(request) => request,
            LaunchRequest::Target(target) => &target.request,
            LaunchRequest::Chooser(chooser) => &chooser.primary.request,
        }
    }

    pub fn is_chooser(&self) -> bool {
        matches!(self, LaunchRequest::Chooser(_))
    }
}

// ============================================================================
// DISPATCH OUTCOME
// ============================================================================

/// Which decision branch a dispatch call took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchKind {
    /// The platform's established default handler took the request
    Default,

    /// Exactly one eligible candidate remained after filtering
    SingleCandidate,

    /// Multiple eligible candidates; a chooser was presented
    Chooser,
}

impl std::fmt::Display for LaunchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchKind::Default => write!(f, "default"),
            LaunchKind::SingleCandidate => write!(f, "single_candidate"),
            LaunchKind::Chooser => write!(f, "chooser"),
        }
    }
}

/// What a dispatch call reports back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// No launch host was supplied; nothing was queried or launched
    Skipped,

    /// Exactly one launch call was issued to the host
    Launched(LaunchKind),
}

impl DispatchOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, DispatchOutcome::Skipped)
    }

    /// The branch taken, if a launch happened
    pub fn launch_kind(&self) -> Option<LaunchKind> {
        match self {
            DispatchOutcome::Skipped => None,
            DispatchOutcome::Launched(kind) => Some(*kind),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::handler::PackageId;

    fn target(action: &str, package: &str) -> TargetRequest {
        TargetRequest::new(RequestDescriptor::new(action), PackageId::new(package))
    }

    #[test]
    fn test_collapsed_outcome_yields_single_target() {
        let outcome = ResolutionOutcome::Collapsed(target("view", "app.gallery"));
        assert!(outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].package, PackageId::new("app.gallery"));
    }

    #[test]
    fn test_accumulated_outcome_preserves_order() {
        let outcome = ResolutionOutcome::Accumulated(vec![
            target("view", "app.one"),
            target("view", "app.two"),
            target("view", "app.three"),
        ]);
        assert!(!outcome.is_collapsed());

        let result = ResolutionResult::from_outcome(outcome);
        assert_eq!(result.len(), 3);
        assert_eq!(result.targets()[0].package, PackageId::new("app.one"));
        assert_eq!(result.targets()[2].package, PackageId::new("app.three"));
    }

    #[test]
    fn test_launch_request_descriptor_accessor() {
        let request = RequestDescriptor::new("share").with_data("content://photos/7");

        let direct = LaunchRequest::Direct(request.clone());
        assert_eq!(direct.descriptor().action, "share");
        assert!(!direct.is_chooser());

        let chooser = LaunchRequest::Chooser(ChooserRequest::new(
            TargetRequest::new(request, PackageId::new("app.one")),
            "Share with".to_string(),
            vec![],
        ));
        assert!(chooser.is_chooser());
        assert_eq!(chooser.descriptor().action, "share");
    }

    #[test]
    fn test_chooser_candidate_count() {
        let chooser = ChooserRequest::new(
            target("view", "app.one"),
            String::new(),
            vec![target("view", "app.two"), target("view", "app.three")],
        );
        assert_eq!(chooser.candidate_count(), 3);
    }

    #[test]
    fn test_dispatch_outcome_accessors() {
        let skipped = DispatchOutcome::Skipped;
        assert!(skipped.is_skipped());
        assert_eq!(skipped.launch_kind(), None);

        let launched = DispatchOutcome::Launched(LaunchKind::Chooser);
        assert!(!launched.is_skipped());
        assert_eq!(launched.launch_kind(), Some(LaunchKind::Chooser));
    }

    #[test]
    fn test_launch_kind_display() {
        assert_eq!(LaunchKind::Default.to_string(), "default");
        assert_eq!(LaunchKind::SingleCandidate.to_string(), "single_candidate");
        assert_eq!(LaunchKind::Chooser.to_string(), "chooser");
    }
}

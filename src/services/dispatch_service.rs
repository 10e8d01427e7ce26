// src/services/dispatch_service.rs
//
// Dispatch Service
//
// Resolves which registered handler component(s) should service an action
// request, and instructs the launch host accordingly: the platform's
// established default handler, the single remaining eligible handler, or a
// chooser wrapping the ordered candidate list.
//
// CRITICAL RULES:
// - Consumes the registry read-only; never registers or mutates handlers
// - The ignore-set is fixed for the service's lifetime
// - Each resolution pass builds a fresh ResolutionResult; nothing accumulates
// - At most one launch call per dispatch invocation, never retried
// - Registry failures propagate unchanged
// - Deterministic: same registry state → same decision

use std::sync::Arc;

use crate::domain::dispatch::{
    ChooserRequest, DispatchOutcome, LaunchKind, LaunchRequest, ResolutionOutcome,
    ResolutionResult, TargetRequest,
};
use crate::domain::handler::{CandidateHandler, ComponentId, PackageId};
use crate::domain::request::{validate_request, RequestDescriptor};
use crate::error::{AppError, AppResult};
use crate::events::{CandidatesResolved, DispatchCompleted, DispatchSkipped, EventBus};
use crate::host::LaunchHost;
use crate::registry::{ComponentRegistry, SYSTEM_CHOOSER_COMPONENT};

// ============================================================================
// DISPATCH CONFIG
// ============================================================================

/// Construction-time configuration for a DispatchService.
///
/// Both fields are optional with empty defaults; there are no null-tolerant
/// constructor overloads.
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// Component identities excluded from consideration, both as candidates
    /// and as defaults
    pub ignored: Vec<ComponentId>,

    /// Title shown when a chooser is presented
    pub chooser_title: String,
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a component from consideration
    pub fn ignore(mut self, component: impl Into<ComponentId>) -> Self {
        self.ignored.push(component.into());
        self
    }

    /// Exclude several components at once
    pub fn ignore_all(mut self, components: impl IntoIterator<Item = ComponentId>) -> Self {
        self.ignored.extend(components);
        self
    }

    /// Set the chooser title
    pub fn with_chooser_title(mut self, title: impl Into<String>) -> Self {
        self.chooser_title = title.into();
        self
    }

    /// The one ignore predicate shared by candidate filtering and the
    /// default-handler check.
    pub fn is_ignored(&self, component: &ComponentId) -> bool {
        self.ignored.iter().any(|ignored| ignored == component)
    }
}

// ============================================================================
// DISPATCH SERVICE
// ============================================================================

/// Resolves and dispatches one action request.
///
/// Constructed once per dispatch intent. Resolution is lazy: the registry is
/// first queried when dispatch runs, and the result is cached until
/// `refresh_resolution` discards it.
pub struct DispatchService {
    registry: Arc<dyn ComponentRegistry>,
    request: RequestDescriptor,
    config: DispatchConfig,
    event_bus: Arc<EventBus>,
    resolution: Option<ResolutionResult>,
}

impl DispatchService {
    /// Create a service for the given request.
    ///
    /// The request is validated once; no registry query happens here.
    pub fn new(
        registry: Arc<dyn ComponentRegistry>,
        request: RequestDescriptor,
        config: DispatchConfig,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        validate_request(&request)?;

        Ok(Self {
            registry,
            request,
            config,
            event_bus,
            resolution: None,
        })
    }

    /// Resolve (if not yet resolved) and launch.
    ///
    /// With no launch host this is a defensive no-op: nothing is queried,
    /// nothing is launched, no error is raised. Otherwise exactly one launch
    /// call is issued:
    /// - the original descriptor when the platform has a usable default,
    /// - the single package-bound target when one eligible candidate remains,
    /// - a chooser wrapping the ordered target list otherwise.
    ///
    /// An empty target list (every candidate ignored or none registered)
    /// fails with `AppError::NoEligibleHandlers`.
    pub fn dispatch(&mut self, host: Option<&dyn LaunchHost>) -> AppResult<DispatchOutcome> {
        let host = match host {
            Some(host) => host,
            None => {
                log::warn!(
                    "dispatch of '{}' skipped: no launch host",
                    self.request.action
                );
                self.event_bus.emit(DispatchSkipped::new(
                    self.request.action.clone(),
                    "missing launch host",
                ));
                return Ok(DispatchOutcome::Skipped);
            }
        };

        if self.resolution.is_none() {
            let fresh = self.resolve_candidates()?;
            self.resolution = Some(fresh);
        }
        let targets: Vec<TargetRequest> = self
            .resolution
            .as_ref()
            .map(|resolution| resolution.targets().to_vec())
            .unwrap_or_default();
        let target_count = targets.len();

        if self.has_default_handler()? {
            host.launch(&LaunchRequest::Direct(self.request.clone()))?;
            return self.completed(LaunchKind::Default, target_count);
        }

        let mut remaining = targets.into_iter();
        let primary = match remaining.next() {
            Some(primary) => primary,
            None => {
                log::warn!(
                    "no eligible handlers remain for '{}'",
                    self.request.action
                );
                return Err(AppError::NoEligibleHandlers);
            }
        };

        match remaining.next() {
            None => {
                host.launch(&LaunchRequest::Target(primary))?;
                self.completed(LaunchKind::SingleCandidate, target_count)
            }
            Some(second) => {
                let mut alternatives = vec![second];
                alternatives.extend(remaining);

                let chooser = ChooserRequest::new(
                    primary,
                    self.config.chooser_title.clone(),
                    alternatives,
                );
                host.launch(&LaunchRequest::Chooser(chooser))?;
                self.completed(LaunchKind::Chooser, target_count)
            }
        }
    }

    /// Discard the cached resolution so the next dispatch re-queries the
    /// registry and rebuilds the target list from scratch.
    pub fn refresh_resolution(&mut self) {
        self.resolution = None;
    }

    // ========================================================================
    // INTERNAL RESOLUTION LOGIC
    // ========================================================================

    /// One resolution pass: query all candidates and fold them into a fresh
    /// result. Emits `CandidatesResolved` with the pass statistics.
    pub(crate) fn resolve_candidates(&self) -> AppResult<ResolutionResult> {
        let candidates = self.registry.candidates_for(&self.request)?;
        let total_candidates = candidates.len();

        let outcome = fold_candidates(&self.request, &candidates, |component| {
            self.config.is_ignored(component)
        });
        let collapsed = outcome.is_collapsed();
        let result = ResolutionResult::from_outcome(outcome);

        log::debug!(
            "resolved '{}': {} candidates, {} eligible targets",
            self.request.action,
            total_candidates,
            result.len()
        );
        self.event_bus.emit(CandidatesResolved::new(
            self.request.action.clone(),
            total_candidates,
            result.len(),
            collapsed,
        ));

        Ok(result)
    }

    /// Default-only matching against the registry.
    ///
    /// Reports false when the registry offers nothing, when the best match is
    /// the platform's own disambiguation component, or when the best match is
    /// ignored. True means dispatch hands the original descriptor straight to
    /// the host.
    pub(crate) fn has_default_handler(&self) -> AppResult<bool> {
        let preferred = self.registry.preferred_candidate(&self.request)?;

        Ok(match preferred {
            Some(candidate) => {
                candidate.component.as_str() != SYSTEM_CHOOSER_COMPONENT
                    && !self.config.is_ignored(&candidate.component)
            }
            None => false,
        })
    }

    fn completed(&self, kind: LaunchKind, target_count: usize) -> AppResult<DispatchOutcome> {
        log::debug!(
            "dispatched '{}' via {} branch",
            self.request.action,
            kind
        );
        self.event_bus.emit(DispatchCompleted::new(
            self.request.action.clone(),
            kind.to_string(),
            target_count,
        ));
        Ok(DispatchOutcome::Launched(kind))
    }
}

// ============================================================================
// CANDIDATE FOLD (DETERMINISTIC, ORDERED)
// ============================================================================

/// Fold the registry's candidate list into a resolution outcome.
///
/// Candidates are visited in registry order:
/// 1. An ignored candidate is skipped entirely; it cannot trigger a
///    short-circuit.
/// 2. If the registry returned exactly two candidates in total (ignored ones
///    included), or the candidate carries the preferred flag, the fold
///    collapses to that candidate's package-bound target; later candidates
///    are never examined.
/// 3. Otherwise the candidate's target is appended, unless its package
///    already contributed one this pass (first occurrence wins).
pub(crate) fn fold_candidates<F>(
    request: &RequestDescriptor,
    candidates: &[CandidateHandler],
    is_ignored: F,
) -> ResolutionOutcome
where
    F: Fn(&ComponentId) -> bool,
{
    let total_candidates = candidates.len();
    let mut accumulated: Vec<TargetRequest> = Vec::new();
    let mut seen_packages: Vec<PackageId> = Vec::new();

    for candidate in candidates {
        if is_ignored(&candidate.component) {
            continue;
        }

        if total_candidates == 2 || candidate.is_preferred {
            return ResolutionOutcome::Collapsed(TargetRequest::new(
                request.clone(),
                candidate.package.clone(),
            ));
        }

        if seen_packages.contains(&candidate.package) {
            continue;
        }
        seen_packages.push(candidate.package.clone());
        accumulated.push(TargetRequest::new(request.clone(), candidate.package.clone()));
    }

    ResolutionOutcome::Accumulated(accumulated)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn view_request() -> RequestDescriptor {
        RequestDescriptor::new("view")
    }

    fn candidate(component: &str, package: &str) -> CandidateHandler {
        CandidateHandler::new(component, package)
    }

    fn never_ignored(_component: &ComponentId) -> bool {
        false
    }

    #[test]
    fn test_fold_accumulates_in_registry_order() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.b.Viewer", "app.b"),
            candidate("app.c.Viewer", "app.c"),
        ];

        let outcome = fold_candidates(&view_request(), &candidates, never_ignored);
        assert!(!outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].package, PackageId::new("app.a"));
        assert_eq!(targets[1].package, PackageId::new("app.b"));
        assert_eq!(targets[2].package, PackageId::new("app.c"));
    }

    #[test]
    fn test_fold_skips_ignored_candidates() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.b.Viewer", "app.b"),
            candidate("app.c.Viewer", "app.c"),
        ];
        let ignored = ComponentId::new("app.b.Viewer");

        let outcome = fold_candidates(&view_request(), &candidates, |c| *c == ignored);
        let targets = outcome.into_targets();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].package, PackageId::new("app.a"));
        assert_eq!(targets[1].package, PackageId::new("app.c"));
    }

    #[test]
    fn test_fold_collapses_on_two_candidates() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.b.Viewer", "app.b"),
        ];

        let outcome = fold_candidates(&view_request(), &candidates, never_ignored);
        assert!(outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].package, PackageId::new("app.a"));
    }

    #[test]
    fn test_fold_two_candidates_one_ignored_collapses_on_survivor() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.b.Viewer", "app.b"),
        ];
        let ignored = ComponentId::new("app.a.Viewer");

        let outcome = fold_candidates(&view_request(), &candidates, |c| *c == ignored);
        assert!(outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].package, PackageId::new("app.b"));
    }

    #[test]
    fn test_fold_collapses_on_preferred_flag() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.b.Viewer", "app.b"),
            CandidateHandler::preferred("app.c.Viewer", "app.c"),
            candidate("app.d.Viewer", "app.d"),
        ];

        let outcome = fold_candidates(&view_request(), &candidates, never_ignored);
        assert!(outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].package, PackageId::new("app.c"));
    }

    #[test]
    fn test_fold_ignored_preferred_candidate_cannot_collapse() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            CandidateHandler::preferred("app.b.Viewer", "app.b"),
            candidate("app.c.Viewer", "app.c"),
        ];
        let ignored = ComponentId::new("app.b.Viewer");

        let outcome = fold_candidates(&view_request(), &candidates, |c| *c == ignored);
        assert!(!outcome.is_collapsed());

        let targets = outcome.into_targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].package, PackageId::new("app.a"));
        assert_eq!(targets[1].package, PackageId::new("app.c"));
    }

    #[test]
    fn test_fold_deduplicates_packages_keeping_first() {
        let candidates = vec![
            candidate("app.a.Viewer", "app.a"),
            candidate("app.a.Editor", "app.a"),
            candidate("app.b.Viewer", "app.b"),
        ];

        let outcome = fold_candidates(&view_request(), &candidates, never_ignored);
        let targets = outcome.into_targets();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].package, PackageId::new("app.a"));
        assert_eq!(targets[1].package, PackageId::new("app.b"));
    }

    #[test]
    fn test_fold_everything_ignored_yields_empty() {
        let candidates = vec![candidate("app.a.Viewer", "app.a")];

        let outcome = fold_candidates(&view_request(), &candidates, |_| true);
        assert!(!outcome.is_collapsed());
        assert!(outcome.into_targets().is_empty());
    }

    #[test]
    fn test_fold_empty_candidate_list_yields_empty() {
        let outcome = fold_candidates(&view_request(), &[], never_ignored);
        assert!(outcome.into_targets().is_empty());
    }

    #[test]
    fn test_config_ignore_predicate() {
        let config = DispatchConfig::new()
            .ignore("app.a.Viewer")
            .ignore_all(vec![ComponentId::new("app.b.Viewer")]);

        assert!(config.is_ignored(&ComponentId::new("app.a.Viewer")));
        assert!(config.is_ignored(&ComponentId::new("app.b.Viewer")));
        assert!(!config.is_ignored(&ComponentId::new("app.c.Viewer")));
    }

    #[test]
    fn test_config_defaults_are_empty() {
        let config = DispatchConfig::default();
        assert!(config.ignored.is_empty());
        assert!(config.chooser_title.is_empty());
    }
}

// src/registry/component_registry.rs
//
// Component registry - candidate enumeration seam

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::handler::{CandidateHandler, ComponentId, PackageId};
use crate::domain::request::RequestDescriptor;
use crate::error::{AppError, AppResult};

/// Well-known identity of the platform's own disambiguation prompt.
///
/// When default-only matching resolves to this component, the platform has no
/// real default for the request and would show its own chooser instead.
pub const SYSTEM_CHOOSER_COMPONENT: &str = "system.internal.ChooserHost";

/// Enumerates candidate handlers for a request.
///
/// Implementations wrap the operating system's component registry. Queries
/// are fast local lookups; a failed query is the registry's error to signal
/// and the core propagates it unchanged.
pub trait ComponentRegistry: Send + Sync {
    /// All components willing to handle the request, in registry order.
    /// No default-only filtering; every match is included.
    fn candidates_for(&self, request: &RequestDescriptor) -> AppResult<Vec<CandidateHandler>>;

    /// The single best-match handler under default-only matching semantics,
    /// or None when the platform has nothing to offer.
    fn preferred_candidate(
        &self,
        request: &RequestDescriptor,
    ) -> AppResult<Option<CandidateHandler>>;
}

/// In-memory registry keyed by action name.
///
/// Used by tests and by embedders that assemble their own handler tables
/// instead of querying a platform registry.
pub struct StaticComponentRegistry {
    handlers: RwLock<HashMap<String, Vec<CandidateHandler>>>,
}

impl StaticComponentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a candidate for an action. Registration order is the order
    /// candidates are returned in.
    pub fn register(&self, action: impl Into<String>, candidate: CandidateHandler) {
        let mut handlers = self.handlers.write().unwrap();
        handlers.entry(action.into()).or_default().push(candidate);
    }

    /// Remove every candidate registered for an action
    pub fn unregister_action(&self, action: &str) {
        let mut handlers = self.handlers.write().unwrap();
        handlers.remove(action);
    }

    fn candidates(&self, action: &str) -> Vec<CandidateHandler> {
        let handlers = self.handlers.read().unwrap();
        handlers.get(action).cloned().unwrap_or_default()
    }
}

impl Default for StaticComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry for StaticComponentRegistry {
    fn candidates_for(&self, request: &RequestDescriptor) -> AppResult<Vec<CandidateHandler>> {
        Ok(self.candidates(&request.action))
    }

    /// Default-only matching, mirroring the platform behavior:
    /// a candidate flagged preferred wins; a sole registered candidate is the
    /// trivial best match; multiple candidates with no preference resolve to
    /// the platform's own chooser component.
    fn preferred_candidate(
        &self,
        request: &RequestDescriptor,
    ) -> AppResult<Option<CandidateHandler>> {
        let candidates = self.candidates(&request.action);

        if let Some(preferred) = candidates.iter().find(|c| c.is_preferred) {
            return Ok(Some(preferred.clone()));
        }

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(Some(candidates[0].clone())),
            _ => Ok(Some(CandidateHandler::new(
                ComponentId::new(SYSTEM_CHOOSER_COMPONENT),
                PackageId::new("system"),
            ))),
        }
    }
}

/// Registry stub whose queries always fail.
/// Exists so error-propagation paths can be exercised without a platform.
pub struct FailingComponentRegistry {
    message: String,
}

impl FailingComponentRegistry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ComponentRegistry for FailingComponentRegistry {
    fn candidates_for(&self, _request: &RequestDescriptor) -> AppResult<Vec<CandidateHandler>> {
        Err(AppError::Registry(self.message.clone()))
    }

    fn preferred_candidate(
        &self,
        _request: &RequestDescriptor,
    ) -> AppResult<Option<CandidateHandler>> {
        Err(AppError::Registry(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_request() -> RequestDescriptor {
        RequestDescriptor::new("view")
    }

    #[test]
    fn test_candidates_returned_in_registration_order() {
        let registry = StaticComponentRegistry::new();
        registry.register("view", CandidateHandler::new("app.one.Viewer", "app.one"));
        registry.register("view", CandidateHandler::new("app.two.Viewer", "app.two"));

        let candidates = registry.candidates_for(&view_request()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].component.as_str(), "app.one.Viewer");
        assert_eq!(candidates[1].component.as_str(), "app.two.Viewer");
    }

    #[test]
    fn test_unknown_action_yields_empty_list() {
        let registry = StaticComponentRegistry::new();
        let candidates = registry.candidates_for(&view_request()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_preferred_candidate_wins_default_matching() {
        let registry = StaticComponentRegistry::new();
        registry.register("view", CandidateHandler::new("app.one.Viewer", "app.one"));
        registry.register(
            "view",
            CandidateHandler::preferred("app.two.Viewer", "app.two"),
        );

        let preferred = registry.preferred_candidate(&view_request()).unwrap();
        assert_eq!(
            preferred.map(|c| c.component),
            Some(ComponentId::new("app.two.Viewer"))
        );
    }

    #[test]
    fn test_sole_candidate_is_trivial_best_match() {
        let registry = StaticComponentRegistry::new();
        registry.register("view", CandidateHandler::new("app.one.Viewer", "app.one"));

        let preferred = registry.preferred_candidate(&view_request()).unwrap();
        assert_eq!(
            preferred.map(|c| c.component),
            Some(ComponentId::new("app.one.Viewer"))
        );
    }

    #[test]
    fn test_ambiguous_match_resolves_to_system_chooser() {
        let registry = StaticComponentRegistry::new();
        registry.register("view", CandidateHandler::new("app.one.Viewer", "app.one"));
        registry.register("view", CandidateHandler::new("app.two.Viewer", "app.two"));

        let preferred = registry.preferred_candidate(&view_request()).unwrap();
        assert_eq!(
            preferred.map(|c| c.component),
            Some(ComponentId::new(SYSTEM_CHOOSER_COMPONENT))
        );
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let registry = StaticComponentRegistry::new();
        let preferred = registry.preferred_candidate(&view_request()).unwrap();
        assert!(preferred.is_none());
    }

    #[test]
    fn test_unregister_action_clears_candidates() {
        let registry = StaticComponentRegistry::new();
        registry.register("view", CandidateHandler::new("app.one.Viewer", "app.one"));
        registry.unregister_action("view");

        assert!(registry.candidates_for(&view_request()).unwrap().is_empty());
    }

    #[test]
    fn test_failing_registry_propagates_error() {
        let registry = FailingComponentRegistry::new("registry unavailable");
        let result = registry.candidates_for(&view_request());

        assert!(matches!(result, Err(AppError::Registry(_))));
    }
}

use serde::{Deserialize, Serialize};

/// Stable, comparable identity of a handler component
/// (fully-qualified component name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identity of the package that owns a handler component
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PackageId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Registry record for one component willing to handle a request.
/// Read-only; produced fresh on each resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateHandler {
    /// Identity of the handler component
    pub component: ComponentId,

    /// Package that owns the component
    pub package: PackageId,

    /// Whether the platform has established this handler as the current
    /// default for requests of this kind
    pub is_preferred: bool,
}

impl CandidateHandler {
    /// Create a non-preferred candidate
    pub fn new(component: impl Into<ComponentId>, package: impl Into<PackageId>) -> Self {
        Self {
            component: component.into(),
            package: package.into(),
            is_preferred: false,
        }
    }

    /// Create a candidate flagged as the current default
    pub fn preferred(component: impl Into<ComponentId>, package: impl Into<PackageId>) -> Self {
        Self {
            component: component.into(),
            package: package.into(),
            is_preferred: true,
        }
    }
}

impl std::fmt::Display for CandidateHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.component, self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_equality() {
        let a = ComponentId::new("app.mail.ComposeActivity");
        let b = ComponentId::from("app.mail.ComposeActivity");
        let c = ComponentId::new("app.mail.InboxActivity");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_candidate_constructors() {
        let plain = CandidateHandler::new("app.gallery.Viewer", "app.gallery");
        assert!(!plain.is_preferred);

        let preferred = CandidateHandler::preferred("app.gallery.Viewer", "app.gallery");
        assert!(preferred.is_preferred);
        assert_eq!(plain.component, preferred.component);
    }
}

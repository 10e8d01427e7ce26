use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Abstract description of an action to perform, independent of which
/// component performs it.
///
/// Descriptors are opaque to the resolution algorithm: it only ever clones
/// them to bind a package constraint, never mutates the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// The abstract action name (e.g. "view", "share", "edit")
    pub action: String,

    /// Optional reference to the data the action operates on (URI-like)
    pub data: Option<String>,

    /// Categories refining which handlers qualify
    pub categories: Vec<String>,

    /// Free-form extras attached by the caller
    /// BTreeMap keeps iteration order deterministic
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl RequestDescriptor {
    /// Create a descriptor for the given action
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: None,
            categories: Vec::new(),
            extras: BTreeMap::new(),
        }
    }

    /// Attach a data reference
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Append a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Attach an extra value under the given key
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }
}

impl std::fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} -> {}", self.action, data),
            None => write!(f, "{}", self.action),
        }
    }
}

//! Qualified type names
//!
//! Every declared type, interface or class, is identified by its fully
//! qualified name. Binding tables and exemption sets are keyed by these
//! names so that they stay serializable and diffable.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value Object: fully qualified type name
///
/// ## Example
///
/// ```rust
/// use locator_domain::value_objects::QualifiedName;
///
/// let name = QualifiedName::new("Agent.Listener.IMessageListener");
/// assert_eq!(name.short_name(), "IMessageListener");
/// assert_eq!(name.namespace(), Some("Agent.Listener"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Create a qualified name from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dot-separated segment (the simple type name)
    pub fn short_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, name)| name)
    }

    /// Everything before the last segment, if the name is namespaced
    pub fn namespace(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(ns, _)| ns)
    }

    /// Whether the name lives under the given namespace prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Whether the name contains the given marker anywhere
    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for QualifiedName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QualifiedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

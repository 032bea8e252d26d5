//! Violation Trait
//!
//! Generic trait for binding violations. Reporters work against this trait so
//! that every violation kind renders the same way.

use std::fmt::Display;

use locator_domain::{QualifiedName, Slot};
use serde::Serialize;

// Re-export Severity from parent module for convenience
pub use super::Severity;

/// Category of violation for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationCategory {
    /// Interface not registered with the locator at all
    Registration,
    /// Descriptor slot bound to an unusable type
    Binding,
}

impl Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration => write!(f, "Registration"),
            Self::Binding => write!(f, "Binding"),
        }
    }
}

/// Generic violation trait - all violations implement this
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "LOC001")
    fn id(&self) -> &str;

    /// Category for grouping in reports
    fn category(&self) -> ViolationCategory;

    /// Severity level
    fn severity(&self) -> Severity;

    /// Offending interface (if applicable)
    fn interface(&self) -> Option<&QualifiedName>;

    /// Offending descriptor slot (if applicable)
    fn slot(&self) -> Option<Slot>;

    /// Human-readable message describing the violation
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the violation (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }
}

//! Exemption Sets
//!
//! Caller-supplied allowlist of interfaces that are intentionally
//! locator-free, such as credential providers picked by external
//! configuration. Keyed by qualified name so the list stays serializable.

use std::collections::BTreeSet;

use locator_domain::QualifiedName;
use serde::{Deserialize, Serialize};

/// Interfaces excluded from one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExemptionSet(BTreeSet<QualifiedName>);

impl ExemptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface; returns `false` if it was already exempt
    pub fn insert(&mut self, interface: impl Into<QualifiedName>) -> bool {
        self.0.insert(interface.into())
    }

    pub fn with(mut self, interface: impl Into<QualifiedName>) -> Self {
        self.insert(interface);
        self
    }

    pub fn contains(&self, interface: &str) -> bool {
        self.0.contains(interface)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualifiedName> {
        self.0.iter()
    }
}

impl<T: Into<QualifiedName>> FromIterator<T> for ExemptionSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QualifiedName>> Extend<T> for ExemptionSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

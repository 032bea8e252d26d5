//! Namespace Exclusion Rules
//!
//! Naming-pattern exclusions applied before anything else, independent of the
//! caller's exemption set. They cover legacy shared code that cannot carry
//! binding descriptors and structural-conversion interfaces.

use std::fmt;

use locator_domain::QualifiedName;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONVERSION_MARKERS, DEFAULT_SHARED_NAMESPACE_PREFIXES};

/// Why an interface was excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Name starts with a reserved shared namespace
    SharedNamespace(String),
    /// Name contains a structural-conversion marker
    ConversionMarker(String),
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedNamespace(prefix) => write!(f, "shared namespace '{prefix}'"),
            Self::ConversionMarker(marker) => write!(f, "conversion marker '{marker}'"),
        }
    }
}

/// Prefixes and markers that exclude interfaces unconditionally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionRules {
    pub namespace_prefixes: Vec<String>,
    pub markers: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            namespace_prefixes: DEFAULT_SHARED_NAMESPACE_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            markers: DEFAULT_CONVERSION_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ExclusionRules {
    /// Rules that exclude nothing
    pub fn none() -> Self {
        Self {
            namespace_prefixes: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefixes.push(prefix.into());
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// First rule matching `name`; prefixes are checked before markers
    pub fn exclusion_reason(&self, name: &QualifiedName) -> Option<ExclusionReason> {
        if let Some(prefix) = self
            .namespace_prefixes
            .iter()
            .find(|prefix| name.starts_with(prefix))
        {
            return Some(ExclusionReason::SharedNamespace(prefix.clone()));
        }
        self.markers
            .iter()
            .find(|marker| name.contains(marker))
            .map(|marker| ExclusionReason::ConversionMarker(marker.clone()))
    }

    pub fn is_excluded(&self, name: &QualifiedName) -> bool {
        self.exclusion_reason(name).is_some()
    }
}

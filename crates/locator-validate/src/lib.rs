//! Registry Validation for the Service Locator
//!
//! This crate proves, mechanically, that every service interface follows the
//! binding convention:
//! - every non-exempt interface carries a binding descriptor
//! - the `default` slot is bound to a concrete class implementing the interface
//! - every bound platform override is a concrete class implementing the interface
//!
//! Interfaces under reserved shared namespaces, or whose name carries a
//! structural-conversion marker, are skipped unconditionally. Callers may
//! exempt further interfaces per run.
//!
//! # Example
//!
//! ```ignore
//! use locator_validate::{ExemptionSet, RegistryValidator};
//!
//! let validator = RegistryValidator::new(&catalog);
//! let violations = validator.validate_unit(&catalog, "Agent.Listener", &ExemptionSet::new())?;
//! assert!(violations.is_empty());
//! ```

#[macro_use]
pub mod violation_macro;
pub mod violation_trait;

pub mod audit;
pub mod config;
pub mod constants;
pub mod exclusion;
pub mod exemption;
pub mod registry;
pub mod reporter;
pub mod violations;

use thiserror::Error;

pub use audit::{GroupPlan, RegistryAudit};
pub use config::{ConfigLoader, FileConfig, GroupConfig, GroupsConfig, LoggingConfig};
pub use exclusion::{ExclusionReason, ExclusionRules};
pub use exemption::ExemptionSet;
pub use registry::{RegistryValidator, ValidationOutcome};
pub use reporter::{GroupReport, Reporter, ValidationReport, ValidationSummary};
pub use violation_trait::{Violation, ViolationCategory};
pub use violations::{BindingViolation, InvalidReason, ViolationKind};

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation error types
///
/// These are precondition failures that abort a run. Broken bindings are
/// never errors; they are reported as [`BindingViolation`]s.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Interface universe for unit '{unit}' is unavailable: {source}")]
    UniverseUnavailable {
        unit: String,
        #[source]
        source: locator_domain::Error,
    },

    #[error(transparent)]
    Domain(#[from] locator_domain::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ValidationError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Severity level for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

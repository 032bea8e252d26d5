//! # Service Locator
//!
//! Declarative, cross-platform service location for a modular agent, plus
//! the audit that proves every service interface is wired correctly.
//!
//! This crate is the public facade. It re-exports the binding model and the
//! registry validator, and hosts the `locator-audit` harness that loads a
//! catalog, runs the audit per module group and renders the report.
//!
//! ## Example
//!
//! ```ignore
//! use locator::harness::{AuditOptions, run_audit};
//!
//! let options = AuditOptions::default().with_manifest("bindings.json");
//! let run = run_audit(&options, &options.load_config()?)?;
//! std::process::exit(i32::from(run.exit_code()));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - binding descriptors, tables, catalogs and the locator
//! - `validate` - registry validator, group audit, config and reporting
//! - `logging` - tracing subscriber setup for the harness
//! - `harness` - catalog loading and audit orchestration behind the CLI

/// Domain layer - binding model and platform resolution
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use locator_domain::*;
}

/// Validation layer - registry audit and reporting
///
/// Re-exports from the validation crate for convenience
pub mod validate {
    pub use locator_validate::*;
}

pub mod harness;
pub mod logging;

pub use harness::{AuditOptions, AuditRun, OutputFormat, ResolvedBinding, resolve_bindings, run_audit};
pub use locator_domain::{BindingDescriptor, Platform, ServiceLocator};
pub use locator_validate::{ExemptionSet, RegistryValidator, ValidationReport};

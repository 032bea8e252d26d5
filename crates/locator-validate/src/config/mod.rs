//! Configuration Module
//!
//! File-based configuration for the registry audit, allowing projects to
//! set exclusion rules and per-group exemption sets via
//! `.locator-validate.toml`.
//!
//! # Example
//!
//! ```toml
//! [exclusions]
//! namespace_prefixes = ["Microsoft.TeamFoundation.DistributedTask"]
//! markers = ["IConverter"]
//!
//! [groups.agent]
//! units = ["Agent.Listener"]
//! exemptions = [
//!     "Agent.Listener.ICredentialProvider",
//!     "Agent.Listener.IConfigurationProvider",
//!     "Agent.Listener.IDiagnostic",
//! ]
//!
//! [groups.common]
//! exemptions = [
//!     "Common.IAgentService",
//!     "Common.ICredentialProvider",
//!     "Common.IExtension",
//!     "Common.IHostContext",
//!     "Common.ITraceManager",
//!     "Common.IThrottlingReporter",
//!     "Common.ICapabilitiesProvider",
//! ]
//!
//! # units left empty: every unit the catalog files under the group
//! [groups.worker]
//! exemptions = [
//!     "Worker.IExecutionContext",
//!     "Worker.IHandler",
//!     "Worker.IJobExtension",
//!     "Worker.IStep",
//!     "Worker.IStepHost",
//!     "Worker.IWorkerCommand",
//!     "Worker.IWorkerCommandExtension",
//! ]
//!
//! [logging]
//! level = "info"
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, validate_config};
pub use types::{FileConfig, GroupConfig, GroupsConfig, LoggingConfig};

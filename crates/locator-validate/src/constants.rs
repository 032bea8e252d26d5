//! Validation constants

// ============================================================================
// EXCLUSION DEFAULTS
// ============================================================================

/// Shared code copied into several modules; cannot carry binding descriptors
pub const DEFAULT_SHARED_NAMESPACE_PREFIXES: &[&str] = &["Microsoft.TeamFoundation.DistributedTask"];

/// Structural-conversion interfaces are never service contracts
pub const DEFAULT_CONVERSION_MARKERS: &[&str] = &["IConverter"];

// ============================================================================
// VIOLATION IDS
// ============================================================================

/// Interface has no binding descriptor
pub const MISSING_DESCRIPTOR_ID: &str = "LOC001";

/// Descriptor slot bound to an unusable type
pub const INVALID_BINDING_ID: &str = "LOC002";

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".locator-validate.toml";

/// Default configuration directory name (under the user config dir)
pub const DEFAULT_CONFIG_DIR: &str = "locator";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LOCATOR";

/// Separator for nested keys in environment variables (`LOCATOR_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted log level names
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];

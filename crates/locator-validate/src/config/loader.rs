//! Configuration loader
//!
//! Loads validation settings from default values, a TOML file and
//! environment variables, in that order (later sources override earlier).

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use locator_domain::ModuleGroup;
use tracing::{debug, warn};

use super::types::FileConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    LOG_LEVELS,
};
use crate::{Result, ValidationError};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// 1. Default values from `FileConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `LOCATOR_LOGGING__LEVEL`)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<FileConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(config_path) = &self.config_path
            && !config_path.exists()
        {
            return Err(ValidationError::Config(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        if let Some(path) = self.resolved_config_path() {
            figment = figment.merge(Toml::file(&path));
            debug!("Configuration loaded from {}", path.display());
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: FileConfig = figment.extract()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &FileConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            ValidationError::Config(format!("Failed to serialize config to TOML: {e}"))
        })?;

        std::fs::write(path.as_ref(), toml_string)?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File `load` reads: the explicit path, else the first default location
    /// that exists
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join("config.toml"))
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

/// Validate loaded configuration
///
/// Empty prefixes or markers would exclude every interface and silently
/// turn the audit into a no-op.
pub fn validate_config(config: &FileConfig) -> Result<()> {
    if config
        .exclusions
        .namespace_prefixes
        .iter()
        .any(|p| p.trim().is_empty())
    {
        return Err(ValidationError::Config(
            "Namespace exclusion prefixes cannot be empty".to_string(),
        ));
    }
    if config.exclusions.markers.iter().any(|m| m.trim().is_empty()) {
        return Err(ValidationError::Config(
            "Conversion markers cannot be empty".to_string(),
        ));
    }
    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        return Err(ValidationError::Config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            config.logging.level
        )));
    }
    for group in ModuleGroup::ALL {
        if config
            .groups
            .get(group)
            .units
            .iter()
            .any(|u| u.trim().is_empty())
        {
            warn!(%group, "Ignoring empty compiled unit name in configuration");
        }
    }
    Ok(())
}

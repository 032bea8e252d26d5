//! Configuration types

use std::path::PathBuf;

use locator_domain::ModuleGroup;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::exclusion::ExclusionRules;
use crate::exemption::ExemptionSet;

/// Root of `.locator-validate.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Naming rules applied to every group
    pub exclusions: ExclusionRules,
    /// Per-group universe and exemption set
    pub groups: GroupsConfig,
    /// Log output of the audit harness
    pub logging: LoggingConfig,
}

/// One entry per module group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    pub agent: GroupConfig,
    pub common: GroupConfig,
    pub worker: GroupConfig,
}

impl GroupsConfig {
    pub fn get(&self, group: ModuleGroup) -> &GroupConfig {
        match group {
            ModuleGroup::Agent => &self.agent,
            ModuleGroup::Common => &self.common,
            ModuleGroup::Worker => &self.worker,
        }
    }
}

/// Validation settings for one module group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Run this group at all
    pub enabled: bool,
    /// Compiled units forming the universe; empty = every unit of the group
    pub units: Vec<String>,
    /// Interfaces intentionally left without a descriptor
    pub exemptions: ExemptionSet,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            units: Vec::new(),
            exemptions: ExemptionSet::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rotated file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

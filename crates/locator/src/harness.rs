//! Audit Harness
//!
//! Loads a catalog (a JSON manifest, or the bindings registered at link time),
//! loads the validation config, runs the group audit and renders the report.
//! The harness decides pass or fail; the validator only classifies.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use locator_domain::registry::registered_catalog;
use locator_domain::{ModuleGroup, Platform, QualifiedName, ServiceCatalog, ServiceLocator, ServiceManifest};
use locator_validate::{ConfigLoader, FileConfig, RegistryAudit, Reporter, ValidationReport};
use serde_json::json;
use tracing::{debug, info};

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Ci,
}

impl OutputFormat {
    pub fn render(self, report: &ValidationReport) -> String {
        match self {
            Self::Human => Reporter::to_human_readable(report),
            Self::Json => Reporter::to_json(report),
            Self::Ci => Reporter::to_ci_summary(report),
        }
    }
}

/// What to audit and how to print it
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// JSON manifest; `None` audits link-time registrations
    pub manifest: Option<PathBuf>,
    /// Validation config; `None` searches the default locations
    pub config: Option<PathBuf>,
    /// Restrict the audit to one group
    pub group: Option<ModuleGroup>,
    pub format: OutputFormat,
}

impl AuditOptions {
    pub fn with_manifest<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_config<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_group(mut self, group: ModuleGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn config_loader(&self) -> ConfigLoader {
        let loader = ConfigLoader::new();
        match &self.config {
            Some(path) => loader.with_config_path(path),
            None => loader,
        }
    }

    /// Load the validation config these options point at
    pub fn load_config(&self) -> Result<FileConfig> {
        self.config_loader()
            .load()
            .context("Failed to load validation config")
    }

    /// Config file `load_config` reads, `None` when only defaults apply
    pub fn config_source(&self) -> Option<PathBuf> {
        self.config_loader().resolved_config_path()
    }
}

/// Finished audit
#[derive(Debug, Clone)]
pub struct AuditRun {
    pub report: ValidationReport,
    /// Report rendered in the requested format
    pub rendered: String,
}

impl AuditRun {
    /// 0 when no violations were found, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.report.summary.passed)
    }
}

/// Catalog named by the options
pub fn load_catalog(manifest: Option<&Path>) -> Result<ServiceCatalog> {
    match manifest {
        Some(path) => {
            let manifest = ServiceManifest::from_path(path)
                .with_context(|| format!("Failed to read manifest {}", path.display()))?;
            manifest
                .into_catalog()
                .with_context(|| format!("Invalid manifest {}", path.display()))
        }
        None => {
            debug!("No manifest given, using link-time registrations");
            registered_catalog().context("Inconsistent link-time registrations")
        }
    }
}

/// Run the audit with an already loaded config
pub fn audit_catalog(
    catalog: &ServiceCatalog,
    config: &FileConfig,
    group: Option<ModuleGroup>,
) -> Result<ValidationReport> {
    let mut audit = RegistryAudit::from_config(catalog, config);
    if let Some(group) = group {
        audit = audit.only(group);
    }
    Ok(audit.run()?)
}

/// Load the catalog, audit it against `config` and render
pub fn run_audit(options: &AuditOptions, config: &FileConfig) -> Result<AuditRun> {
    let catalog = load_catalog(options.manifest.as_deref())?;
    info!(units = catalog.units().len(), bindings = catalog.bindings().len(), "Catalog loaded");

    let report = audit_catalog(&catalog, config, options.group)?;
    let rendered = options.format.render(&report);
    Ok(AuditRun { report, rendered })
}

/// Resolution outcome of one registered interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinding {
    pub interface: QualifiedName,
    /// Selected type, or why none could be selected
    pub resolved: std::result::Result<QualifiedName, String>,
}

/// Resolve every bound interface for a platform
pub fn resolve_bindings(catalog: &ServiceCatalog, platform: Option<Platform>) -> Vec<ResolvedBinding> {
    let locator = ServiceLocator::for_platform(catalog.bindings(), platform);
    catalog
        .bindings()
        .interfaces()
        .map(|interface| ResolvedBinding {
            interface: interface.clone(),
            resolved: locator
                .resolve(interface.as_str())
                .cloned()
                .map_err(|e| e.to_string()),
        })
        .collect()
}

/// Render a resolution listing
pub fn render_bindings(
    bindings: &[ResolvedBinding],
    platform: Option<Platform>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = bindings
                .iter()
                .map(|b| match &b.resolved {
                    Ok(concrete) => json!({ "interface": b.interface, "resolved": concrete }),
                    Err(error) => json!({ "interface": b.interface, "error": error }),
                })
                .collect();
            let platform = platform.map(|p| p.to_string());
            serde_json::to_string_pretty(&json!({ "platform": platform, "bindings": entries }))
                .unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Human | OutputFormat::Ci => {
            let platform = platform.map_or_else(|| "none".to_string(), |p| p.to_string());
            let mut output = format!("Bindings for platform: {platform}\n");
            for binding in bindings {
                match &binding.resolved {
                    Ok(concrete) => output.push_str(&format!("  {} -> {}\n", binding.interface, concrete)),
                    Err(error) => output.push_str(&format!("  {} !! {}\n", binding.interface, error)),
                }
            }
            output
        }
    }
}

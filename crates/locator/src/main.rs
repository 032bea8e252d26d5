//! locator-audit - Entry Point
//!
//! Runs the registry audit over a binding manifest (or the link-time
//! registrations) and prints the report.
//!
//! | Exit code | Meaning |
//! |-----------|---------|
//! | 0 | every audited interface is correctly bound |
//! | 1 | at least one violation |
//! | 2 | the audit could not run (bad config, manifest or unknown unit) |

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use locator::harness::{self, AuditOptions, OutputFormat};
use locator::logging::init_logging;
use locator::domain::{ModuleGroup, Platform};
use tracing::info;

/// Command line interface for the registry audit
#[derive(Parser, Debug)]
#[command(name = "locator-audit")]
#[command(about = "Service Locator - binding descriptor audit")]
#[command(version)]
pub struct Cli {
    /// JSON binding manifest (defaults to link-time registrations)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Audit a single module group
    #[arg(short, long, value_enum)]
    pub group: Option<GroupArg>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,

    /// Print the binding each interface resolves to instead of auditing
    #[arg(long)]
    pub list_bindings: bool,

    /// Platform used by --list-bindings (defaults to the host platform)
    #[arg(long, value_enum, requires = "list_bindings")]
    pub platform: Option<PlatformArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupArg {
    Agent,
    Common,
    Worker,
}

impl From<GroupArg> for ModuleGroup {
    fn from(group: GroupArg) -> Self {
        match group {
            GroupArg::Agent => Self::Agent,
            GroupArg::Common => Self::Common,
            GroupArg::Worker => Self::Worker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
    Ci,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Human => Self::Human,
            FormatArg::Json => Self::Json,
            FormatArg::Ci => Self::Ci,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Windows,
    Macos,
    Linux,
}

impl From<PlatformArg> for Platform {
    fn from(platform: PlatformArg) -> Self {
        match platform {
            PlatformArg::Windows => Self::Windows,
            PlatformArg::Macos => Self::MacOS,
            PlatformArg::Linux => Self::Linux,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = AuditOptions {
        manifest: cli.manifest,
        config: cli.config,
        group: cli.group.map(Into::into),
        format: cli.format.into(),
    };

    match run(&options, cli.list_bindings, cli.platform.map(Into::into)) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("locator-audit: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(
    options: &AuditOptions,
    list_bindings: bool,
    platform: Option<Platform>,
) -> anyhow::Result<ExitCode> {
    let config = options.load_config()?;
    init_logging(&config.logging)?;
    match options.config_source() {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    if list_bindings {
        let catalog = harness::load_catalog(options.manifest.as_deref())?;
        let platform = platform.or_else(Platform::current);
        let bindings = harness::resolve_bindings(&catalog, platform);
        println!("{}", harness::render_bindings(&bindings, platform, options.format));
        return Ok(ExitCode::SUCCESS);
    }

    let run = harness::run_audit(options, &config)?;
    print!("{}", run.rendered);
    Ok(ExitCode::from(run.exit_code()))
}

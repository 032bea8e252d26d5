//! Validation Report Generation
//!
//! Generates reports in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output
//! - CI summary for GitHub Actions annotations

use std::fmt::Write as _;

use locator_domain::ModuleGroup;
use serde::Serialize;

use crate::registry::ValidationOutcome;
use crate::violation_trait::Violation;
use crate::violations::{BindingViolation, ViolationKind};

/// Outcome of one module group
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: ModuleGroup,
    /// Compiled units the universe was drawn from
    pub units: Vec<String>,
    pub checked: usize,
    pub excluded: usize,
    pub exempted: usize,
    pub violations: Vec<BindingViolation>,
}

impl GroupReport {
    pub fn from_outcome(group: ModuleGroup, units: Vec<String>, outcome: ValidationOutcome) -> Self {
        Self {
            group,
            units,
            checked: outcome.checked,
            excluded: outcome.excluded,
            exempted: outcome.exempted,
            violations: outcome.violations,
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validation report containing all violations
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Timestamp of the validation run
    pub timestamp: String,
    /// Summary statistics
    pub summary: ValidationSummary,
    /// Per-group results, in audit order
    pub groups: Vec<GroupReport>,
}

/// Summary of validation results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Total number of violations
    pub total_violations: usize,
    /// Number of interfaces without a descriptor
    pub missing_descriptor_count: usize,
    /// Number of rejected slot bindings
    pub invalid_binding_count: usize,
    /// Interfaces whose descriptor was inspected
    pub interfaces_checked: usize,
    /// Whether validation passed (no violations at all)
    pub passed: bool,
}

impl ValidationSummary {
    fn from_groups(groups: &[GroupReport]) -> Self {
        let violations = || groups.iter().flat_map(|g| &g.violations);
        let missing_descriptor_count = violations()
            .filter(|v| v.kind() == ViolationKind::MissingDescriptor)
            .count();
        let invalid_binding_count = violations()
            .filter(|v| v.kind() == ViolationKind::InvalidBinding)
            .count();
        let total_violations = missing_descriptor_count + invalid_binding_count;

        Self {
            total_violations,
            missing_descriptor_count,
            invalid_binding_count,
            interfaces_checked: groups.iter().map(|g| g.checked).sum(),
            passed: total_violations == 0,
        }
    }
}

impl ValidationReport {
    /// Report stamped with the current time
    pub fn new(groups: Vec<GroupReport>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ValidationSummary::from_groups(&groups),
            groups,
        }
    }

    /// Every violation across all groups
    pub fn violations(&self) -> impl Iterator<Item = &BindingViolation> {
        self.groups.iter().flat_map(|g| g.violations.iter())
    }

    pub fn group(&self, group: ModuleGroup) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.group == group)
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &ValidationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str("=== Service Locator Validation Report ===\n\n");
        let _ = writeln!(output, "Timestamp: {}\n", report.timestamp);

        output.push_str("--- Summary ---\n");
        let _ = writeln!(output, "Total Violations:   {}", report.summary.total_violations);
        let _ = writeln!(
            output,
            "  Missing:          {}",
            report.summary.missing_descriptor_count
        );
        let _ = writeln!(
            output,
            "  Invalid binding:  {}",
            report.summary.invalid_binding_count
        );
        let _ = writeln!(
            output,
            "Interfaces checked: {}\n",
            report.summary.interfaces_checked
        );

        for group in &report.groups {
            let _ = writeln!(
                output,
                "--- {} ({} units: {} checked, {} excluded, {} exempt) ---",
                group.group,
                group.units.len(),
                group.checked,
                group.excluded,
                group.exempted
            );
            if group.violations.is_empty() {
                output.push_str("  no violations\n");
            }
            for violation in &group.violations {
                let _ = writeln!(
                    output,
                    "  [{}] {}: {}",
                    violation.severity(),
                    violation.id(),
                    violation.message()
                );
                if let Some(suggestion) = violation.suggestion() {
                    let _ = writeln!(output, "    -> {suggestion}");
                }
            }
            output.push('\n');
        }

        if report.summary.passed {
            output.push_str("Status: PASSED\n");
        } else {
            output.push_str("Status: FAILED\n");
        }

        output
    }

    /// Generate CI summary (GitHub Actions format)
    ///
    /// Emits one `::error` workflow command per violation followed by a
    /// markdown summary table.
    pub fn to_ci_summary(report: &ValidationReport) -> String {
        let mut output = String::new();

        for violation in report.violations() {
            let _ = writeln!(
                output,
                "::{} title={}::{}",
                annotation_level(violation),
                violation.id(),
                violation.message()
            );
        }

        output.push_str("## Service Locator Validation\n\n");

        if report.summary.passed {
            output.push_str("**Status:** :white_check_mark: PASSED\n\n");
        } else {
            output.push_str("**Status:** :x: FAILED\n\n");
        }

        output.push_str("| Group | Checked | Excluded | Exempt | Violations |\n");
        output.push_str("|-------|---------|----------|--------|------------|\n");
        for group in &report.groups {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                group.group,
                group.checked,
                group.excluded,
                group.exempted,
                group.violations.len()
            );
        }
        let _ = writeln!(
            output,
            "| **Total** | {} | | | **{}** |",
            report.summary.interfaces_checked, report.summary.total_violations
        );

        output
    }
}

fn annotation_level(violation: &BindingViolation) -> &'static str {
    match violation.severity() {
        crate::Severity::Error => "error",
        crate::Severity::Warning => "warning",
        crate::Severity::Info => "notice",
    }
}

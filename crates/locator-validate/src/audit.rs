//! Group Audit
//!
//! Runs the [`RegistryValidator`] over each module group (Agent, Common,
//! Worker) with that group's own unit list and exemption set, and folds the
//! outcomes into a [`ValidationReport`]. Groups are independent and run in
//! parallel.

use locator_domain::ModuleGroup;
use locator_domain::ports::{BindingMetadata, InterfaceSource, TypeCatalog};
use rayon::prelude::*;
use tracing::{info, info_span, warn};

use crate::config::FileConfig;
use crate::exclusion::ExclusionRules;
use crate::exemption::ExemptionSet;
use crate::registry::{RegistryValidator, ValidationOutcome};
use crate::reporter::{GroupReport, ValidationReport};
use crate::Result;

/// Units and exemptions validated for one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    pub group: ModuleGroup,
    /// Compiled units; empty means every unit the catalog files under the group,
    /// which may be none
    pub units: Vec<String>,
    pub exemptions: ExemptionSet,
}

impl GroupPlan {
    pub fn new(group: ModuleGroup) -> Self {
        Self {
            group,
            units: Vec::new(),
            exemptions: ExemptionSet::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.units.push(unit.into());
        self
    }

    pub fn with_exemptions(mut self, exemptions: ExemptionSet) -> Self {
        self.exemptions = exemptions;
        self
    }
}

/// Multi-group audit over one catalog
pub struct RegistryAudit<'a, C> {
    catalog: &'a C,
    rules: ExclusionRules,
    plans: Vec<GroupPlan>,
}

impl<'a, C> RegistryAudit<'a, C>
where
    C: InterfaceSource + TypeCatalog + BindingMetadata,
{
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            rules: ExclusionRules::default(),
            plans: Vec::new(),
        }
    }

    /// Audit every enabled group of a loaded configuration
    pub fn from_config(catalog: &'a C, config: &FileConfig) -> Self {
        let plans = ModuleGroup::ALL
            .into_iter()
            .filter_map(|group| {
                let group_config = config.groups.get(group);
                group_config.enabled.then(|| GroupPlan {
                    group,
                    units: group_config
                        .units
                        .iter()
                        .filter(|u| !u.trim().is_empty())
                        .cloned()
                        .collect(),
                    exemptions: group_config.exemptions.clone(),
                })
            })
            .collect();

        Self {
            catalog,
            rules: config.exclusions.clone(),
            plans,
        }
    }

    pub fn with_rules(mut self, rules: ExclusionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Add a group; a group added twice is audited twice
    pub fn with_group(mut self, plan: GroupPlan) -> Self {
        self.plans.push(plan);
        self
    }

    /// Restrict the audit to one group
    pub fn only(mut self, group: ModuleGroup) -> Self {
        self.plans.retain(|plan| plan.group == group);
        self
    }

    pub fn plans(&self) -> &[GroupPlan] {
        &self.plans
    }

    /// Run every planned group
    ///
    /// Fails on the first unavailable unit; binding problems end up in the
    /// report. A group whose catalog holds no units yields an empty report.
    pub fn run(&self) -> Result<ValidationReport> {
        let validator = RegistryValidator::new(self.catalog).with_rules(self.rules.clone());

        let groups = self
            .plans
            .par_iter()
            .map(|plan| self.run_group(&validator, plan))
            .collect::<Result<Vec<_>>>()?;

        let report = ValidationReport::new(groups);
        info!(
            violations = report.summary.total_violations,
            checked = report.summary.interfaces_checked,
            passed = report.summary.passed,
            "Registry audit finished"
        );
        Ok(report)
    }

    fn run_group(&self, validator: &RegistryValidator<'_>, plan: &GroupPlan) -> Result<GroupReport> {
        let span = info_span!("group", group = %plan.group);
        let _guard = span.enter();

        let units = if plan.units.is_empty() {
            self.catalog.unit_names(plan.group)
        } else {
            plan.units.clone()
        };
        if units.is_empty() {
            // An empty universe has nothing to violate
            warn!("No compiled units declared for group, nothing to validate");
            return Ok(GroupReport::from_outcome(plan.group, units, ValidationOutcome::default()));
        }

        let outcome = validator.audit_units(self.catalog, &units, &plan.exemptions)?;
        info!(
            units = units.len(),
            checked = outcome.checked,
            violations = outcome.violations.len(),
            "Group validated"
        );
        Ok(GroupReport::from_outcome(plan.group, units, outcome))
    }
}

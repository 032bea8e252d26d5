//! Registry Validator
//!
//! Scans a closed universe of interface declarations and checks each
//! non-excluded, non-exempt interface's binding descriptor:
//!
//! 1. Names under a shared namespace or carrying a conversion marker are skipped.
//! 2. Exempt interfaces are skipped.
//! 3. A missing descriptor is a `MissingDescriptor` violation.
//! 4. Slots are inspected in the order `default`, `preferredOnWindows`,
//!    `preferredOnMacOS`, `preferredOnLinux`. The default must be bound.
//!    Absent or null overrides are tolerated. Every bound type must be a
//!    declared, concrete class implementing the interface.
//!
//! Every violation across the universe is collected; nothing stops at the
//! first failure and nothing is written anywhere.

use locator_domain::ports::{BindingMetadata, InterfaceSource, TypeCatalog};
use locator_domain::{BindingDescriptor, InterfaceDecl, QualifiedName, Slot, SlotValue};
use tracing::{debug, warn};

use crate::exclusion::ExclusionRules;
use crate::exemption::ExemptionSet;
use crate::violations::{BindingViolation, InvalidReason};
use crate::{Result, ValidationError};

/// Violations plus counters of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub violations: Vec<BindingViolation>,
    /// Interfaces whose descriptor was inspected
    pub checked: usize,
    /// Interfaces skipped by a naming rule
    pub excluded: usize,
    /// Interfaces skipped by the exemption set
    pub exempted: usize,
}

impl ValidationOutcome {
    fn merge(&mut self, other: ValidationOutcome) {
        self.violations.extend(other.violations);
        self.checked += other.checked;
        self.excluded += other.excluded;
        self.exempted += other.exempted;
    }
}

/// Checks binding descriptors against a type catalog
pub struct RegistryValidator<'a> {
    types: &'a dyn TypeCatalog,
    bindings: &'a dyn BindingMetadata,
    rules: ExclusionRules,
}

impl<'a> RegistryValidator<'a> {
    /// Validator over a source that knows both types and bindings
    pub fn new<M: TypeCatalog + BindingMetadata>(metadata: &'a M) -> Self {
        Self::with_parts(metadata, metadata)
    }

    /// Validator over separate type and binding sources
    pub fn with_parts(types: &'a dyn TypeCatalog, bindings: &'a dyn BindingMetadata) -> Self {
        Self {
            types,
            bindings,
            rules: ExclusionRules::default(),
        }
    }

    /// Replace the namespace exclusion rules
    pub fn with_rules(mut self, rules: ExclusionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    /// Validate an interface universe
    ///
    /// The returned list is empty iff every non-exempt, non-excluded interface
    /// has a valid default and every bound override is valid.
    pub fn validate(
        &self,
        interfaces: &[InterfaceDecl],
        exemptions: &ExemptionSet,
    ) -> Vec<BindingViolation> {
        self.audit(interfaces, exemptions).violations
    }

    /// [`validate`](Self::validate) with skip counters
    pub fn audit(&self, interfaces: &[InterfaceDecl], exemptions: &ExemptionSet) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        for interface in interfaces {
            if let Some(reason) = self.rules.exclusion_reason(&interface.name) {
                debug!(interface = %interface.name, %reason, "Interface excluded by naming rule");
                outcome.excluded += 1;
                continue;
            }
            if exemptions.contains(interface.name.as_str()) {
                debug!(interface = %interface.name, "Interface exempt");
                outcome.exempted += 1;
                continue;
            }

            outcome.checked += 1;
            let found = self.check_interface(interface);
            for violation in &found {
                warn!(kind = %violation.kind(), "{violation}");
            }
            outcome.violations.extend(found);
        }

        outcome
    }

    /// Validate every interface declared by one compiled unit
    pub fn validate_unit(
        &self,
        source: &dyn InterfaceSource,
        unit: &str,
        exemptions: &ExemptionSet,
    ) -> Result<Vec<BindingViolation>> {
        Ok(self.audit_unit(source, unit, exemptions)?.violations)
    }

    /// [`validate_unit`](Self::validate_unit) with skip counters
    pub fn audit_unit(
        &self,
        source: &dyn InterfaceSource,
        unit: &str,
        exemptions: &ExemptionSet,
    ) -> Result<ValidationOutcome> {
        let interfaces = source
            .interfaces(unit)
            .map_err(|source| ValidationError::UniverseUnavailable {
                unit: unit.to_string(),
                source,
            })?;
        debug!(unit, interfaces = interfaces.len(), "Validating compiled unit");
        Ok(self.audit(&interfaces, exemptions))
    }

    /// Validate several compiled units sharing one exemption set
    pub fn audit_units(
        &self,
        source: &dyn InterfaceSource,
        units: &[String],
        exemptions: &ExemptionSet,
    ) -> Result<ValidationOutcome> {
        let mut outcome = ValidationOutcome::default();
        for unit in units {
            outcome.merge(self.audit_unit(source, unit, exemptions)?);
        }
        Ok(outcome)
    }

    /// Violations for a single interface, ignoring exclusions and exemptions
    pub fn check_interface(&self, interface: &InterfaceDecl) -> Vec<BindingViolation> {
        let Some(descriptor) = self.bindings.descriptor_for(interface) else {
            return vec![BindingViolation::missing_descriptor(
                interface.name.clone(),
                interface.group,
            )];
        };
        self.check_descriptor(interface, descriptor)
    }

    fn check_descriptor(
        &self,
        interface: &InterfaceDecl,
        descriptor: &BindingDescriptor,
    ) -> Vec<BindingViolation> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| {
                let value = descriptor.slot(slot);
                let reason = match value {
                    SlotValue::Absent | SlotValue::Null if slot.is_mandatory() => {
                        InvalidReason::NullType
                    }
                    // Overrides are opt-in per platform
                    SlotValue::Absent | SlotValue::Null => return None,
                    SlotValue::Bound(concrete) => {
                        self.check_binding(&interface.name, concrete).err()?
                    }
                };
                Some(BindingViolation::invalid_binding(
                    interface.name.clone(),
                    interface.group,
                    slot,
                    value.bound(),
                    reason,
                ))
            })
            .collect()
    }

    /// Whether `concrete` can back `interface`
    pub fn check_binding(
        &self,
        interface: &QualifiedName,
        concrete: &QualifiedName,
    ) -> std::result::Result<(), InvalidReason> {
        let Some(decl) = self.types.type_decl(concrete) else {
            return Err(InvalidReason::UnknownType);
        };
        if decl.is_interface() {
            return Err(InvalidReason::IsInterface);
        }
        if !decl.kind.is_concrete_class() {
            return Err(InvalidReason::NotAClass(decl.kind));
        }
        if !self
            .types
            .implemented_interfaces(concrete)
            .contains(interface.as_str())
        {
            return Err(InvalidReason::DoesNotImplement);
        }
        Ok(())
    }
}

//! Binding Violations
//!
//! The structured product of a validation run. A violation names the
//! offending interface and, for invalid bindings, the slot, the offending
//! type and why it was rejected.

use std::fmt;

use locator_domain::{ModuleGroup, QualifiedName, Slot, TypeKind};
use serde::Serialize;

/// Why a bound type cannot back an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "reason", content = "kind", rename_all = "snake_case")]
pub enum InvalidReason {
    /// Slot carries no type
    NullType,
    /// Type is not declared anywhere in the catalog
    UnknownType,
    /// Type is itself an interface
    IsInterface,
    /// Type is abstract, static or a value type
    NotAClass(TypeKind),
    /// Class does not implement the owning interface
    DoesNotImplement,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullType => write!(f, "is null"),
            Self::UnknownType => write!(f, "is not a declared type"),
            Self::IsInterface => write!(f, "is an interface, not a class"),
            Self::NotAClass(kind) => write!(f, "is a {kind}, not a concrete class"),
            Self::DoesNotImplement => write!(f, "does not implement the interface"),
        }
    }
}

/// Kind of a violation, as reported to the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    MissingDescriptor,
    InvalidBinding,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescriptor => write!(f, "MissingDescriptor"),
            Self::InvalidBinding => write!(f, "InvalidBinding"),
        }
    }
}

/// Placeholder printed for a slot without a type
pub const NULL_TYPE: &str = "null";

define_violations! {
    pub enum BindingViolation {
        #[violation(
            id = "LOC001",
            category = Registration,
            severity = Error,
            message = "Missing binding descriptor for {group} interface '{interface}'",
            suggestion = "Attach a binding descriptor to '{interface}' or add it to the {group} exemption set"
        )]
        MissingDescriptor {
            interface: QualifiedName,
            group: ModuleGroup,
        },
        #[violation(
            id = "LOC002",
            category = Binding,
            severity = Error,
            message = "Invalid {slot} binding for {group} interface '{interface}': '{concrete}' {reason}",
            suggestion = "Bind {slot} of {group} interface '{interface}' to a concrete class implementing it; '{concrete}' {reason}"
        )]
        InvalidBinding {
            interface: QualifiedName,
            group: ModuleGroup,
            slot: Slot,
            concrete: String,
            reason: InvalidReason,
        },
    }
}

impl BindingViolation {
    pub fn missing_descriptor(interface: QualifiedName, group: ModuleGroup) -> Self {
        Self::MissingDescriptor { interface, group }
    }

    pub fn invalid_binding(
        interface: QualifiedName,
        group: ModuleGroup,
        slot: Slot,
        concrete: Option<&QualifiedName>,
        reason: InvalidReason,
    ) -> Self {
        Self::InvalidBinding {
            interface,
            group,
            slot,
            concrete: concrete.map_or_else(|| NULL_TYPE.to_string(), ToString::to_string),
            reason,
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::MissingDescriptor { .. } => ViolationKind::MissingDescriptor,
            Self::InvalidBinding { .. } => ViolationKind::InvalidBinding,
        }
    }

    /// Offending interface
    pub fn interface_name(&self) -> &QualifiedName {
        match self {
            Self::MissingDescriptor { interface, .. } | Self::InvalidBinding { interface, .. } => {
                interface
            }
        }
    }

    pub fn group(&self) -> ModuleGroup {
        match self {
            Self::MissingDescriptor { group, .. } | Self::InvalidBinding { group, .. } => *group,
        }
    }

    /// Rejection reason of an invalid binding
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::MissingDescriptor { .. } => None,
            Self::InvalidBinding { reason, .. } => Some(*reason),
        }
    }
}

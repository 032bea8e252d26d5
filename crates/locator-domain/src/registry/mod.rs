//! Compile-time Binding Registration
//!
//! Uses the `linkme` crate so that each crate can declare its types and
//! binding descriptors next to the code they describe. The entries are
//! gathered at link time and turned into a [`ServiceCatalog`] on demand.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Binding Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate declares:   #[linkme::distributed_slice(...)]         │
//! │                       static ENTRY: TypeRegistration = ...      │
//! │                              ↓                                  │
//! │  2. Registry holds:   TYPE_REGISTRATIONS / BINDING_REGISTRATIONS│
//! │                              ↓                                  │
//! │  3. Catalog builder:  registered_catalog()                      │
//! │                              ↓                                  │
//! │  4. Validator audits, locator resolves                          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use locator_domain::registry::{
//!     BindingRegistration, StaticSlot, TypeRegistration, BINDING_REGISTRATIONS, TYPE_REGISTRATIONS,
//! };
//! use locator_domain::value_objects::{ModuleGroup, TypeKind};
//!
//! #[linkme::distributed_slice(TYPE_REGISTRATIONS)]
//! static TERMINAL: TypeRegistration = TypeRegistration::interface("Agent.Listener", ModuleGroup::Agent, "Agent.ITerminal");
//!
//! #[linkme::distributed_slice(BINDING_REGISTRATIONS)]
//! static TERMINAL_BINDING: BindingRegistration = BindingRegistration::new("Agent.ITerminal", "Agent.Terminal")
//!     .on_windows(StaticSlot::Bound("Agent.WindowsTerminal"));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::binding::{BindingDescriptor, SlotValue};
use crate::catalog::{CompiledUnit, ServiceCatalog};
use crate::error::Result;
use crate::value_objects::{ModuleGroup, QualifiedName, Slot, TypeDecl, TypeKind};

/// Slot state usable in `static` initializers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticSlot {
    Absent,
    Null,
    Bound(&'static str),
}

impl StaticSlot {
    fn to_value(self) -> SlotValue {
        match self {
            Self::Absent => SlotValue::Absent,
            Self::Null => SlotValue::Null,
            Self::Bound(name) => SlotValue::Bound(QualifiedName::new(name)),
        }
    }
}

/// Type declared by a compiled unit, registered at link time
#[derive(Debug)]
pub struct TypeRegistration {
    pub unit: &'static str,
    pub group: ModuleGroup,
    pub name: &'static str,
    pub kind: TypeKind,
    pub base: Option<&'static str>,
    pub implements: &'static [&'static str],
}

impl TypeRegistration {
    /// Register an interface with no extended interfaces
    pub const fn interface(unit: &'static str, group: ModuleGroup, name: &'static str) -> Self {
        Self {
            unit,
            group,
            name,
            kind: TypeKind::Interface,
            base: None,
            implements: &[],
        }
    }

    /// Register a concrete class implementing `implements`
    pub const fn class(
        unit: &'static str,
        group: ModuleGroup,
        name: &'static str,
        implements: &'static [&'static str],
    ) -> Self {
        Self {
            unit,
            group,
            name,
            kind: TypeKind::Class,
            base: None,
            implements,
        }
    }

    fn to_decl(&self) -> TypeDecl {
        TypeDecl {
            name: QualifiedName::new(self.name),
            kind: self.kind,
            base: self.base.map(QualifiedName::new),
            implements: self.implements.iter().copied().map(QualifiedName::new).collect(),
            members: Vec::new(),
        }
    }
}

/// Binding descriptor registered at link time
#[derive(Debug)]
pub struct BindingRegistration {
    pub interface: &'static str,
    pub default: StaticSlot,
    pub preferred_on_windows: StaticSlot,
    pub preferred_on_macos: StaticSlot,
    pub preferred_on_linux: StaticSlot,
}

impl BindingRegistration {
    /// Descriptor with a bound default and no overrides
    pub const fn new(interface: &'static str, default: &'static str) -> Self {
        Self {
            interface,
            default: StaticSlot::Bound(default),
            preferred_on_windows: StaticSlot::Absent,
            preferred_on_macos: StaticSlot::Absent,
            preferred_on_linux: StaticSlot::Absent,
        }
    }

    pub const fn with_default(mut self, default: StaticSlot) -> Self {
        self.default = default;
        self
    }

    pub const fn on_windows(mut self, slot: StaticSlot) -> Self {
        self.preferred_on_windows = slot;
        self
    }

    pub const fn on_macos(mut self, slot: StaticSlot) -> Self {
        self.preferred_on_macos = slot;
        self
    }

    pub const fn on_linux(mut self, slot: StaticSlot) -> Self {
        self.preferred_on_linux = slot;
        self
    }

    fn to_descriptor(&self) -> BindingDescriptor {
        let mut descriptor = BindingDescriptor::without_default();
        descriptor.set(Slot::Default, self.default.to_value());
        descriptor.set(Slot::PreferredOnWindows, self.preferred_on_windows.to_value());
        descriptor.set(Slot::PreferredOnMacOS, self.preferred_on_macos.to_value());
        descriptor.set(Slot::PreferredOnLinux, self.preferred_on_linux.to_value());
        descriptor
    }
}

// Auto-collection via linkme distributed slices - crates submit entries at compile time
#[linkme::distributed_slice]
pub static TYPE_REGISTRATIONS: [TypeRegistration] = [..];

#[linkme::distributed_slice]
pub static BINDING_REGISTRATIONS: [BindingRegistration] = [..];

/// Build a catalog from everything registered in the distributed slices
///
/// Link order is unspecified, so units and their types are sorted by name to
/// keep enumeration deterministic.
pub fn registered_catalog() -> Result<ServiceCatalog> {
    build_catalog(&TYPE_REGISTRATIONS, &BINDING_REGISTRATIONS)
}

/// Build a catalog from explicit registration lists
pub fn build_catalog(
    types: &[TypeRegistration],
    bindings: &[BindingRegistration],
) -> Result<ServiceCatalog> {
    let mut units: BTreeMap<&str, CompiledUnit> = BTreeMap::new();
    for entry in types {
        units
            .entry(entry.unit)
            .or_insert_with(|| CompiledUnit::new(entry.unit, entry.group))
            .types
            .push(entry.to_decl());
    }

    let mut catalog = ServiceCatalog::new();
    for (_, mut unit) in units {
        unit.types.sort_by(|a, b| a.name.cmp(&b.name));
        catalog.add_unit(unit);
    }

    for entry in bindings {
        catalog.bind(entry.interface, entry.to_descriptor())?;
    }

    debug!(
        units = catalog.units().len(),
        bindings = catalog.bindings().len(),
        "Built catalog from registrations"
    );
    Ok(catalog)
}

/// List all registered interface bindings
///
/// Returns `(interface, default)` pairs; useful for CLI listings.
pub fn list_registered_bindings() -> Vec<(&'static str, Option<&'static str>)> {
    BINDING_REGISTRATIONS
        .iter()
        .map(|entry| match entry.default {
            StaticSlot::Bound(name) => (entry.interface, Some(name)),
            StaticSlot::Absent | StaticSlot::Null => (entry.interface, None),
        })
        .collect()
}

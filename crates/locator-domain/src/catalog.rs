//! Service Catalog
//!
//! In-memory universe of compiled units, the types they declare and the
//! binding table attached to their interfaces. Implements every domain port,
//! so one catalog is all a validation run needs.

use std::collections::{BTreeSet, HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binding::{BindingDescriptor, BindingTable};
use crate::error::{Error, Result};
use crate::ports::{BindingMetadata, InterfaceSource, TypeCatalog};
use crate::value_objects::{InterfaceDecl, ModuleGroup, QualifiedName, TypeDecl};

/// A named module and the types it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledUnit {
    pub name: String,
    pub group: ModuleGroup,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl CompiledUnit {
    pub fn new(name: impl Into<String>, group: ModuleGroup) -> Self {
        Self {
            name: name.into(),
            group,
            types: Vec::new(),
        }
    }

    /// Add a declared type
    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// Interface declarations in declaration order
    pub fn interfaces(&self) -> Vec<InterfaceDecl> {
        self.types
            .iter()
            .filter_map(|decl| InterfaceDecl::from_type(decl, self.group))
            .collect()
    }
}

/// Compiled units plus their binding table
///
/// The same qualified name may be declared by more than one unit (shared
/// code copied into several modules); type lookups resolve to the first
/// declaration.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    units: Vec<CompiledUnit>,
    index: HashMap<QualifiedName, (usize, usize)>,
    bindings: BindingTable,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compiled unit
    pub fn add_unit(&mut self, unit: CompiledUnit) {
        let unit_idx = self.units.len();
        for (type_idx, decl) in unit.types.iter().enumerate() {
            self.index
                .entry(decl.name.clone())
                .or_insert((unit_idx, type_idx));
        }
        self.units.push(unit);
    }

    /// Builder-style [`add_unit`](Self::add_unit)
    pub fn with_unit(mut self, unit: CompiledUnit) -> Self {
        self.add_unit(unit);
        self
    }

    /// Attach a binding descriptor to an interface
    pub fn bind(
        &mut self,
        interface: impl Into<QualifiedName>,
        descriptor: BindingDescriptor,
    ) -> Result<()> {
        self.bindings.bind(interface, descriptor)
    }

    /// Builder-style [`bind`](Self::bind)
    pub fn with_binding(
        mut self,
        interface: impl Into<QualifiedName>,
        descriptor: BindingDescriptor,
    ) -> Result<Self> {
        self.bind(interface, descriptor)?;
        Ok(self)
    }

    /// Replace the whole binding table
    pub fn with_bindings(mut self, bindings: BindingTable) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn units(&self) -> &[CompiledUnit] {
        &self.units
    }

    /// Look up a unit by name
    pub fn unit(&self, name: &str) -> Option<&CompiledUnit> {
        self.units.iter().find(|unit| unit.name == name)
    }
}

impl InterfaceSource for ServiceCatalog {
    fn interfaces(&self, unit: &str) -> Result<Vec<InterfaceDecl>> {
        self.unit(unit)
            .map(CompiledUnit::interfaces)
            .ok_or_else(|| Error::unknown_unit(unit))
    }

    fn unit_names(&self, group: ModuleGroup) -> Vec<String> {
        self.units
            .iter()
            .filter(|unit| unit.group == group)
            .map(|unit| unit.name.clone())
            .collect()
    }
}

impl TypeCatalog for ServiceCatalog {
    fn type_decl(&self, name: &QualifiedName) -> Option<&TypeDecl> {
        let (unit_idx, type_idx) = *self.index.get(name)?;
        self.units.get(unit_idx)?.types.get(type_idx)
    }

    fn implemented_interfaces(&self, name: &QualifiedName) -> BTreeSet<QualifiedName> {
        let mut implemented = BTreeSet::new();
        let mut visited = BTreeSet::new();
        let mut pending = VecDeque::from([name.clone()]);

        while let Some(current) = pending.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            let Some(decl) = self.type_decl(&current) else {
                debug!(type_name = %current, "Dangling type reference in inheritance chain");
                continue;
            };
            if decl.is_interface() && current != *name {
                implemented.insert(current.clone());
            }
            pending.extend(decl.base.iter().cloned());
            for interface in &decl.implements {
                // Interfaces outside the catalog still count as implemented
                implemented.insert(interface.clone());
                pending.push_back(interface.clone());
            }
        }

        implemented
    }
}

impl BindingMetadata for ServiceCatalog {
    fn descriptor_for(&self, interface: &InterfaceDecl) -> Option<&BindingDescriptor> {
        self.bindings.descriptor_for(interface)
    }
}

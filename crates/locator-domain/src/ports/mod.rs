//! Domain Port Interfaces
//!
//! Boundary contracts the validator consumes. The hosting module system
//! implements them; [`crate::catalog::ServiceCatalog`] is the in-tree
//! implementation backed by declared compiled units.
//!
//! - **InterfaceSource** - enumerates the interface universe of a compiled unit
//! - **TypeCatalog** - answers questions about declared types
//! - **BindingMetadata** - looks up the descriptor attached to an interface

use std::collections::BTreeSet;

use crate::binding::BindingDescriptor;
use crate::error::Result;
use crate::value_objects::{InterfaceDecl, ModuleGroup, QualifiedName, TypeDecl};

/// Enumerates all interface declarations defined in a compiled unit
///
/// The enumeration must be complete. Duplicates are not expected, but when
/// present each one is validated independently.
pub trait InterfaceSource: Send + Sync {
    /// Every interface declared by `unit`, or an error when the unit is unavailable
    fn interfaces(&self, unit: &str) -> Result<Vec<InterfaceDecl>>;

    /// Names of the compiled units belonging to a group
    fn unit_names(&self, group: ModuleGroup) -> Vec<String>;
}

/// Read-only view over declared types
pub trait TypeCatalog: Send + Sync {
    /// Declaration for a qualified name, if the type is known
    fn type_decl(&self, name: &QualifiedName) -> Option<&TypeDecl>;

    /// Every interface `name` implements, directly or through bases and
    /// interface inheritance
    fn implemented_interfaces(&self, name: &QualifiedName) -> BTreeSet<QualifiedName>;
}

/// Lookup of declarative binding metadata
pub trait BindingMetadata: Send + Sync {
    /// Descriptor attached to the interface, or `None` when absent
    fn descriptor_for(&self, interface: &InterfaceDecl) -> Option<&BindingDescriptor>;
}

//! Binding Table
//!
//! Explicit, statically populated map from interface name to descriptor.
//! Built once and then only read; it is the single source of truth the
//! validator and the locator consult.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value_objects::{InterfaceDecl, QualifiedName};

use super::descriptor::BindingDescriptor;

/// Interface name → binding descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    entries: BTreeMap<QualifiedName, BindingDescriptor>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a descriptor to an interface
    ///
    /// An interface carries at most one descriptor; a second attach fails.
    pub fn bind(
        &mut self,
        interface: impl Into<QualifiedName>,
        descriptor: BindingDescriptor,
    ) -> Result<()> {
        let interface = interface.into();
        if self.entries.contains_key(&interface) {
            return Err(Error::DuplicateBinding {
                interface: interface.to_string(),
            });
        }
        self.entries.insert(interface, descriptor);
        Ok(())
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

    /// Descriptor attached to a declaration, or `None` when absent
    pub fn descriptor_for(&self, interface: &InterfaceDecl) -> Option<&BindingDescriptor> {
        self.get(interface.name.as_str())
    }

    /// Descriptor by interface name
    pub fn get(&self, interface: &str) -> Option<&BindingDescriptor> {
        self.entries.get(interface)
    }

    pub fn contains(&self, interface: &str) -> bool {
        self.entries.contains_key(interface)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound interface names in sorted order
    pub fn interfaces(&self) -> impl Iterator<Item = &QualifiedName> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QualifiedName, &BindingDescriptor)> {
        self.entries.iter()
    }
}

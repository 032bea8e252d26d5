//! Service Locator
//!
//! Resolves an interface to the concrete type the binding table selects for a
//! platform. Resolution yields a type name only; constructing instances and
//! managing their lifetime belong to the host.

use tracing::trace;

use crate::binding::BindingTable;
use crate::error::{Error, Result};
use crate::value_objects::{Platform, QualifiedName};

/// Platform-fixed view over a binding table
#[derive(Debug, Clone, Copy)]
pub struct ServiceLocator<'a> {
    bindings: &'a BindingTable,
    platform: Option<Platform>,
}

impl<'a> ServiceLocator<'a> {
    /// Locator for the platform this binary was compiled for
    pub fn new(bindings: &'a BindingTable) -> Self {
        Self::for_platform(bindings, Platform::current())
    }

    /// Locator for an explicit platform (`None` = defaults only)
    pub fn for_platform(bindings: &'a BindingTable, platform: Option<Platform>) -> Self {
        Self { bindings, platform }
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Concrete type bound to `interface` on this locator's platform
    pub fn resolve(&self, interface: &str) -> Result<&'a QualifiedName> {
        let Some(descriptor) = self.bindings.get(interface) else {
            return Err(Error::NotRegistered {
                interface: interface.to_string(),
                available: self.bindings.interfaces().map(ToString::to_string).collect(),
            });
        };

        let resolved = descriptor
            .resolve(self.platform)
            .ok_or_else(|| Error::UnboundDefault {
                interface: interface.to_string(),
            })?;
        trace!(interface, implementation = %resolved, platform = ?self.platform, "Resolved binding");
        Ok(resolved)
    }
}

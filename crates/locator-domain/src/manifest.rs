//! Service Manifest
//!
//! JSON description of compiled units and their binding descriptors. This is
//! the explicit build-time artifact a host emits instead of relying on
//! runtime type introspection.
//!
//! A descriptor key set to `null` is a *null* slot; an omitted key is
//! *absent*. Both shapes are preserved so the validator can tell them apart.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::binding::{BindingDescriptor, SlotValue};
use crate::catalog::CompiledUnit;
use crate::catalog::ServiceCatalog;
use crate::error::{Error, Result};
use crate::value_objects::{QualifiedName, Slot};

/// Serialized binding descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub default: Option<Option<QualifiedName>>,
    #[serde(
        rename = "preferredOnWindows",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_on_windows: Option<Option<QualifiedName>>,
    #[serde(
        rename = "preferredOnMacOS",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_on_macos: Option<Option<QualifiedName>>,
    #[serde(
        rename = "preferredOnLinux",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_on_linux: Option<Option<QualifiedName>>,
}

/// Marks a key as present even when its value is `null`
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<QualifiedName>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<QualifiedName>::deserialize(deserializer).map(Some)
}

impl DescriptorRecord {
    pub fn to_descriptor(&self) -> BindingDescriptor {
        let mut descriptor = BindingDescriptor::without_default();
        descriptor.set(Slot::Default, SlotValue::from_presence(self.default.clone()));
        descriptor.set(
            Slot::PreferredOnWindows,
            SlotValue::from_presence(self.preferred_on_windows.clone()),
        );
        descriptor.set(
            Slot::PreferredOnMacOS,
            SlotValue::from_presence(self.preferred_on_macos.clone()),
        );
        descriptor.set(
            Slot::PreferredOnLinux,
            SlotValue::from_presence(self.preferred_on_linux.clone()),
        );
        descriptor
    }
}

/// Compiled units plus binding descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceManifest {
    pub units: Vec<CompiledUnit>,
    #[serde(default)]
    pub bindings: BTreeMap<QualifiedName, DescriptorRecord>,
}

impl ServiceManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)?;
        manifest.check()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            units = manifest.units.len(),
            bindings = manifest.bindings.len(),
            "Service manifest loaded"
        );
        Ok(manifest)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the catalog described by this manifest
    pub fn into_catalog(self) -> Result<ServiceCatalog> {
        let mut catalog = ServiceCatalog::new();
        for unit in self.units {
            catalog.add_unit(unit);
        }
        for (interface, record) in &self.bindings {
            catalog.bind(interface.clone(), record.to_descriptor())?;
        }
        Ok(catalog)
    }

    fn check(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for unit in &self.units {
            if unit.name.trim().is_empty() {
                return Err(Error::invalid_manifest("compiled unit with an empty name"));
            }
            if !seen.insert(unit.name.as_str()) {
                return Err(Error::invalid_manifest(format!(
                    "compiled unit '{}' declared twice",
                    unit.name
                )));
            }
        }
        Ok(())
    }
}

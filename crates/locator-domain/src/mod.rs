//! # Service Locator Domain
//!
//! Binding Descriptor Model for a cross-platform service locator. Every
//! service interface in a modular agent names the concrete type that
//! implements it by default and, optionally, the type preferred on Windows,
//! macOS or Linux.
//!
//! ## Architecture
//!
//! ```text
//! TypeDecl / CompiledUnit   ← declared universe (manifest, registrations, builder)
//!     │
//! BindingDescriptor         ← default + per-platform slots (absent / null / bound)
//!     │
//! BindingTable              ← interface name → descriptor, single source of truth
//!     │
//! ServiceCatalog            ← implements the ports the validator consumes
//!     │
//! ServiceLocator            ← platform-fixed resolution
//! ```
//!
//! ## Example
//!
//! ```rust
//! use locator_domain::binding::{BindingDescriptor, BindingTable};
//! use locator_domain::locator::ServiceLocator;
//! use locator_domain::value_objects::Platform;
//!
//! let table = BindingTable::new()
//!     .with_binding(
//!         "Agent.IProcessInvoker",
//!         BindingDescriptor::new("Agent.ProcessInvoker")
//!             .preferred_on(Platform::MacOS, "Agent.MacProcessInvoker"),
//!     )
//!     .unwrap();
//!
//! let locator = ServiceLocator::for_platform(&table, Some(Platform::MacOS));
//! assert_eq!(locator.resolve("Agent.IProcessInvoker").unwrap().as_str(), "Agent.MacProcessInvoker");
//! ```

/// Binding descriptors and the binding table
pub mod binding;
/// In-memory catalog of compiled units
pub mod catalog;
/// Error handling types
pub mod error;
/// Platform resolution
pub mod locator;
/// JSON service manifest
pub mod manifest;
/// Ports consumed by the validator
pub mod ports;
/// Link-time registration slices
pub mod registry;
/// Immutable value objects
pub mod value_objects;

pub use binding::{BindingDescriptor, BindingTable, SlotValue};
pub use catalog::{CompiledUnit, ServiceCatalog};
pub use error::{Error, Result};
pub use locator::ServiceLocator;
pub use manifest::{DescriptorRecord, ServiceManifest};
pub use ports::{BindingMetadata, InterfaceSource, TypeCatalog};
pub use value_objects::{
    InterfaceDecl, ModuleGroup, Platform, QualifiedName, Slot, TypeDecl, TypeKind,
};

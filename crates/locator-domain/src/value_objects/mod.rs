//! Domain Value Objects
//!
//! Immutable value objects describing declared types and the platform
//! dimension bindings are selected by.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`QualifiedName`] | Stable identifier of a declared type |
//! | [`TypeDecl`] | Type declared by a compiled unit |
//! | [`InterfaceDecl`] | Service contract subject to validation |
//! | [`ModuleGroup`] | Logical group (Agent, Common, Worker) |
//! | [`Platform`] | Operating system an override targets |
//! | [`Slot`] | Named binding descriptor slot |

/// Qualified type names
pub mod names;
/// Platforms and descriptor slots
pub mod platform;
/// Type and interface declarations
pub mod types;

pub use names::QualifiedName;
pub use platform::{Platform, Slot};
pub use types::{InterfaceDecl, ModuleGroup, TypeDecl, TypeKind};

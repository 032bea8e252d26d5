//! Binding Descriptor Model
//!
//! Descriptors record which concrete type implements an interface by default
//! and which type is preferred on Windows, macOS or Linux. The table maps each
//! interface to at most one descriptor.

pub mod descriptor;
pub mod table;

pub use descriptor::{BindingDescriptor, SlotValue};
pub use table::BindingTable;

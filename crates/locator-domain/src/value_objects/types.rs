//! Type and interface declarations
//!
//! Declarations are produced once, when a compiled unit is described, and are
//! never mutated afterwards. The registry observes them but does not own the
//! types they describe.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::names::QualifiedName;

/// Logical module group an interface belongs to
///
/// Groups only scope reporting and exemption lists; they carry no
/// validation semantics of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleGroup {
    Agent,
    Common,
    Worker,
}

impl ModuleGroup {
    /// All groups in reporting order
    pub const ALL: [ModuleGroup; 3] = [ModuleGroup::Agent, ModuleGroup::Common, ModuleGroup::Worker];

    /// Lowercase key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Common => "common",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for ModuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent => write!(f, "Agent"),
            Self::Common => write!(f, "Common"),
            Self::Worker => write!(f, "Worker"),
        }
    }
}

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Concrete, instantiable class
    Class,
    /// Class that cannot be instantiated directly
    AbstractClass,
    /// Class with no instances at all
    StaticClass,
    /// Abstract service contract
    Interface,
    /// Value type; not a class
    Struct,
}

impl TypeKind {
    /// Only plain classes can back a binding
    pub fn is_concrete_class(self) -> bool {
        self == Self::Class
    }

    /// Human-readable kind name for diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::AbstractClass => "abstract class",
            Self::StaticClass => "static class",
            Self::Interface => "interface",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A type declared by a compiled unit
///
/// For classes, `implements` lists directly implemented interfaces and `base`
/// the parent class. For interfaces, `implements` lists extended interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: QualifiedName,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<QualifiedName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<QualifiedName>,
    /// Member operations; informational only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl TypeDecl {
    /// Declare a type of the given kind
    pub fn new(name: impl Into<QualifiedName>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Declare a concrete class
    pub fn class(name: impl Into<QualifiedName>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Declare an interface
    pub fn interface(name: impl Into<QualifiedName>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Add a directly implemented (or extended) interface
    pub fn implementing(mut self, interface: impl Into<QualifiedName>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Set the base class
    pub fn with_base(mut self, base: impl Into<QualifiedName>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add a member operation
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }
}

/// Abstract service contract as seen by the validator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: QualifiedName,
    pub group: ModuleGroup,
    #[serde(default)]
    pub members: Vec<String>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<QualifiedName>, group: ModuleGroup) -> Self {
        Self {
            name: name.into(),
            group,
            members: Vec::new(),
        }
    }

    /// Build the interface view of an interface-kind declaration
    pub fn from_type(decl: &TypeDecl, group: ModuleGroup) -> Option<Self> {
        decl.is_interface().then(|| Self {
            name: decl.name.clone(),
            group,
            members: decl.members.clone(),
        })
    }
}

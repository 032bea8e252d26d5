//! Binding Descriptor
//!
//! Per-interface record of the default implementation and the optional
//! platform-specific overrides. Every slot is independently queryable and
//! distinguishes "never supplied" from "supplied without a type".

use serde::Serialize;

use crate::value_objects::{Platform, QualifiedName, Slot};

/// State of a single descriptor slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "type", rename_all = "lowercase")]
pub enum SlotValue {
    /// Key not supplied at all
    #[default]
    Absent,
    /// Key supplied with no type
    Null,
    /// Key supplied with a concrete type reference
    Bound(QualifiedName),
}

impl SlotValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The bound type, if any
    pub fn bound(&self) -> Option<&QualifiedName> {
        match self {
            Self::Bound(name) => Some(name),
            Self::Absent | Self::Null => None,
        }
    }

    /// Build from the doubled option used by serialized forms:
    /// `None` = absent, `Some(None)` = null, `Some(Some(t))` = bound
    pub fn from_presence(value: Option<Option<QualifiedName>>) -> Self {
        match value {
            None => Self::Absent,
            Some(None) => Self::Null,
            Some(Some(name)) => Self::Bound(name),
        }
    }
}

/// Default and platform-preferred implementations of one interface
///
/// ## Example
///
/// ```rust
/// use locator_domain::binding::BindingDescriptor;
/// use locator_domain::value_objects::Platform;
///
/// let descriptor = BindingDescriptor::new("Agent.Terminal")
///     .preferred_on(Platform::Windows, "Agent.WindowsTerminal");
///
/// assert_eq!(descriptor.resolve(Some(Platform::Windows)).unwrap().as_str(), "Agent.WindowsTerminal");
/// assert_eq!(descriptor.resolve(Some(Platform::Linux)).unwrap().as_str(), "Agent.Terminal");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindingDescriptor {
    default: SlotValue,
    preferred_on_windows: SlotValue,
    preferred_on_macos: SlotValue,
    preferred_on_linux: SlotValue,
}

impl BindingDescriptor {
    /// Descriptor with a bound default and no overrides
    pub fn new(default: impl Into<QualifiedName>) -> Self {
        Self {
            default: SlotValue::Bound(default.into()),
            ..Self::default()
        }
    }

    /// Descriptor whose default key is present but carries no type
    pub fn with_null_default() -> Self {
        Self {
            default: SlotValue::Null,
            ..Self::default()
        }
    }

    /// Descriptor whose default key was never supplied
    pub fn without_default() -> Self {
        Self::default()
    }

    /// Bind a platform override
    pub fn preferred_on(mut self, platform: Platform, implementation: impl Into<QualifiedName>) -> Self {
        self.set(platform.slot(), SlotValue::Bound(implementation.into()));
        self
    }

    /// Declare a platform override key without a type
    pub fn with_null_override(mut self, platform: Platform) -> Self {
        self.set(platform.slot(), SlotValue::Null);
        self
    }

    /// Overwrite any slot
    pub fn set(&mut self, slot: Slot, value: SlotValue) {
        *self.slot_mut(slot) = value;
    }

    /// Query a slot
    pub fn slot(&self, slot: Slot) -> &SlotValue {
        match slot {
            Slot::Default => &self.default,
            Slot::PreferredOnWindows => &self.preferred_on_windows,
            Slot::PreferredOnMacOS => &self.preferred_on_macos,
            Slot::PreferredOnLinux => &self.preferred_on_linux,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotValue {
        match slot {
            Slot::Default => &mut self.default,
            Slot::PreferredOnWindows => &mut self.preferred_on_windows,
            Slot::PreferredOnMacOS => &mut self.preferred_on_macos,
            Slot::PreferredOnLinux => &mut self.preferred_on_linux,
        }
    }

    pub fn default_type(&self) -> Option<&QualifiedName> {
        self.default.bound()
    }

    pub fn preferred_on_windows(&self) -> Option<&QualifiedName> {
        self.preferred_on_windows.bound()
    }

    pub fn preferred_on_macos(&self) -> Option<&QualifiedName> {
        self.preferred_on_macos.bound()
    }

    pub fn preferred_on_linux(&self) -> Option<&QualifiedName> {
        self.preferred_on_linux.bound()
    }

    /// Slots whose key was supplied, in inspection order
    pub fn present_slots(&self) -> impl Iterator<Item = (Slot, &SlotValue)> {
        Slot::ALL
            .into_iter()
            .map(|slot| (slot, self.slot(slot)))
            .filter(|(_, value)| !value.is_absent())
    }

    /// Concrete type for a platform
    ///
    /// A bound override wins; an absent or null override falls back to the
    /// default. `None` when the default itself is not bound.
    pub fn resolve(&self, platform: Option<Platform>) -> Option<&QualifiedName> {
        platform
            .and_then(|p| self.slot(p.slot()).bound())
            .or_else(|| self.default.bound())
    }
}

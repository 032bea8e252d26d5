//! Host platforms and descriptor slots

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system a binding override can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOS,
    Linux,
}

impl Platform {
    /// All supported platforms in slot order
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOS, Platform::Linux];

    /// Platform this binary was compiled for
    ///
    /// Returns `None` on operating systems without an override slot;
    /// resolution then always uses the default binding.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOS)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }

    /// Descriptor slot holding this platform's override
    pub fn slot(self) -> Slot {
        match self {
            Self::Windows => Slot::PreferredOnWindows,
            Self::MacOS => Slot::PreferredOnMacOS,
            Self::Linux => Slot::PreferredOnLinux,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::MacOS => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
        }
    }
}

/// Named slot of a binding descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "preferredOnWindows")]
    PreferredOnWindows,
    #[serde(rename = "preferredOnMacOS")]
    PreferredOnMacOS,
    #[serde(rename = "preferredOnLinux")]
    PreferredOnLinux,
}

impl Slot {
    /// Fixed inspection order
    pub const ALL: [Slot; 4] = [
        Slot::Default,
        Slot::PreferredOnWindows,
        Slot::PreferredOnMacOS,
        Slot::PreferredOnLinux,
    ];

    /// Name used in manifests and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PreferredOnWindows => "preferredOnWindows",
            Self::PreferredOnMacOS => "preferredOnMacOS",
            Self::PreferredOnLinux => "preferredOnLinux",
        }
    }

    /// Platform targeted by an override slot; `None` for `default`
    pub fn platform(self) -> Option<Platform> {
        match self {
            Self::Default => None,
            Self::PreferredOnWindows => Some(Platform::Windows),
            Self::PreferredOnMacOS => Some(Platform::MacOS),
            Self::PreferredOnLinux => Some(Platform::Linux),
        }
    }

    /// Whether the slot must always be bound
    pub fn is_mandatory(self) -> bool {
        self == Self::Default
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

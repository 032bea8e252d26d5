//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service locator domain
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (reading manifests)
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Interface has no entry in the binding table
    #[error("No binding registered for interface '{interface}'. Registered interfaces: {available:?}")]
    NotRegistered {
        /// The interface that was looked up
        interface: String,
        /// Interfaces the table does know about
        available: Vec<String>,
    },

    /// Interface is registered but neither the platform override nor the default is bound
    #[error("Interface '{interface}' has no bound default implementation")]
    UnboundDefault {
        /// The interface that could not be resolved
        interface: String,
    },

    /// Compiled unit is not part of the catalog
    #[error("Unknown compiled unit '{unit}'")]
    UnknownUnit {
        /// Name of the requested unit
        unit: String,
    },

    /// Manifest content is structurally unusable
    #[error("Invalid service manifest: {message}")]
    InvalidManifest {
        /// Description of the problem
        message: String,
    },

    /// Interface received two binding descriptors
    #[error("Duplicate binding descriptor for interface '{interface}'")]
    DuplicateBinding {
        /// The interface bound twice
        interface: String,
    },
}

impl Error {
    /// Create an invalid manifest error
    pub fn invalid_manifest<S: Into<String>>(message: S) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }

    /// Create an unknown unit error
    pub fn unknown_unit<S: Into<String>>(unit: S) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }
}

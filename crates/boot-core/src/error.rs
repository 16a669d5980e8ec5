//! Error types for boot-core

use std::path::PathBuf;

/// Result type for boot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error type used at the host-capability seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur in boot-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest finalized or serialized without a version
    #[error("manifest '{name}' has no version set")]
    MissingVersion { name: String },

    /// Catalog alias or coordinate empty on a builder
    #[error("manifest '{name}' has an empty catalog {part}")]
    EmptyCatalogField { name: String, part: &'static str },

    /// Dependency coordinate not in `group:artifact` form
    #[error("invalid coordinate '{value}': expected group:artifact")]
    InvalidCoordinate { value: String },

    /// Import reference not in `group:artifact[:version]` form
    #[error("invalid import reference '{value}': expected group:artifact[:version]")]
    InvalidImportReference { value: String },

    /// Resolved artifact vanished between resolution and read
    #[error("manifest import failed: resolved artifact {path:?} does not exist")]
    ManifestFileMissing { path: PathBuf },

    /// The host resolution engine failed
    #[error("resolution of '{coordinate}' in context '{context}' failed: {source}")]
    Resolution {
        coordinate: String,
        context: String,
        #[source]
        source: BoxError,
    },

    /// Wire format error from boot-wire
    #[error(transparent)]
    Wire(#[from] boot_wire::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

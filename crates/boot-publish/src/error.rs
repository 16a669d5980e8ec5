//! Error types for boot-publish

use boot_core::BoxError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Publishing requires a project group for the artifact coordinate
    #[error("project group required to publish manifest '{manifest}'")]
    MissingGroup { manifest: String },

    /// The host publishing mechanism failed
    #[error("publication of manifest '{manifest}' failed: {source}")]
    Publish {
        manifest: String,
        #[source]
        source: BoxError,
    },

    /// Core manifest error
    #[error(transparent)]
    Core(#[from] boot_core::Error),

    /// Wire format error
    #[error(transparent)]
    Wire(#[from] boot_wire::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Manifest publishing and repository routing for Bootstrap Manager
//!
//! Serializes finalized manifests into versioned, category-tagged artifacts
//! and gates publish steps on release/snapshot version classification.

pub mod error;
pub mod publisher;
pub mod router;

pub use error::{Error, Result};
pub use publisher::{
    ArtifactPublisher, MANIFEST_EXTENSION, ManifestArtifact, ManifestPublisher, ProjectIdentity,
};
pub use router::{
    Credentials, RELEASES_REPO_NAME, RepositoryConfig, RepositoryRouter, RepositoryTarget,
    SNAPSHOTS_REPO_NAME, repository_url,
};

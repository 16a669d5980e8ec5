//! Serialization and publication of finalized manifests.
//!
//! The publisher writes a manifest to `<name>.properties` and hands it to
//! the host's publishing mechanism tagged with the `manifest` category, so
//! the artifact is only consumable by other instances of this exchange
//! protocol and never by ordinary dependency resolution.

use std::fs;
use std::path::{Path, PathBuf};

use boot_core::{BoxError, Coordinate, MANIFEST_CATEGORY, Manifest};
use tracing::info;

use crate::error::{Error, Result};

/// File extension of published manifest artifacts.
pub const MANIFEST_EXTENSION: &str = "properties";

/// Identity of the producing build.
///
/// The group anchors the artifact coordinate; the version is the enclosing
/// build's own release version, which manifest declarations default to.
#[derive(Debug, Clone, Default)]
pub struct ProjectIdentity {
    pub group: String,
    pub version: String,
}

impl ProjectIdentity {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

/// A manifest rendered to disk and ready for publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestArtifact {
    /// `group:artifact` slot of the artifact; the artifact name is the
    /// manifest name.
    pub coordinate: Coordinate,
    pub version: String,
    pub file: PathBuf,
    /// Always [`MANIFEST_CATEGORY`].
    pub category: String,
    /// Always [`MANIFEST_EXTENSION`].
    pub extension: String,
}

/// Host capability that exposes a file as a consumable, versioned artifact.
pub trait ArtifactPublisher {
    fn publish(&mut self, artifact: &ManifestArtifact) -> std::result::Result<(), BoxError>;
}

/// Writes manifests to an output directory and publishes them.
#[derive(Debug, Clone)]
pub struct ManifestPublisher {
    output_dir: PathBuf,
}

impl ManifestPublisher {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render a manifest to wire text.
    ///
    /// A [`Manifest`] always carries a non-empty version, so this cannot
    /// produce a versionless artifact.
    pub fn serialize(manifest: &Manifest) -> Result<String> {
        Ok(boot_wire::encode(&manifest.payload())?)
    }

    /// Write the manifest to `<name>.properties` under the output directory.
    pub fn write(&self, manifest: &Manifest) -> Result<PathBuf> {
        let text = Self::serialize(manifest)?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(format!("{}.{}", manifest.name(), MANIFEST_EXTENSION));

        info!(
            manifest = manifest.name(),
            path = %path.display(),
            version = manifest.version(),
            plugins = manifest.plugin_ids().len(),
            catalogs = manifest.catalogs().len(),
            "writing manifest"
        );
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Write the manifest and hand it to the host's publishing mechanism.
    ///
    /// Fails before any file or network operation when the project has no
    /// group: without one there is no coordinate to publish under.
    pub fn publish(
        &self,
        manifest: &Manifest,
        identity: &ProjectIdentity,
        publisher: &mut dyn ArtifactPublisher,
    ) -> Result<ManifestArtifact> {
        if identity.group.is_empty() {
            return Err(Error::MissingGroup {
                manifest: manifest.name().to_string(),
            });
        }

        let file = self.write(manifest)?;
        let artifact = ManifestArtifact {
            coordinate: Coordinate::new(&identity.group, manifest.name()),
            version: manifest.version().to_string(),
            file,
            category: MANIFEST_CATEGORY.to_string(),
            extension: MANIFEST_EXTENSION.to_string(),
        };

        publisher
            .publish(&artifact)
            .map_err(|source| Error::Publish {
                manifest: manifest.name().to_string(),
                source,
            })?;
        info!(
            coordinate = %artifact.coordinate,
            version = %artifact.version,
            "published manifest"
        );
        Ok(artifact)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

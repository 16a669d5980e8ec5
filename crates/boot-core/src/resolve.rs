//! Import of external manifests through the host's dependency graph.
//!
//! Each import runs in its own resolution context: an isolated, lockable
//! scope tagged with the `manifest` category so that locking metadata for
//! manifest artifacts never interferes with the build's main dependency
//! graph, and a failure in one import cannot poison another.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use crate::MANIFEST_CATEGORY;
use crate::error::{BoxError, Error, Result};
use crate::manifest::ManifestBuilder;

/// A `group:artifact` dependency coordinate, without version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.split_once(':') {
            Some((group, artifact))
                if !group.is_empty() && !artifact.is_empty() && !artifact.contains(':') =>
            {
                Ok(Self::new(group, artifact))
            }
            _ => Err(Error::InvalidCoordinate {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// One isolated resolution to perform.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Name of the isolated resolution scope, derived from the manifest name.
    pub context_name: String,
    pub coordinate: Coordinate,
    /// Optional refinement of the version to resolve, passed through to the
    /// host's resolver as-is.
    pub version_constraint: Option<String>,
    /// Artifact category; always [`MANIFEST_CATEGORY`] for imports so the
    /// request can never match ordinary binary dependencies.
    pub category: String,
    /// Whether the context participates in the host's version locking.
    pub locked: bool,
}

/// Host capability that resolves a request to concrete artifact files.
///
/// Implementations delegate to the host build system's dependency engine;
/// the call may block on network I/O and inherits the host's cancellation
/// and timeout semantics.
pub trait ResolutionServices {
    fn resolve(&self, request: &ResolutionRequest) -> std::result::Result<Vec<PathBuf>, BoxError>;
}

impl ManifestBuilder {
    /// Import an external manifest into this builder.
    ///
    /// Resolves `coordinate` (optionally refined by `version_constraint`)
    /// through the host, decodes every resolved artifact, and merges them in
    /// resolution order: later files' version and description win, plugin
    /// ids and catalogs are unioned. All files are decoded before anything
    /// is merged, so a failed import leaves the builder untouched.
    ///
    /// A resolved file missing from disk is a non-recoverable resolution
    /// inconsistency, not a normal error path.
    pub fn import(
        &mut self,
        services: &dyn ResolutionServices,
        coordinate: &str,
        version_constraint: Option<&str>,
    ) -> Result<()> {
        let coordinate: Coordinate = coordinate.parse()?;
        let request = ResolutionRequest {
            context_name: format!("incoming-manifest-{}", self.name()),
            coordinate: coordinate.clone(),
            version_constraint: version_constraint.map(str::to_string),
            category: MANIFEST_CATEGORY.to_string(),
            locked: true,
        };

        debug!(
            manifest = self.name(),
            coordinate = %request.coordinate,
            context = %request.context_name,
            "resolving manifest import"
        );
        let files = services.resolve(&request).map_err(|source| Error::Resolution {
            coordinate: coordinate.to_string(),
            context: request.context_name.clone(),
            source,
        })?;

        let mut payloads = Vec::with_capacity(files.len());
        for file in &files {
            if !file.exists() {
                return Err(Error::ManifestFileMissing { path: file.clone() });
            }
            let text = fs::read_to_string(file)?;
            payloads.push(boot_wire::decode(&text)?);
        }

        for payload in &payloads {
            self.merge(payload);
        }
        info!(
            manifest = self.name(),
            coordinate = %coordinate,
            files = files.len(),
            "imported manifest"
        );
        Ok(())
    }
}

//! Directory-backed resolution services.

use std::path::PathBuf;

use boot_core::{BoxError, ResolutionRequest, ResolutionServices};

/// Resolves coordinates against a directory laid out as
/// `<root>/<group>/<artifact>.properties`.
///
/// Version constraints are accepted but ignored; the directory stands in
/// for a repository that always serves its current content. The resolved
/// path is returned without an existence check so callers' fail-fast
/// handling of missing files stays observable.
#[derive(Debug, Clone)]
pub struct DirResolutionServices {
    root: PathBuf,
}

impl DirResolutionServices {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a coordinate resolves to.
    pub fn artifact_path(&self, group: &str, artifact: &str) -> PathBuf {
        self.root
            .join(group)
            .join(format!("{artifact}.properties"))
    }
}

impl ResolutionServices for DirResolutionServices {
    fn resolve(&self, request: &ResolutionRequest) -> Result<Vec<PathBuf>, BoxError> {
        Ok(vec![self.artifact_path(
            &request.coordinate.group,
            &request.coordinate.artifact,
        )])
    }
}

//! Recording implementations of the host capability traits.

use boot_core::{BoxError, SettingsHost};
use boot_publish::{ArtifactPublisher, ManifestArtifact};

/// Captures plugin and catalog registrations for assertions.
#[derive(Debug, Default)]
pub struct RecordingSettingsHost {
    /// `(plugin id, version)` pairs in registration order.
    pub plugins: Vec<(String, String)>,
    /// `(alias, coordinate:version)` pairs in registration order.
    pub catalogs: Vec<(String, String)>,
}

impl RecordingSettingsHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plugin_version(&self, id: &str) -> Option<&str> {
        self.plugins
            .iter()
            .rev()
            .find(|(plugin, _)| plugin == id)
            .map(|(_, version)| version.as_str())
    }

    pub fn catalog_coordinate(&self, alias: &str) -> Option<&str> {
        self.catalogs
            .iter()
            .rev()
            .find(|(name, _)| name == alias)
            .map(|(_, coordinate)| coordinate.as_str())
    }
}

impl SettingsHost for RecordingSettingsHost {
    fn register_plugin(&mut self, id: &str, version: &str) {
        self.plugins.push((id.to_string(), version.to_string()));
    }

    fn register_catalog(&mut self, alias: &str, coordinate: &str) {
        self.catalogs.push((alias.to_string(), coordinate.to_string()));
    }
}

/// Captures published artifacts, optionally failing every call.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    pub artifacts: Vec<ManifestArtifact>,
    pub failure: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            artifacts: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl ArtifactPublisher for RecordingPublisher {
    fn publish(&mut self, artifact: &ManifestArtifact) -> Result<(), BoxError> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

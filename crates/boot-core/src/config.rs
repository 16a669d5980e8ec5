//! Declarative exchange configuration.
//!
//! The root configuration object for one build invocation. It is parsed
//! once from TOML, owned by the invoking build, and passed by reference to
//! the components that need it — there is no ambient global state.
//!
//! ```toml
//! [project]
//! group = "com.example"
//! version = "1.2.3"
//!
//! [manifests.platform]
//! description = "Example platform"
//! plugins = ["com.example.plugin"]
//! imports = ["com.example:base-manifest:1.+"]
//!
//! [manifests.platform.catalogs]
//! libs = "com.example:catalog"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::container::ManifestSet;
use crate::error::{Error, Result};
use crate::resolve::ResolutionServices;

/// Root configuration for one build invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeConfig {
    /// Identity of the enclosing build.
    #[serde(default)]
    pub project: ProjectSection,

    /// Manifest declarations keyed by name.
    #[serde(default)]
    pub manifests: BTreeMap<String, ManifestSection>,
}

/// The enclosing build's group and version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
}

/// One declared manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestSection {
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit version; defaults to the project version when absent.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Alias → `group:artifact` coordinate.
    #[serde(default)]
    pub catalogs: BTreeMap<String, String>,
    /// External manifests to import, as `group:artifact[:version]`.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl ExchangeConfig {
    /// Parse a configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Build the manifest container this configuration declares.
    ///
    /// For each manifest the imports run first, in declaration order, then
    /// the locally declared fields apply on top — a locally declared
    /// version or description always wins over imported ones. Manifests
    /// without a version fall back to the project version.
    pub fn build_manifests(&self, services: &dyn ResolutionServices) -> Result<ManifestSet> {
        let mut set = ManifestSet::new();

        for (name, section) in &self.manifests {
            debug!(manifest = %name, "configuring manifest");
            let builder = set.create(name);

            for reference in &section.imports {
                let (coordinate, constraint) = split_import_reference(reference)?;
                builder.import(services, coordinate, constraint)?;
            }

            if let Some(description) = &section.description {
                builder.description(description);
            }
            if let Some(version) = &section.version {
                builder.version(version);
            }
            for plugin in &section.plugins {
                builder.plugin(plugin);
            }
            for (alias, coordinate) in &section.catalogs {
                builder.catalog(alias, coordinate);
            }

            if builder.current_version().is_none_or(str::is_empty) && !self.project.version.is_empty()
            {
                builder.version(&self.project.version);
            }
        }

        Ok(set)
    }
}

/// Split `group:artifact[:version]` into a coordinate and optional
/// version constraint.
fn split_import_reference(reference: &str) -> Result<(&str, Option<&str>)> {
    let invalid = || Error::InvalidImportReference {
        value: reference.to_string(),
    };

    let mut segments = reference.splitn(3, ':');
    let group = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let artifact = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let constraint = segments.next().filter(|s| !s.is_empty());

    let coordinate_len = group.len() + 1 + artifact.len();
    Ok((&reference[..coordinate_len], constraint))
}

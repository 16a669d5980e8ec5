//! Manifest accumulation and finalization.
//!
//! A [`ManifestBuilder`] accumulates plugin ids, catalog aliases, a version
//! constraint, and a description for one named manifest during the
//! configuration phase. [`ManifestBuilder::finish`] produces the immutable
//! [`Manifest`] handed to the publisher and to settings-time injection.

use std::collections::BTreeMap;

use boot_wire::ManifestPayload;

use crate::error::{Error, Result};

/// Mutable accumulator for one named manifest.
///
/// All operations are pure accumulation: `version` and `description` are
/// last-write-wins, plugin ids append, and catalog aliases overwrite on
/// collision. The name is the artifact's logical slot and is never
/// serialized.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    name: String,
    description: Option<String>,
    version: Option<String>,
    plugin_ids: Vec<String>,
    catalogs: BTreeMap<String, String>,
}

impl ManifestBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the description; last write wins.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = Some(text.into());
        self
    }

    /// Set the version constraint; last write wins.
    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Append a plugin id.
    ///
    /// Duplicates are permitted; serialization sorts and consumers register
    /// idempotently, so repeats are harmless.
    pub fn plugin(&mut self, id: impl Into<String>) -> &mut Self {
        self.plugin_ids.push(id.into());
        self
    }

    /// Map an alias to a `group:artifact` coordinate, overwriting any
    /// previous mapping for the same alias.
    pub fn catalog(&mut self, alias: impl Into<String>, coordinate: impl Into<String>) -> &mut Self {
        self.catalogs.insert(alias.into(), coordinate.into());
        self
    }

    /// Merge decoded wire fields into this builder.
    ///
    /// Fields present in the payload overwrite `description` and `version`;
    /// plugin ids and catalogs are unioned with the payload's aliases
    /// winning on collision.
    pub fn merge(&mut self, payload: &ManifestPayload) -> &mut Self {
        if let Some(description) = &payload.description {
            self.description = Some(description.clone());
        }
        if let Some(version) = &payload.version {
            self.version = Some(version.clone());
        }
        self.plugin_ids.extend(payload.plugin_ids.iter().cloned());
        for (alias, coordinate) in &payload.catalogs {
            self.catalogs.insert(alias.clone(), coordinate.clone());
        }
        self
    }

    pub fn current_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn plugin_ids(&self) -> &[String] {
        &self.plugin_ids
    }

    pub fn catalogs(&self) -> &BTreeMap<String, String> {
        &self.catalogs
    }

    /// Finalize into an immutable [`Manifest`].
    ///
    /// Fails when the version is unset or empty, or when a catalog entry
    /// carries an empty alias or coordinate; both are configuration errors
    /// surfaced before any artifact is written.
    pub fn finish(&self) -> Result<Manifest> {
        let version = self
            .version
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingVersion {
                name: self.name.clone(),
            })?;

        for (alias, coordinate) in &self.catalogs {
            let part = if alias.is_empty() {
                Some("alias")
            } else if coordinate.is_empty() {
                Some("coordinate")
            } else {
                None
            };
            if let Some(part) = part {
                return Err(Error::EmptyCatalogField {
                    name: self.name.clone(),
                    part,
                });
            }
        }

        Ok(Manifest {
            name: self.name.clone(),
            description: self.description.clone().filter(|d| !d.is_empty()),
            version: version.to_string(),
            plugin_ids: self.plugin_ids.clone(),
            catalogs: self.catalogs.clone(),
        })
    }
}

/// Finalized, read-only manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    name: String,
    description: Option<String>,
    version: String,
    plugin_ids: Vec<String>,
    catalogs: BTreeMap<String, String>,
}

impl Manifest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The version stamped on every plugin id and catalog coordinate.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn plugin_ids(&self) -> &[String] {
        &self.plugin_ids
    }

    pub fn catalogs(&self) -> &BTreeMap<String, String> {
        &self.catalogs
    }

    /// Wire-level view of this manifest for encoding.
    pub fn payload(&self) -> ManifestPayload {
        ManifestPayload {
            plugin_ids: self.plugin_ids.clone(),
            catalogs: self.catalogs.clone(),
            version: Some(self.version.clone()),
            description: self.description.clone(),
        }
    }
}

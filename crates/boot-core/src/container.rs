//! Named container of manifest builders.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::manifest::{Manifest, ManifestBuilder};

/// Container of manifest builders keyed by name.
///
/// Each named manifest is an independent accumulator; builders for
/// different names share no state. One container is constructed per build
/// invocation and passed by reference to whatever configures it.
#[derive(Debug, Clone, Default)]
pub struct ManifestSet {
    manifests: BTreeMap<String, ManifestBuilder>,
}

impl ManifestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the builder for `name`, creating it when absent.
    pub fn create(&mut self, name: &str) -> &mut ManifestBuilder {
        self.manifests
            .entry(name.to_string())
            .or_insert_with(|| ManifestBuilder::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&ManifestBuilder> {
        self.manifests.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ManifestBuilder> {
        self.manifests.get_mut(name)
    }

    /// All manifest names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.manifests.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestBuilder> {
        self.manifests.values()
    }

    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Finalize every builder, in name order.
    pub fn finish_all(&self) -> Result<Vec<Manifest>> {
        self.manifests.values().map(ManifestBuilder::finish).collect()
    }
}

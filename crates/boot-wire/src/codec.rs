//! Encoding and decoding of the manifest artifact keys.
//!
//! A manifest artifact carries at most four keys: `pluginIds` and
//! `catalogIds` hold `,`-joined entries, `version` holds the literal
//! version-constraint string, and `description` is omitted entirely when
//! empty. Entries are sorted on write so the artifact is reproducible.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::properties;

pub const KEY_PLUGIN_IDS: &str = "pluginIds";
pub const KEY_CATALOG_IDS: &str = "catalogIds";
pub const KEY_VERSION: &str = "version";
pub const KEY_DESCRIPTION: &str = "description";

/// Raw manifest fields as they travel over the wire.
///
/// `version` is optional here because a decoded artifact may lack the key;
/// whether that is fatal is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPayload {
    pub plugin_ids: Vec<String>,
    pub catalogs: BTreeMap<String, String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Encode a payload as deterministic wire text.
///
/// Plugin ids are sorted lexicographically, catalog entries are rendered as
/// `alias=coordinate` sorted by alias. An unset or empty version is a
/// configuration error: the artifact always carries the `version` key.
pub fn encode(payload: &ManifestPayload) -> Result<String> {
    let version = payload
        .version
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingVersion)?;

    let mut plugins: Vec<&str> = payload.plugin_ids.iter().map(String::as_str).collect();
    plugins.sort_unstable();

    let catalogs: Vec<String> = payload
        .catalogs
        .iter()
        .map(|(alias, coordinate)| format!("{alias}={coordinate}"))
        .collect();

    let mut entries = BTreeMap::new();
    entries.insert(KEY_CATALOG_IDS.to_string(), catalogs.join(","));
    entries.insert(KEY_PLUGIN_IDS.to_string(), plugins.join(","));
    entries.insert(KEY_VERSION.to_string(), version.to_string());
    if let Some(description) = payload.description.as_deref().filter(|d| !d.is_empty()) {
        entries.insert(KEY_DESCRIPTION.to_string(), description.to_string());
    }

    Ok(properties::render(&entries))
}

/// Decode wire text into raw manifest fields.
///
/// List entries are trimmed and empty segments dropped. Each catalog entry
/// must contain exactly one `=` with a non-empty alias and coordinate; a
/// missing `version` key decodes as `None`.
pub fn decode(text: &str) -> Result<ManifestPayload> {
    let entries = properties::parse(text)?;

    let mut catalogs = BTreeMap::new();
    for entry in split_list(entries.get(KEY_CATALOG_IDS)) {
        let (alias, coordinate) = split_pair(&entry)?;
        catalogs.insert(alias, coordinate);
    }

    Ok(ManifestPayload {
        plugin_ids: split_list(entries.get(KEY_PLUGIN_IDS)),
        catalogs,
        version: entries.get(KEY_VERSION).cloned(),
        description: entries.get(KEY_DESCRIPTION).cloned(),
    })
}

fn split_list(value: Option<&String>) -> Vec<String> {
    value
        .map(String::as_str)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_pair(entry: &str) -> Result<(String, String)> {
    let malformed = || Error::MalformedCatalogEntry {
        entry: entry.to_string(),
    };

    let Some((alias, coordinate)) = entry.split_once('=') else {
        return Err(malformed());
    };
    if coordinate.contains('=') {
        return Err(malformed());
    }

    let alias = alias.trim();
    let coordinate = coordinate.trim();
    if alias.is_empty() {
        return Err(Error::EmptyCatalogField {
            entry: entry.to_string(),
            part: "alias",
        });
    }
    if coordinate.is_empty() {
        return Err(Error::EmptyCatalogField {
            entry: entry.to_string(),
            part: "coordinate",
        });
    }

    Ok((alias.to_string(), coordinate.to_string()))
}

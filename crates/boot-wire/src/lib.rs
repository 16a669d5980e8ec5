//! Manifest wire format for Bootstrap Manager
//!
//! Serializes and deserializes the flat `key=value` text artifact exchanged
//! between producing and consuming builds. Output is deterministic so that
//! the same logical manifest always produces byte-identical artifacts.

pub mod codec;
pub mod error;
pub mod properties;

pub use codec::{
    KEY_CATALOG_IDS, KEY_DESCRIPTION, KEY_PLUGIN_IDS, KEY_VERSION, ManifestPayload, decode, encode,
};
pub use error::{Error, Result};

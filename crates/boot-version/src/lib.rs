//! Version-string classification for Bootstrap Manager
//!
//! Parses the structured release/pre-release version strings produced by the
//! release tooling and classifies them for release-vs-snapshot routing.

pub mod info;

pub use info::{Significance, VersionInfo};

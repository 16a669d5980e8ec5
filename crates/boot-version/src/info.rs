//! Parsing and classification of version strings.
//!
//! The accepted grammar is fixed by the release tooling that produces the
//! strings; any drift here is a breaking change:
//!
//! ```text
//! <major>.<minor>[.<patch>]
//! [ -<type>.<iteration> [(.|-)(uncommitted|dirty)] [+[<feature>.]<hash>] ]
//! ```
//!
//! A bare `major.minor[.patch]` classifies as `final`. Input that does not
//! match the grammar as a whole yields `None` — callers treat that as
//! "cannot classify" and pick a safe default, typically skipping a gated
//! publish step.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        # base version
        (?P<major>\d+)\.(?P<minor>\d+)(?:\.(?P<patch>\d+))?
        (?:
            # -rc.N and similar
            -(?P<type>dev|milestone|alpha|beta|rc)\.(?P<iteration>\d+)
            # dirty repo marker
            (?:[.-](?P<dirty>uncommitted|dirty))?
            # metadata block
            (?:\+(?P<metadata>
                (?:(?P<feature>[\w.]+)\.)?  # branch marker
                (?P<hash>[0-9a-fA-F]+)      # commit hash
            ))?
        )?
        $",
    )
    .unwrap()
});

/// Pre-release significance of a version, `Final` when no tag is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Final,
    Rc,
    Beta,
    Alpha,
    Dev,
    Milestone,
}

impl Significance {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rc" => Some(Self::Rc),
            "beta" => Some(Self::Beta),
            "alpha" => Some(Self::Alpha),
            "dev" => Some(Self::Dev),
            "milestone" => Some(Self::Milestone),
            _ => None,
        }
    }

    /// The tag as it appears in a version string (`final` for untagged).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Rc => "rc",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
            Self::Dev => "dev",
            Self::Milestone => "milestone",
        }
    }

    /// Whether this significance routes to the releases repository.
    ///
    /// Exactly `final`, `rc`, `beta`, and `alpha` are release-like; `dev`
    /// and `milestone` are grammatically valid but never classify as a
    /// release.
    pub fn is_release(&self) -> bool {
        matches!(self, Self::Final | Self::Rc | Self::Beta | Self::Alpha)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured view of one version string.
///
/// Constructed fresh from every string queried; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    /// Absent when the string carries only `major.minor`, never zero-filled.
    pub patch: Option<u32>,
    pub significant: Significance,
    /// Present exactly when a pre-release tag is present.
    pub iteration: Option<u32>,
    pub dirty: bool,
    pub metadata: Option<String>,
    pub feature: Option<String>,
    pub hash: Option<String>,
}

impl VersionInfo {
    /// Parse a version string against the full grammar.
    ///
    /// The match is anchored start-to-end; partial matches yield `None`.
    pub fn parse(version: &str) -> Option<Self> {
        let caps = VERSION_PATTERN.captures(version)?;

        let int = |name: &str| caps.name(name).map(|m| m.as_str().parse::<u32>());
        let text = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        let significant = match caps.name("type") {
            Some(tag) => Significance::from_tag(tag.as_str())?,
            None => Significance::Final,
        };

        Some(Self {
            major: int("major")?.ok()?,
            minor: int("minor")?.ok()?,
            patch: int("patch").transpose().ok()?,
            significant,
            iteration: int("iteration").transpose().ok()?,
            dirty: caps.name("dirty").is_some(),
            metadata: text("metadata"),
            feature: text("feature"),
            hash: text("hash"),
        })
    }

    /// Whether this version routes to the releases repository.
    pub fn is_release(&self) -> bool {
        self.significant.is_release()
    }
}

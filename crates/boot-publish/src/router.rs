//! Release/snapshot repository routing.
//!
//! Release-like versions route to the releases repository, everything else
//! to snapshots. A version that fails classification gates every publish
//! step off with a warning; it is never an error.

use boot_version::VersionInfo;
use serde::Deserialize;
use tracing::warn;

pub const RELEASES_REPO_NAME: &str = "releases";
pub const SNAPSHOTS_REPO_NAME: &str = "snapshots";

/// Basic-auth credentials for a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One publish target repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

/// Build a repository URL from a base URL and a path segment.
pub fn repository_url(base_url: &str, repo_path: &str) -> String {
    format!("{}/repository/{}", base_url.trim_end_matches('/'), repo_path)
}

/// Which repository a version routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryTarget {
    Releases,
    Snapshots,
}

impl RepositoryTarget {
    /// Classify a version string, `None` when it does not match the grammar.
    pub fn for_version(version: &str) -> Option<Self> {
        VersionInfo::parse(version).map(|info| {
            if info.is_release() {
                Self::Releases
            } else {
                Self::Snapshots
            }
        })
    }
}

/// Routes publish steps to the releases or snapshots repository.
#[derive(Debug, Clone)]
pub struct RepositoryRouter {
    releases: RepositoryConfig,
    snapshots: RepositoryConfig,
}

impl RepositoryRouter {
    pub fn new(releases: RepositoryConfig, snapshots: RepositoryConfig) -> Self {
        Self {
            releases,
            snapshots,
        }
    }

    /// Router with the default repository names under a base URL.
    pub fn from_base_url(base_url: &str) -> Self {
        Self::new(
            RepositoryConfig {
                name: RELEASES_REPO_NAME.to_string(),
                url: repository_url(base_url, RELEASES_REPO_NAME),
                credentials: None,
            },
            RepositoryConfig {
                name: SNAPSHOTS_REPO_NAME.to_string(),
                url: repository_url(base_url, SNAPSHOTS_REPO_NAME),
                credentials: None,
            },
        )
    }

    /// Use the same credentials for both repositories.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.releases.credentials = Some(credentials.clone());
        self.snapshots.credentials = Some(credentials);
        self
    }

    pub fn releases(&self) -> &RepositoryConfig {
        &self.releases
    }

    pub fn snapshots(&self) -> &RepositoryConfig {
        &self.snapshots
    }

    /// The repository `version` routes to, `None` on a classification miss.
    pub fn target_for(&self, version: &str) -> Option<&RepositoryConfig> {
        match RepositoryTarget::for_version(version)? {
            RepositoryTarget::Releases => Some(&self.releases),
            RepositoryTarget::Snapshots => Some(&self.snapshots),
        }
    }

    /// Whether a publish step targeting `repository` may run for `version`.
    ///
    /// A classification miss skips the step with a warning instead of
    /// failing the build.
    pub fn allows(&self, version: &str, repository: &str) -> bool {
        match RepositoryTarget::for_version(version) {
            Some(RepositoryTarget::Releases) => repository == self.releases.name,
            Some(RepositoryTarget::Snapshots) => repository == self.snapshots.name,
            None => {
                warn!(
                    version,
                    repository, "version does not match the version grammar, skipping publication"
                );
                false
            }
        }
    }
}

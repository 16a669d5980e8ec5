//! Publish gating scenarios: release/snapshot routing decides which
//! repository a manifest publication may target.

use boot_core::ManifestBuilder;
use boot_publish::{
    ManifestPublisher, ProjectIdentity, RELEASES_REPO_NAME, RepositoryRouter, SNAPSHOTS_REPO_NAME,
};
use boot_test_utils::RecordingPublisher;
use pretty_assertions::assert_eq;

fn manifest_with_version(version: &str) -> boot_core::Manifest {
    let mut builder = ManifestBuilder::new("platform");
    builder
        .version(version)
        .plugin("com.example.plugin")
        .catalog("libs", "dev.gross:catalog");
    builder.finish().unwrap()
}

/// Publish to every repository the router allows for the manifest version.
fn publish_where_allowed(
    router: &RepositoryRouter,
    manifest: &boot_core::Manifest,
    remote: &mut RecordingPublisher,
    out_dir: &std::path::Path,
) -> Vec<String> {
    let publisher = ManifestPublisher::new(out_dir);
    let identity = ProjectIdentity::new("dev.gross", manifest.version());

    let mut published = Vec::new();
    for repository in [router.releases(), router.snapshots()] {
        if router.allows(manifest.version(), &repository.name) {
            publisher.publish(manifest, &identity, remote).unwrap();
            published.push(repository.name.clone());
        }
    }
    published
}

#[test]
fn release_version_publishes_only_to_releases() {
    let dir = tempfile::tempdir().unwrap();
    let router = RepositoryRouter::from_base_url("https://nexus.example.com");
    let mut remote = RecordingPublisher::new();

    let published = publish_where_allowed(
        &router,
        &manifest_with_version("1.2.3"),
        &mut remote,
        dir.path(),
    );

    assert_eq!(published, [RELEASES_REPO_NAME]);
    assert_eq!(remote.artifacts.len(), 1);
    assert_eq!(remote.artifacts[0].version, "1.2.3");
}

#[test]
fn pre_release_rc_still_routes_to_releases() {
    let dir = tempfile::tempdir().unwrap();
    let router = RepositoryRouter::from_base_url("https://nexus.example.com");
    let mut remote = RecordingPublisher::new();

    let published = publish_where_allowed(
        &router,
        &manifest_with_version("5.6.7-rc.8"),
        &mut remote,
        dir.path(),
    );

    assert_eq!(published, [RELEASES_REPO_NAME]);
}

#[test]
fn dev_version_publishes_only_to_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let router = RepositoryRouter::from_base_url("https://nexus.example.com");
    let mut remote = RecordingPublisher::new();

    let published = publish_where_allowed(
        &router,
        &manifest_with_version("1.2.3-dev.4+deadbee"),
        &mut remote,
        dir.path(),
    );

    assert_eq!(published, [SNAPSHOTS_REPO_NAME]);
    assert_eq!(remote.artifacts.len(), 1);
}

#[test]
fn unclassifiable_version_publishes_nowhere() {
    let dir = tempfile::tempdir().unwrap();
    let router = RepositoryRouter::from_base_url("https://nexus.example.com");
    let mut remote = RecordingPublisher::new();

    let published = publish_where_allowed(
        &router,
        &manifest_with_version("2021-special-build"),
        &mut remote,
        dir.path(),
    );

    assert!(published.is_empty());
    assert!(remote.artifacts.is_empty());
}

#[test]
fn published_artifact_is_never_an_ordinary_dependency() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = ManifestPublisher::new(dir.path());
    let identity = ProjectIdentity::new("dev.gross", "1.2.3");
    let mut remote = RecordingPublisher::new();

    let artifact = publisher
        .publish(&manifest_with_version("1.2.3"), &identity, &mut remote)
        .unwrap();

    assert_eq!(artifact.category, boot_core::MANIFEST_CATEGORY);
    assert_eq!(artifact.extension, "properties");
    assert!(artifact.file.ends_with("platform.properties"));
}

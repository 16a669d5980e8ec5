//! End-to-end exchange scenarios: a producing build publishes a manifest
//! artifact, a consuming build resolves it and injects its contents.

use boot_core::{ExchangeConfig, ManifestBuilder, apply_manifest};
use boot_publish::{ManifestPublisher, ProjectIdentity};
use boot_test_utils::{DirResolutionServices, RecordingPublisher, RecordingSettingsHost};
use pretty_assertions::assert_eq;

const PRODUCER_CONFIG: &str = r#"
[project]
group = "dev.gross"
version = "1.2.3"

[manifests.platform]
description = "Shared platform plugins and catalogs"
plugins = ["com.example.plugin.b", "com.example.plugin.a"]

[manifests.platform.catalogs]
libs = "dev.gross:platform-catalog"
"#;

#[test]
fn producer_to_consumer_round_trip() {
    let repo = tempfile::tempdir().unwrap();
    let services = DirResolutionServices::new(repo.path());

    // Producer: declare, finalize, and publish the manifest into the
    // directory the consumer resolves against.
    let config = ExchangeConfig::parse(PRODUCER_CONFIG).unwrap();
    let manifests = config.build_manifests(&services).unwrap();
    let manifest = manifests.get("platform").unwrap().finish().unwrap();

    let publisher = ManifestPublisher::new(repo.path().join(&config.project.group));
    let identity = ProjectIdentity::new(&config.project.group, &config.project.version);
    let mut remote = RecordingPublisher::new();
    let artifact = publisher.publish(&manifest, &identity, &mut remote).unwrap();
    assert_eq!(artifact.coordinate.to_string(), "dev.gross:platform");
    assert_eq!(remote.artifacts.len(), 1);

    // Consumer: resolve the artifact through its own dependency graph and
    // inject the contents before any plugin resolution happens.
    let mut incoming = ManifestBuilder::new("platform");
    incoming
        .import(&services, "dev.gross:platform", None)
        .unwrap();
    let resolved = incoming.finish().unwrap();

    let mut host = RecordingSettingsHost::new();
    apply_manifest(&resolved, &mut host);

    assert_eq!(host.plugin_version("com.example.plugin.a"), Some("1.2.3"));
    assert_eq!(host.plugin_version("com.example.plugin.b"), Some("1.2.3"));
    assert_eq!(
        host.catalog_coordinate("libs"),
        Some("dev.gross:platform-catalog:1.2.3")
    );
}

#[test]
fn later_import_wins_for_version_and_catalogs_union() {
    let repo = tempfile::tempdir().unwrap();
    let services = DirResolutionServices::new(repo.path());

    let base_dir = repo.path().join("dev.gross");
    std::fs::create_dir_all(&base_dir).unwrap();
    std::fs::write(
        base_dir.join("base.properties"),
        "catalogIds=y\\=g\\:b\npluginIds=com.example.base\nversion=1.0\n",
    )
    .unwrap();
    std::fs::write(
        base_dir.join("apps.properties"),
        "catalogIds=x\\=g\\:a\npluginIds=com.example.apps\nversion=2.0\n",
    )
    .unwrap();

    let mut incoming = ManifestBuilder::new("bootstrap");
    incoming.import(&services, "dev.gross:base", None).unwrap();
    incoming.import(&services, "dev.gross:apps", None).unwrap();
    let manifest = incoming.finish().unwrap();

    assert_eq!(manifest.version(), "2.0");
    assert_eq!(manifest.plugin_ids(), ["com.example.base", "com.example.apps"]);
    assert_eq!(manifest.catalogs()["x"], "g:a");
    assert_eq!(manifest.catalogs()["y"], "g:b");

    let mut host = RecordingSettingsHost::new();
    apply_manifest(&manifest, &mut host);
    assert_eq!(host.catalog_coordinate("y"), Some("g:b:2.0"));
}

#[test]
fn config_declared_imports_run_before_local_fields() {
    let repo = tempfile::tempdir().unwrap();
    let services = DirResolutionServices::new(repo.path());

    let base_dir = repo.path().join("dev.gross");
    std::fs::create_dir_all(&base_dir).unwrap();
    std::fs::write(
        base_dir.join("base.properties"),
        "catalogIds=libs\\=dev.gross\\:catalog\npluginIds=com.example.base\nversion=0.9\ndescription=imported\n",
    )
    .unwrap();

    let config = ExchangeConfig::parse(
        r#"
[project]
group = "dev.gross"
version = "3.0.0"

[manifests.combined]
plugins = ["com.example.local"]
imports = ["dev.gross:base:0.+"]
"#,
    )
    .unwrap();

    let manifests = config.build_manifests(&services).unwrap();
    let manifest = manifests.get("combined").unwrap().finish().unwrap();

    // Imported plugins come first, local declarations after.
    assert_eq!(manifest.plugin_ids(), ["com.example.base", "com.example.local"]);
    assert_eq!(manifest.catalogs()["libs"], "dev.gross:catalog");
    assert_eq!(manifest.description(), Some("imported"));
    // The imported version is an explicit write, so the project-version
    // fallback does not replace it.
    assert_eq!(manifest.version(), "0.9");
}

#[test]
fn missing_artifact_fails_the_import() {
    let repo = tempfile::tempdir().unwrap();
    let services = DirResolutionServices::new(repo.path());

    let mut incoming = ManifestBuilder::new("bootstrap");
    let err = incoming
        .import(&services, "dev.gross:never-published", None)
        .unwrap_err();

    assert!(matches!(err, boot_core::Error::ManifestFileMissing { .. }));
    assert!(err.to_string().contains("never-published.properties"));
}

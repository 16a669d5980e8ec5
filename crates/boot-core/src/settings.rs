//! Settings-time injection of a resolved manifest into a consuming build.

use tracing::info;

use crate::container::ManifestSet;
use crate::error::Result;
use crate::manifest::Manifest;

/// The consuming build's registration surface.
///
/// Implementations map onto the host's plugin-management and
/// dependency-catalog namespaces.
pub trait SettingsHost {
    /// Pin `id` to `version` in the plugin-resolution namespace so later
    /// plugin applications by id need no version.
    fn register_plugin(&mut self, id: &str, version: &str);

    /// Register a dependency catalog under `alias` backed by the given
    /// `group:artifact:version` coordinate.
    fn register_catalog(&mut self, alias: &str, coordinate: &str);
}

/// Inject a resolved manifest into the consuming build.
///
/// Every plugin id is registered with the manifest version, and every
/// catalog alias with its coordinate suffixed by that version. This must run
/// before the consuming build resolves any plugin that depends on these
/// ids: the plugin-management phase precedes plugin application, so
/// manifest injection has to be the very first configuration step.
///
/// Registering the same plugin id twice with the same version is harmless;
/// conflicting duplicate aliases surface later from the host's catalog
/// subsystem, not from here.
pub fn apply_manifest(manifest: &Manifest, host: &mut dyn SettingsHost) {
    info!(
        manifest = manifest.name(),
        description = manifest.description().unwrap_or_default(),
        "applying manifest"
    );

    let version = manifest.version();
    for id in manifest.plugin_ids() {
        info!("adding plugin {id} {version}");
        host.register_plugin(id, version);
    }
    for (alias, coordinate) in manifest.catalogs() {
        info!("adding catalog {alias} -> {coordinate}:{version}");
        host.register_catalog(alias, &format!("{coordinate}:{version}"));
    }
}

/// Finalize and inject every manifest in a container, in name order.
///
/// Fails on the first manifest that cannot finalize; manifests already
/// applied stay applied, matching the host's accumulate-only registration
/// namespaces.
pub fn apply_all(set: &ManifestSet, host: &mut dyn SettingsHost) -> Result<()> {
    for builder in set.iter() {
        apply_manifest(&builder.finish()?, host);
    }
    Ok(())
}

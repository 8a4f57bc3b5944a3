//! End-to-end manifest construction
//!
//! Train + metadata + flags -> [`PublishManifest`]. Any failure aborts the
//! whole build; there is no partial manifest.

use tracing::{debug, info};

use crate::config::{BuildFlags, CURRENT_VERSION_ID, ResolverConfig};
use crate::manifest::emitter::PublishManifest;
use crate::metadata::MetadataSource;
use crate::version::current::CurrentVersion;
use crate::version::error::VersionError;
use crate::version::policy::{self, ClassifiedRelease};
use crate::version::prerelease::PrereleaseClassifier;
use crate::version::train::ReleaseTrain;

/// Build the publish manifest for one site build
pub fn build_manifest<S>(
    train: &ReleaseTrain,
    source: &S,
    config: &ResolverConfig,
    flags: &BuildFlags,
) -> Result<PublishManifest, VersionError>
where
    S: MetadataSource + ?Sized,
{
    check_included_versions(train, flags)?;

    let current = CurrentVersion::derive(train, config.major_version)?;
    debug!("In-development version is {}", current);

    let releases = if flags.include_release_history {
        let classifier = PrereleaseClassifier::new(&config.version_config_key);
        classify_train(train, source, &classifier)?
    } else {
        info!("Release history excluded, publishing only {}", CURRENT_VERSION_ID);
        Vec::new()
    };

    let resolved = policy::resolve(&releases, &current, config.active_window);
    let manifest = PublishManifest::assemble(resolved, flags);

    info!(
        "Resolved {} versions (default: {:?})",
        manifest.versions.len(),
        manifest.last_version
    );

    Ok(manifest)
}

/// Classify every release of the train, preserving train order
pub fn classify_train<S>(
    train: &ReleaseTrain,
    source: &S,
    classifier: &PrereleaseClassifier,
) -> Result<Vec<ClassifiedRelease>, VersionError>
where
    S: MetadataSource + ?Sized,
{
    train
        .iter()
        .map(|version| {
            let is_prerelease = classifier.classify(source, version)?;
            Ok(ClassifiedRelease::new(version, is_prerelease))
        })
        .collect()
}

/// Every explicitly requested version must exist in the train
fn check_included_versions(train: &ReleaseTrain, flags: &BuildFlags) -> Result<(), VersionError> {
    let Some(only_include) = &flags.only_include_versions else {
        return Ok(());
    };

    match only_include
        .iter()
        .find(|version| *version != CURRENT_VERSION_ID && !train.contains(version))
    {
        Some(unknown) => Err(VersionError::UnknownVersion(unknown.clone())),
        None => Ok(()),
    }
}

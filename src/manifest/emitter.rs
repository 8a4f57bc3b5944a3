//! Publish manifest assembly and rendering

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{BuildFlags, CURRENT_VERSION_ID};
use crate::version::policy::{
    BannerLevel, DefaultVersion, NoDefaultReason, ResolvedPolicy, VersionPolicyRecord,
};

/// Everything the site build needs to know about versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishManifest {
    /// Only `current` is published
    pub disable_versioning: bool,
    /// Restrict the generator to these identifiers
    pub only_include_versions: Option<Vec<String>>,
    pub last_version: DefaultVersion,
    /// `current` first, then released versions newest first
    pub versions: IndexMap<String, VersionPolicyRecord>,
    pub include_blog: bool,
}

impl PublishManifest {
    /// Merge the resolved records into a manifest according to the build flags
    pub fn assemble(resolved: ResolvedPolicy, flags: &BuildFlags) -> Self {
        let mut versions = IndexMap::with_capacity(resolved.releases.len() + 1);
        versions.insert(CURRENT_VERSION_ID.to_string(), resolved.current);

        let last_version = if !flags.include_release_history {
            DefaultVersion::Unset(NoDefaultReason::HistoryExcluded)
        } else if flags.only_include_versions.is_some() {
            DefaultVersion::Unset(NoDefaultReason::RestrictedVersionSet)
        } else {
            resolved.default_version
        };

        if flags.include_release_history {
            versions.extend(resolved.releases);
        }

        Self {
            disable_versioning: !flags.include_release_history,
            only_include_versions: flags.only_include_versions.clone(),
            last_version,
            versions,
            include_blog: flags.include_blog,
        }
    }

    /// Options in the shape of the versioned docs plugin
    pub fn to_plugin_options(&self) -> PluginOptions<'_> {
        PluginOptions {
            disable_versioning: self.disable_versioning,
            only_include_versions: self.only_include_versions.as_deref(),
            last_version: self.last_version.as_release(),
            versions: self
                .versions
                .iter()
                .map(|(id, record)| (id.as_str(), PluginVersion::from(record)))
                .collect(),
        }
    }

    /// The full build document written by the CLI
    pub fn to_document(&self) -> ManifestDocument<'_> {
        ManifestDocument {
            docs_plugin: self.to_plugin_options(),
            default_version: &self.last_version,
            include_blog: self.include_blog,
        }
    }

    /// Pretty JSON of [`Self::to_document`]; stable across runs
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_document())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument<'a> {
    pub docs_plugin: PluginOptions<'a>,
    pub default_version: &'a DefaultVersion,
    pub include_blog: bool,
}

/// `versions`, `lastVersion` and friends of the docs plugin
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions<'a> {
    pub disable_versioning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_include_versions: Option<&'a [String]>,
    /// Omitted when unset, so the generator falls back to `current`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_version: Option<&'a str>,
    pub versions: IndexMap<&'a str, PluginVersion<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginVersion<'a> {
    pub label: &'a str,
    pub banner: BannerLevel,
    pub no_index: bool,
    pub path: &'a str,
}

impl<'a> From<&'a VersionPolicyRecord> for PluginVersion<'a> {
    fn from(record: &'a VersionPolicyRecord) -> Self {
        Self {
            label: &record.label,
            banner: record.banner,
            no_index: !record.indexable,
            path: &record.path,
        }
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Layout defaults
// =============================================================================

/// Release train manifest, newest first, relative to the site root
pub const DEFAULT_RELEASE_TRAIN_FILE: &str = "versions.json";

/// Directory holding one subdirectory per released version
pub const DEFAULT_VERSIONED_DOCS_DIR: &str = "versioned_docs";

/// Prefix of each per-version subdirectory (`version-2.19`)
pub const DEFAULT_VERSION_DIR_PREFIX: &str = "version-";

/// Build metadata document, relative to a version's subdirectory
pub const DEFAULT_METADATA_FILE: &str = "reference/help-all.json";

// =============================================================================
// Resolver defaults
// =============================================================================

/// Configuration key recording the product version
pub const DEFAULT_VERSION_CONFIG_KEY: &str = "pants_version";

/// The single ongoing major-version line
pub const DEFAULT_MAJOR_VERSION: u64 = 2;

/// Number of newest final releases considered fully supported
pub const DEFAULT_ACTIVE_WINDOW: usize = 2;

// =============================================================================
// Environment
// =============================================================================

/// `development` selects a partial build; anything else is a full build
pub const BUILD_ENV_VAR: &str = "DOCS_BUILD_ENV";

/// Comma-separated released versions to build alongside `current` in development
pub const INCLUDE_VERSIONS_VAR: &str = "DOCS_INCLUDE_VERSIONS";

/// `1` includes the blog in development builds
pub const INCLUDE_BLOG_VAR: &str = "DOCS_INCLUDE_BLOG";

/// Identifier of the in-development version in the publish manifest
pub const CURRENT_VERSION_ID: &str = "current";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Policy configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    pub layout: LayoutConfig,
    pub resolver: ResolverConfig,
}

impl PolicyConfig {
    /// Load configuration from a JSON file; missing fields use defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// On-disk layout of the documentation site
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub release_train_file: PathBuf,
    pub versioned_docs_dir: PathBuf,
    pub version_dir_prefix: String,
    pub metadata_file: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            release_train_file: PathBuf::from(DEFAULT_RELEASE_TRAIN_FILE),
            versioned_docs_dir: PathBuf::from(DEFAULT_VERSIONED_DOCS_DIR),
            version_dir_prefix: DEFAULT_VERSION_DIR_PREFIX.to_string(),
            metadata_file: PathBuf::from(DEFAULT_METADATA_FILE),
        }
    }
}

/// Classification and windowing parameters
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub version_config_key: String,
    pub major_version: u64,
    pub active_window: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version_config_key: DEFAULT_VERSION_CONFIG_KEY.to_string(),
            major_version: DEFAULT_MAJOR_VERSION,
            active_window: DEFAULT_ACTIVE_WINDOW,
        }
    }
}

/// Build-time switches controlling how much of the site is published.
///
/// These are resolved once from the environment and then passed around
/// explicitly, so nothing below the CLI reads process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFlags {
    /// Publish every released version, not just `current`
    pub include_release_history: bool,
    /// Restrict the generator to these identifiers (always starts with `current`)
    pub only_include_versions: Option<Vec<String>>,
    /// Publish the blog content stream
    pub include_blog: bool,
}

impl Default for BuildFlags {
    /// A full production build
    fn default() -> Self {
        Self {
            include_release_history: true,
            only_include_versions: None,
            include_blog: true,
        }
    }
}

impl BuildFlags {
    /// Resolve the flags from `DOCS_BUILD_ENV`, `DOCS_INCLUDE_VERSIONS` and `DOCS_INCLUDE_BLOG`.
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(BUILD_ENV_VAR).ok(),
            std::env::var(INCLUDE_VERSIONS_VAR).ok(),
            std::env::var(INCLUDE_BLOG_VAR).ok(),
        )
    }

    fn from_env_values(
        build_env: Option<String>,
        include_versions: Option<String>,
        include_blog: Option<String>,
    ) -> Self {
        let is_dev = build_env.as_deref() == Some("development");

        let only_include_versions = is_dev.then(|| {
            std::iter::once(CURRENT_VERSION_ID.to_string())
                .chain(
                    include_versions
                        .iter()
                        .flat_map(|list| list.split(','))
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                )
                .collect()
        });

        Self {
            include_release_history: !(is_dev && include_versions.is_none()),
            only_include_versions,
            include_blog: include_blog.as_deref() == Some("1") || !is_dev,
        }
    }
}

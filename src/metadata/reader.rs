//! Metadata source trait and its filesystem implementation

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::metadata::error::MetadataError;
use crate::metadata::types::HelpDocument;

/// Trait for loading the build metadata of a released version
#[cfg_attr(test, automock)]
pub trait MetadataSource: Send + Sync {
    /// Loads and parses the metadata document recorded for `version`
    ///
    /// # Returns
    /// * `Ok(HelpDocument)` - The parsed document
    /// * `Err(MetadataError)` - If the document is missing or malformed
    fn load(&self, version: &str) -> Result<HelpDocument, MetadataError>;
}

/// Reads `help-all.json` documents from the versioned docs tree
#[derive(Debug, Clone)]
pub struct FsMetadataReader {
    root: PathBuf,
    layout: LayoutConfig,
}

impl FsMetadataReader {
    pub fn new(root: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/versioned_docs/version-<version>/reference/help-all.json`
    pub fn metadata_path(&self, version: &str) -> PathBuf {
        self.root
            .join(&self.layout.versioned_docs_dir)
            .join(format!("{}{}", self.layout.version_dir_prefix, version))
            .join(&self.layout.metadata_file)
    }
}

impl MetadataSource for FsMetadataReader {
    fn load(&self, version: &str) -> Result<HelpDocument, MetadataError> {
        let path = self.metadata_path(version);
        debug!("Reading metadata for {} from {:?}", version, path);

        let content =
            std::fs::read_to_string(&path).map_err(|source| MetadataError::Unavailable {
                version: version.to_string(),
                path: path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| MetadataError::Malformed {
            version: version.to_string(),
            path,
            source,
        })
    }
}

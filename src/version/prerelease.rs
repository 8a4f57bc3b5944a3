//! Prerelease classification from recorded build metadata
//!
//! A released version is a prerelease when the product version hardcoded into
//! its build is `MAJOR.MINOR.0` followed by one of the prerelease markers:
//! - `2.19.0.dev3` - development snapshot
//! - `2.19.0a0` - alpha
//! - `2.19.0b1` - beta
//! - `2.19.0rc2` - release candidate
//!
//! Patch releases are never prereleases, even when they carry one of these
//! suffixes (`2.19.1rc1`).

use regex::Regex;
use tracing::debug;

use crate::metadata::types::{HelpDocument, Rank};
use crate::metadata::{MetadataError, MetadataSource};

pub struct PrereleaseClassifier {
    /// Configuration key recording the product version
    config_key: String,
    /// `MAJOR.MINOR.0` followed by `.dev`, `a`, `b` or `rc` and a number
    prerelease_re: Regex,
}

impl PrereleaseClassifier {
    pub fn new(config_key: impl Into<String>) -> Self {
        Self {
            config_key: config_key.into(),
            prerelease_re: Regex::new(r"^([0-9]+\.[0-9]+\.0)(\.dev|a|b|rc)[0-9]+$")
                .expect("prerelease pattern is valid"),
        }
    }

    /// Check whether a hardcoded product version string denotes a prerelease
    pub fn is_prerelease_version(&self, value: &str) -> bool {
        self.prerelease_re.is_match(value)
    }

    /// Load the metadata recorded for `version` and classify it
    pub fn classify<S>(&self, source: &S, version: &str) -> Result<bool, MetadataError>
    where
        S: MetadataSource + ?Sized,
    {
        let document = source.load(version)?;
        let hardcoded = hardcoded_version(&document, &self.config_key, version)?;
        let is_prerelease = self.is_prerelease_version(hardcoded);

        debug!(
            "Version {} was built as {} (prerelease: {})",
            version, hardcoded, is_prerelease
        );

        Ok(is_prerelease)
    }
}

/// Extract the hardcoded value of `config_key` from the global scope.
///
/// A well-formed document has exactly one `HARDCODED` entry in the option's
/// value history.
pub fn hardcoded_version<'a>(
    document: &'a HelpDocument,
    config_key: &str,
    version: &str,
) -> Result<&'a str, MetadataError> {
    let root = document
        .root_scope()
        .ok_or_else(|| MetadataError::MissingRootScope {
            version: version.to_string(),
        })?;

    let option =
        root.advanced_option(config_key)
            .ok_or_else(|| MetadataError::ConfigKeyNotFound {
                version: version.to_string(),
                config_key: config_key.to_string(),
            })?;

    let hardcoded = option.values_ranked(Rank::Hardcoded);
    let &[value] = hardcoded.as_slice() else {
        return Err(MetadataError::HardcodedValueNotFound {
            version: version.to_string(),
            config_key: config_key.to_string(),
            found: hardcoded.len(),
        });
    };

    value
        .value
        .as_str()
        .ok_or_else(|| MetadataError::NonStringValue {
            version: version.to_string(),
            config_key: config_key.to_string(),
        })
}

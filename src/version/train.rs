//! The release train: every released version, newest first

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;
use tracing::warn;

use crate::config::CURRENT_VERSION_ID;
use crate::version::error::VersionError;

/// Ordered, duplicate-free list of released version identifiers.
///
/// The train is owned by the release process; it is validated on
/// construction but never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseTrain {
    versions: Vec<String>,
}

impl ReleaseTrain {
    pub fn new(versions: Vec<String>) -> Result<Self, VersionError> {
        let mut seen = HashSet::new();
        for version in &versions {
            if version.trim().is_empty() {
                return Err(VersionError::MalformedVersionIdentifier {
                    version: version.clone(),
                    reason: "empty identifier",
                });
            }
            if version == CURRENT_VERSION_ID {
                return Err(VersionError::MalformedVersionIdentifier {
                    version: version.clone(),
                    reason: "reserved for the in-development version",
                });
            }
            if !seen.insert(version.as_str()) {
                return Err(VersionError::DuplicateVersion(version.clone()));
            }
        }

        warn_on_misordering(&versions);

        Ok(Self { versions })
    }

    /// Load the train from a JSON array of identifiers (`versions.json`)
    pub fn load(path: &Path) -> Result<Self, VersionError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            VersionError::ReleaseTrainUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let versions: Vec<String> =
            serde_json::from_str(&content).map_err(|source| {
                VersionError::MalformedReleaseTrain {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        Self::new(versions)
    }

    pub fn newest(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }
}

/// Log adjacent entries that are not strictly newest-first.
/// Identifiers that are not PEP 440 versions are skipped.
fn warn_on_misordering(versions: &[String]) {
    let parsed: Vec<(&str, Option<Version>)> = versions
        .iter()
        .map(|v| (v.as_str(), Version::from_str(v).ok()))
        .collect();

    for pair in parsed.windows(2) {
        let [(newer, Some(newer_version)), (older, Some(older_version))] = pair else {
            continue;
        };
        if newer_version <= older_version {
            warn!(
                "Release train is not ordered newest first: {} is listed before {}",
                newer, older
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn new_keeps_given_order() {
        let train = ReleaseTrain::new(strings(&["2.20.0rc1", "2.19", "2.18"])).unwrap();

        assert_eq!(train.newest(), Some("2.20.0rc1"));
        assert_eq!(
            train.iter().collect::<Vec<_>>(),
            vec!["2.20.0rc1", "2.19", "2.18"]
        );
        assert_eq!(train.len(), 3);
        assert!(train.contains("2.19"));
        assert!(!train.contains("2.17"));
    }

    #[test]
    fn new_accepts_misordered_train() {
        let train = ReleaseTrain::new(strings(&["2.17", "2.19"])).unwrap();

        assert_eq!(train.newest(), Some("2.17"));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = ReleaseTrain::new(strings(&["2.19", "2.18", "2.19"])).unwrap_err();

        assert!(matches!(err, VersionError::DuplicateVersion(ref v) if v == "2.19"));
    }

    #[test]
    fn new_rejects_empty_identifier() {
        let err = ReleaseTrain::new(strings(&["2.19", " "])).unwrap_err();

        assert!(matches!(err, VersionError::MalformedVersionIdentifier { .. }));
    }

    #[test]
    fn new_rejects_reserved_current_identifier() {
        let err = ReleaseTrain::new(strings(&["current", "2.19"])).unwrap_err();

        assert!(matches!(
            err,
            VersionError::MalformedVersionIdentifier { ref version, .. } if version == "current"
        ));
    }

    #[test]
    fn empty_train_has_no_newest() {
        let train = ReleaseTrain::new(vec![]).unwrap();

        assert!(train.is_empty());
        assert_eq!(train.newest(), None);
    }

    #[test]
    fn load_reads_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");
        std::fs::write(&path, r#"["2.19", "2.18"]"#).unwrap();

        let train = ReleaseTrain::load(&path).unwrap();

        assert_eq!(train.iter().collect::<Vec<_>>(), vec!["2.19", "2.18"]);
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();

        let err = ReleaseTrain::load(&temp_dir.path().join("versions.json")).unwrap_err();

        assert!(matches!(err, VersionError::ReleaseTrainUnavailable { .. }));
    }

    #[test]
    fn load_non_array_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");
        std::fs::write(&path, r#"{"latest": "2.19"}"#).unwrap();

        let err = ReleaseTrain::load(&path).unwrap_err();

        assert!(matches!(err, VersionError::MalformedReleaseTrain { .. }));
    }
}

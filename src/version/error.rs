use std::path::PathBuf;

use thiserror::Error;

use crate::metadata::MetadataError;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Release train unavailable at {path:?}: {source}")]
    ReleaseTrainUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed release train at {path:?}: {source}")]
    MalformedReleaseTrain {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed version identifier {version:?}: {reason}")]
    MalformedVersionIdentifier {
        version: String,
        reason: &'static str,
    },

    #[error("Duplicate version in release train: {0}")]
    DuplicateVersion(String),

    #[error("Version {0} is not in the release train")]
    UnknownVersion(String),
}

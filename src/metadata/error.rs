use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata unavailable for version {version} at {path:?}: {source}")]
    Unavailable {
        version: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed metadata document for version {version} at {path:?}: {source}")]
    Malformed {
        version: String,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed metadata document for version {version}: no global scope")]
    MissingRootScope { version: String },

    #[error("Malformed metadata document for version {version}: {config_key} value is not a string")]
    NonStringValue { version: String, config_key: String },

    #[error("Config key {config_key} not found in metadata for version {version}")]
    ConfigKeyNotFound { version: String, config_key: String },

    #[error(
        "Expected exactly one hardcoded value for {config_key} in metadata for version {version}, found {found}"
    )]
    HardcodedValueNotFound {
        version: String,
        config_key: String,
        found: usize,
    },
}

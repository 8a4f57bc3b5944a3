//! Derivation of the in-development ("current") version
//!
//! The release train follows a single major line, so the version under
//! development is the newest release with its minor component bumped:
//! `2.19` -> `2.20`.

use std::fmt;

use crate::version::error::VersionError;
use crate::version::train::ReleaseTrain;

/// The unreleased version built from the main docs tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentVersion {
    pub major: u64,
    pub minor: u64,
}

impl CurrentVersion {
    /// Derive the current version from the newest release of the train.
    ///
    /// Only the leading `<major>.<minor>` of the newest identifier is read, so
    /// `2.19.0rc1` derives `2.20` just like `2.19`. An empty train starts the
    /// line at `<major>.0`.
    pub fn derive(train: &ReleaseTrain, major: u64) -> Result<Self, VersionError> {
        let Some(newest) = train.newest() else {
            return Ok(Self { major, minor: 0 });
        };

        let minor = parse_minor(newest, major)?;
        let minor = minor
            .checked_add(1)
            .ok_or_else(|| malformed(newest, "minor version overflows"))?;

        Ok(Self { major, minor })
    }

    /// `2.20` as used for the route path
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// `2.20 (dev)`
    pub fn label(&self) -> String {
        format!("{self} (dev)")
    }
}

impl fmt::Display for CurrentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Parse the minor component of `<major>.<minor>[<suffix>]`
fn parse_minor(version: &str, major: u64) -> Result<u64, VersionError> {
    let rest = version
        .strip_prefix(&format!("{major}."))
        .ok_or_else(|| malformed(version, "not on the expected major version line"))?;

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..digits_end]
        .parse()
        .map_err(|_| malformed(version, "minor version is not a number"))
}

fn malformed(version: &str, reason: &'static str) -> VersionError {
    VersionError::MalformedVersionIdentifier {
        version: version.to_string(),
        reason,
    }
}

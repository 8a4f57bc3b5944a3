//! Version policy resolution
//!
//! Decides, for every released version and for the in-development version,
//! how the docs site presents it: display label, banner, search indexability
//! and route path. Also picks the version the site lands on by default.
//!
//! The resolution is a pure fold over the classified release train:
//!
//! ```text
//! releases ──▶ leading_prerelease_count ──▶ active_window
//!    │                                          │
//!    └──────────▶ release_policy(index, release, window) ──▶ records
//!    └──────────▶ default_version (skips leading prereleases)
//! ```

use serde::Serialize;

use crate::version::current::CurrentVersion;

/// Banner shown on top of a version's pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    None,
    /// Prereleases and the in-development version
    Unreleased,
    /// Releases that fell out of the active window
    Unmaintained,
}

/// How a single version is published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPolicyRecord {
    pub label: String,
    pub banner: BannerLevel,
    pub indexable: bool,
    pub path: String,
}

/// A released version together with its prerelease classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRelease {
    pub version: String,
    pub is_prerelease: bool,
}

impl ClassifiedRelease {
    pub fn new(version: impl Into<String>, is_prerelease: bool) -> Self {
        Self {
            version: version.into(),
            is_prerelease,
        }
    }
}

/// The version the site lands on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultVersion {
    /// A released, non-prerelease version
    Release(String),
    /// No released version qualifies; the generator lands on `current`
    Unset(NoDefaultReason),
}

impl DefaultVersion {
    pub fn as_release(&self) -> Option<&str> {
        match self {
            DefaultVersion::Release(version) => Some(version),
            DefaultVersion::Unset(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoDefaultReason {
    /// Nothing has been released yet
    EmptyReleaseTrain,
    /// Every released version is a prerelease
    OnlyPrereleases,
    /// Only `current` is being built
    HistoryExcluded,
    /// The generator is restricted to an explicit version list
    RestrictedVersionSet,
}

/// Outcome of resolving the whole train
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPolicy {
    pub current: VersionPolicyRecord,
    /// Per-release records, newest first
    pub releases: Vec<(String, VersionPolicyRecord)>,
    pub default_version: DefaultVersion,
}

/// 1 when a prerelease occupies the newest slot, otherwise 0.
///
/// Such a prerelease will be superseded by its final release, so it must not
/// push an otherwise active release out of the window.
pub fn leading_prerelease_count(releases: &[ClassifiedRelease]) -> usize {
    match releases.first() {
        Some(newest) if newest.is_prerelease => 1,
        _ => 0,
    }
}

/// Number of newest entries considered active
pub fn active_window(releases: &[ClassifiedRelease], base_window: usize) -> usize {
    base_window + leading_prerelease_count(releases)
}

/// The newest release that is not a prerelease
pub fn default_version(releases: &[ClassifiedRelease]) -> DefaultVersion {
    if releases.is_empty() {
        return DefaultVersion::Unset(NoDefaultReason::EmptyReleaseTrain);
    }

    releases
        .iter()
        .find(|release| !release.is_prerelease)
        .map(|release| DefaultVersion::Release(release.version.clone()))
        .unwrap_or(DefaultVersion::Unset(NoDefaultReason::OnlyPrereleases))
}

/// Policy of the release at `index` in the train
pub fn release_policy(
    index: usize,
    release: &ClassifiedRelease,
    window: usize,
) -> VersionPolicyRecord {
    let version = &release.version;
    let (label, banner, indexable) = if release.is_prerelease {
        (format!("{version} (prerelease)"), BannerLevel::Unreleased, false)
    } else if index < window {
        (version.clone(), BannerLevel::None, true)
    } else {
        (format!("{version} (deprecated)"), BannerLevel::Unmaintained, false)
    };

    VersionPolicyRecord {
        label,
        banner,
        indexable,
        path: version.clone(),
    }
}

/// Policy of the in-development version
pub fn current_policy(current: &CurrentVersion) -> VersionPolicyRecord {
    VersionPolicyRecord {
        label: current.label(),
        banner: BannerLevel::Unreleased,
        indexable: false,
        path: current.path(),
    }
}

/// Resolve the policy of every version.
///
/// `releases` must be in train order, newest first.
pub fn resolve(
    releases: &[ClassifiedRelease],
    current: &CurrentVersion,
    base_window: usize,
) -> ResolvedPolicy {
    let window = active_window(releases, base_window);

    let records = releases
        .iter()
        .enumerate()
        .fold(Vec::with_capacity(releases.len()), |mut acc, (index, release)| {
            acc.push((release.version.clone(), release_policy(index, release, window)));
            acc
        });

    ResolvedPolicy {
        current: current_policy(current),
        releases: records,
        default_version: default_version(releases),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn releases(entries: &[(&str, bool)]) -> Vec<ClassifiedRelease> {
        entries
            .iter()
            .map(|(version, is_prerelease)| ClassifiedRelease::new(*version, *is_prerelease))
            .collect()
    }

    fn record(
        label: &str,
        banner: BannerLevel,
        indexable: bool,
        path: &str,
    ) -> VersionPolicyRecord {
        VersionPolicyRecord {
            label: label.to_string(),
            banner,
            indexable,
            path: path.to_string(),
        }
    }

    const CURRENT: CurrentVersion = CurrentVersion { major: 2, minor: 20 };

    #[rstest]
    #[case(&[], 0)]
    #[case(&[("2.19", false)], 0)]
    #[case(&[("2.20.0rc1", true), ("2.19", false)], 1)]
    #[case(&[("2.19", false), ("2.19.0rc1", true)], 0)] // only the head counts
    #[case(&[("2.21.0a0", true), ("2.20.0rc1", true)], 1)] // never more than one
    fn leading_prerelease_count_returns_expected(
        #[case] entries: &[(&str, bool)],
        #[case] expected: usize,
    ) {
        assert_eq!(leading_prerelease_count(&releases(entries)), expected);
    }

    #[rstest]
    #[case(&[("2.19", false)], 2, 2)]
    #[case(&[("2.20.0rc1", true), ("2.19", false)], 2, 3)]
    #[case(&[("2.20.0rc1", true)], 4, 5)]
    fn active_window_adds_leading_prerelease(
        #[case] entries: &[(&str, bool)],
        #[case] base: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(active_window(&releases(entries), base), expected);
    }

    #[rstest]
    #[case(&[("2.19", false), ("2.18", false)], DefaultVersion::Release("2.19".to_string()))]
    #[case(
        &[("2.20.0rc1", true), ("2.19", false)],
        DefaultVersion::Release("2.19".to_string())
    )]
    #[case(
        &[("2.21.0a0", true), ("2.20.0rc1", true), ("2.19", false)],
        DefaultVersion::Release("2.19".to_string())
    )]
    #[case(&[], DefaultVersion::Unset(NoDefaultReason::EmptyReleaseTrain))]
    #[case(&[("2.0.0rc1", true)], DefaultVersion::Unset(NoDefaultReason::OnlyPrereleases))]
    fn default_version_skips_prereleases(
        #[case] entries: &[(&str, bool)],
        #[case] expected: DefaultVersion,
    ) {
        assert_eq!(default_version(&releases(entries)), expected);
    }

    #[test]
    fn resolve_without_prerelease_uses_window_of_two() {
        let train = releases(&[
            ("2.19", false),
            ("2.18", false),
            ("2.17", false),
            ("2.16", false),
        ]);

        let resolved = resolve(&train, &CURRENT, 2);

        assert_eq!(
            resolved.releases,
            vec![
                ("2.19".to_string(), record("2.19", BannerLevel::None, true, "2.19")),
                ("2.18".to_string(), record("2.18", BannerLevel::None, true, "2.18")),
                (
                    "2.17".to_string(),
                    record("2.17 (deprecated)", BannerLevel::Unmaintained, false, "2.17")
                ),
                (
                    "2.16".to_string(),
                    record("2.16 (deprecated)", BannerLevel::Unmaintained, false, "2.16")
                ),
            ]
        );
        assert_eq!(
            resolved.default_version,
            DefaultVersion::Release("2.19".to_string())
        );
    }

    #[test]
    fn resolve_with_leading_prerelease_widens_window() {
        let train = releases(&[
            ("2.20.0rc1", true),
            ("2.19", false),
            ("2.18", false),
            ("2.17", false),
        ]);

        let resolved = resolve(&train, &CURRENT, 2);

        assert_eq!(
            resolved.releases,
            vec![
                (
                    "2.20.0rc1".to_string(),
                    record("2.20.0rc1 (prerelease)", BannerLevel::Unreleased, false, "2.20.0rc1")
                ),
                ("2.19".to_string(), record("2.19", BannerLevel::None, true, "2.19")),
                ("2.18".to_string(), record("2.18", BannerLevel::None, true, "2.18")),
                (
                    "2.17".to_string(),
                    record("2.17 (deprecated)", BannerLevel::Unmaintained, false, "2.17")
                ),
            ]
        );
        assert_eq!(
            resolved.default_version,
            DefaultVersion::Release("2.19".to_string())
        );
    }

    #[test]
    fn resolve_never_indexes_prereleases_outside_the_head() {
        let train = releases(&[("2.19", false), ("2.19.0rc2", true), ("2.18", false)]);

        let resolved = resolve(&train, &CURRENT, 2);

        assert_eq!(
            resolved.releases[1].1,
            record("2.19.0rc2 (prerelease)", BannerLevel::Unreleased, false, "2.19.0rc2")
        );
        // The prerelease still occupies a slot of the window
        assert_eq!(resolved.releases[2].1.banner, BannerLevel::Unmaintained);
    }

    #[test]
    fn resolve_always_emits_current() {
        let resolved = resolve(&[], &CurrentVersion { major: 2, minor: 0 }, 2);

        assert_eq!(
            resolved.current,
            record("2.0 (dev)", BannerLevel::Unreleased, false, "2.0")
        );
        assert!(resolved.releases.is_empty());
        assert_eq!(
            resolved.default_version,
            DefaultVersion::Unset(NoDefaultReason::EmptyReleaseTrain)
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let train = releases(&[("2.20.0rc1", true), ("2.19", false), ("2.18", false)]);

        assert_eq!(resolve(&train, &CURRENT, 2), resolve(&train, &CURRENT, 2));
    }

    #[test]
    fn default_version_as_release() {
        assert_eq!(
            DefaultVersion::Release("2.19".to_string()).as_release(),
            Some("2.19")
        );
        assert_eq!(
            DefaultVersion::Unset(NoDefaultReason::HistoryExcluded).as_release(),
            None
        );
    }
}

use std::cmp::Ordering;

use semver::{BuildMetadata, Version};

/// How the latest published release relates to the running version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    /// The release is strictly newer than the running version.
    Newer,
    /// The running version is the same as or newer than the release.
    Latest,
    /// Neither ordering holds.
    NotAvailable,
}

/// Parse a release tag or application version into a semantic version.
///
/// Accepts surrounding whitespace and a leading `v` or `=`. Anything short of
/// a full `MAJOR.MINOR.PATCH` is rejected, so `1.2` is not a version.
#[must_use]
pub fn parse_version(input: &str) -> Option<Version> {
    let trimmed = input.trim();
    let version = trimmed
        .strip_prefix('=')
        .unwrap_or(trimmed)
        .trim_start();
    let version = version
        .strip_prefix(['v', 'V'])
        .unwrap_or(version);

    Version::parse(version).ok()
}

/// Render a version for display, without build metadata.
#[must_use]
pub fn display_version(version: &Version) -> String {
    let mut shown = version.clone();
    shown.build = BuildMetadata::EMPTY;
    shown.to_string()
}

/// Classify `latest` against `current` by semver precedence.
///
/// Build metadata does not take part in the comparison.
#[must_use]
pub fn compare(latest: &Version, current: &Version) -> VersionComparison {
    let ordering = latest.cmp_precedence(current);
    if ordering == Ordering::Greater {
        VersionComparison::Newer
    } else if matches!(ordering, Ordering::Less | Ordering::Equal) {
        VersionComparison::Latest
    } else {
        VersionComparison::NotAvailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(input: &str) -> Version {
        parse_version(input).expect("valid version in test")
    }

    #[test]
    fn parses_prefixed_versions() {
        assert_eq!(v("v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("=1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("= v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("  V2.0.0 "), Version::new(2, 0, 0));
        assert_eq!(v("v1.4.0-beta.1").to_string(), "1.4.0-beta.1");
    }

    #[test]
    fn rejects_partial_versions() {
        assert!(parse_version("1.2").is_none());
        assert!(parse_version("3").is_none());
        assert!(parse_version("v1.4-beta.1").is_none());
        assert!(parse_version("1.2+build.1").is_none());
    }

    #[test]
    fn rejects_invalid_versions() {
        assert!(parse_version("").is_none());
        assert!(parse_version("latest").is_none());
        assert!(parse_version("1.2.3.4").is_none());
        assert!(parse_version("release-2024").is_none());
        assert!(parse_version("1.x").is_none());
    }

    #[test]
    fn display_drops_build_metadata() {
        assert_eq!(display_version(&v("1.3.0+build.7")), "1.3.0");
        assert_eq!(display_version(&v("v2.0.0-rc.1+sha.5114f85")), "2.0.0-rc.1");
        assert_eq!(display_version(&v("1.2.3")), "1.2.3");
    }

    #[test]
    fn newer_release_is_reported_as_update() {
        assert_eq!(compare(&v("1.3.0"), &v("1.2.0")), VersionComparison::Newer);
        assert_eq!(compare(&v("2.0.0"), &v("1.9.9")), VersionComparison::Newer);
        assert_eq!(
            compare(&v("1.0.0"), &v("1.0.0-beta.2")),
            VersionComparison::Newer
        );
        assert_eq!(
            compare(&v("1.0.0-beta.10"), &v("1.0.0-beta.2")),
            VersionComparison::Newer
        );
    }

    #[test]
    fn older_or_equal_release_means_running_latest() {
        assert_eq!(compare(&v("1.2.0"), &v("1.3.0")), VersionComparison::Latest);
        assert_eq!(compare(&v("1.2.0"), &v("1.2.0")), VersionComparison::Latest);
        assert_eq!(compare(&v("v1.2.0"), &v("1.2.0")), VersionComparison::Latest);
        assert_eq!(
            compare(&v("1.0.0-beta.2"), &v("1.0.0")),
            VersionComparison::Latest
        );
    }

    #[test]
    fn build_metadata_is_ignored() {
        assert_eq!(
            compare(&v("1.2.0+build.7"), &v("1.2.0+build.3")),
            VersionComparison::Latest
        );
    }

    #[test]
    fn ordering_is_antisymmetric_for_distinct_versions() {
        let pairs = [
            ("0.1.0", "0.0.9"),
            ("1.10.0", "1.9.0"),
            ("2.0.0-rc.1", "2.0.0-beta.5"),
            ("10.0.0", "9.99.99"),
        ];
        for (greater, lesser) in pairs {
            assert_eq!(
                compare(&v(greater), &v(lesser)),
                VersionComparison::Newer,
                "{greater} should be newer than {lesser}"
            );
            assert_eq!(
                compare(&v(lesser), &v(greater)),
                VersionComparison::Latest,
                "{lesser} should not be newer than {greater}"
            );
        }
    }
}

//! Core, UI-independent logic for upnotify.
//!
//! This crate provides:
//! - The GitHub release model and a release-list client.
//! - Semantic version parsing and update classification.
//! - Repository reference parsing for package manifests.
//! - Static translation tables for notifier messages.

pub mod languages;
mod release;
mod repository;
mod version;

/// Supported notifier languages and their message tables.
pub use languages::{Language, Messages, fill};
/// GitHub release model, release source trait, and HTTP client.
pub use release::{
    DEFAULT_API_BASE, GitHubRelease, GitHubReleaseClient, ReleaseError, ReleaseSource,
};
/// Repository reference parsing (`owner/repo`, GitHub URLs, git remotes).
pub use repository::{GitHubRepository, parse_github_repository};
/// Version parsing and update classification.
pub use version::{VersionComparison, compare, display_version, parse_version};

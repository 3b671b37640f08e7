use crate::{error::VersionError, version::Version};

/// A summary of a repository's current commit relative to its most recent release tag, such as
/// what `git describe --tags --long` reports.
///
/// Discovering these values is up to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepoHead {
    /// The most recent tag reachable from the current commit, or empty if there is none.
    pub last_tag: String,

    /// The number of commits between `last_tag` and the current commit. Zero when the current
    /// commit is the tagged one.
    pub commits_since_tag: u64,

    /// Short identifier of the current commit. Opaque: it is only ever used as build metadata.
    pub hash: String,
}

impl RepoHead {
    /// Creates a new head descriptor.
    pub fn new(last_tag: impl Into<String>, commits_since_tag: u64, hash: impl Into<String>) -> Self {
        Self {
            last_tag: last_tag.into(),
            commits_since_tag,
            hash: hash.into(),
        }
    }

    /// Parses this head into a [`Version`]. Shorthand for [`Version::from_head`].
    ///
    /// ```
    /// use tagver::prelude::*;
    ///
    /// let head = RepoHead::new("v1.2.3", 4, "fcf2c8fa");
    /// let version = head.version("v").unwrap();
    /// assert_eq!("v1.2.4-dev.4+fcf2c8fa", version.to_string());
    /// ```
    pub fn version(&self, expected_prefix: &str) -> Result<Version, VersionError> {
        Version::from_head(self, expected_prefix)
    }
}

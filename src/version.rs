use crate::{
    error::{FormatError, VersionError},
    format::{Format, NamedFormat},
    head::RepoHead,
    target::TargetRelease,
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A Version object represents the state of a repository relative to its latest release tag: the
/// tag's parsed components, plus the commit count and build metadata of the head it came from.
///
/// Versions are created by parsing a [`RepoHead`] with [`Version::from_head`] (or a bare tag with
/// [`Version::parse`]), or built up by hand with [`Version::new`] and the `with_*` methods. Once
/// built, they are never mutated: formatting for a [`TargetRelease`] works on a copy, so the same
/// version can be rendered for several targets.
///
/// # Examples
///
/// ```
/// use tagver::prelude::*;
///
/// let head = RepoHead::new("v1.2.3", 10, "fcf2c8f");
/// let version = Version::from_head(&head, "v").unwrap();
/// assert_eq!("v1.2.4-dev.10+fcf2c8f", version.to_string());
/// assert_eq!("v2.0.0-dev.10", version.format(NO_META_FORMAT, TargetRelease::Major).unwrap());
/// ```
///
/// Or build one directly:
///
/// ```
/// use tagver::prelude::*;
///
/// let version = Version::new(2, 5, 0).with_pre_release("rc.3").with_commits(3);
/// assert_eq!("2.5.0-rc.3.dev.3", version.to_string());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub(crate) prefix: String,
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: String,
    pub(crate) commits: u64,
    pub(crate) meta: String,
}

impl Version {
    /// Returns a version with the given numeric components and nothing else.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    /// Parses a head descriptor into a version.
    ///
    /// The tag must look like `[prefix]MAJOR.MINOR.PATCH[-pre][+meta]`, where the prefix is a run of
    /// ASCII letters, the pre-release is anything up to the first `+`, and the metadata is anything
    /// after it. The commit count always comes from `head`. The metadata comes from the tag when it
    /// has a `+`, and from `head.hash` otherwise.
    ///
    /// If `expected_prefix` is non-empty, the tag's prefix must equal it exactly. An empty
    /// `expected_prefix` accepts any prefix.
    ///
    /// An empty tag has nothing to anchor the commit count and hash to, so it yields the zero
    /// version.
    ///
    /// # Errors
    ///
    /// - [`VersionError::PrefixMismatch`] if `expected_prefix` is given and differs from the tag's.
    /// - [`VersionError::InvalidVersion`] if the tag is otherwise malformed, e.g. `1.2` or `1.a.3`.
    pub fn from_head(head: &RepoHead, expected_prefix: &str) -> Result<Self, VersionError> {
        let tag = head.last_tag.as_str();
        if tag.is_empty() {
            return Ok(Self::default());
        }

        let (prefix, rest) = split_prefix(tag);
        if !expected_prefix.is_empty() && prefix != expected_prefix {
            return Err(VersionError::PrefixMismatch {
                version_string: tag.to_owned(),
                expected: expected_prefix.to_owned(),
                found: prefix.to_owned(),
            });
        }

        let (body, meta) = match rest.split_once('+') {
            Some((body, meta)) => (body, Some(meta)),
            None => (rest, None),
        };
        // only the first `-` delimits, the pre-release may contain more
        let (triplet, pre_release) = body.split_once('-').unwrap_or((body, ""));

        let [major, minor, patch] =
            parse_triplet(triplet).ok_or_else(|| VersionError::InvalidVersion {
                version_string: tag.to_owned(),
            })?;

        Ok(Self {
            prefix: prefix.to_owned(),
            major,
            minor,
            patch,
            pre_release: pre_release.to_owned(),
            commits: head.commits_since_tag,
            meta: meta.unwrap_or(head.hash.as_str()).to_owned(),
        })
    }

    /// Parses a bare tag, as if it were the current commit (no commits since, no hash). Any prefix
    /// is accepted.
    ///
    /// ```
    /// use tagver::Version;
    ///
    /// let version = Version::parse("v1.3.0-rc.3").unwrap();
    /// assert_eq!("v", version.prefix());
    /// assert_eq!("rc.3", version.pre_release());
    /// assert!(Version::parse("v1.3").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Version::from_head`].
    pub fn parse(tag: &str) -> Result<Self, VersionError> {
        Self::from_head(&RepoHead::new(tag, 0, ""), "")
    }

    /// Renders this version with a format template, projecting it towards `target`.
    ///
    /// This is a shorthand for parsing the template with [`Format::parse`] and calling
    /// [`Format::render`]. Parse the [`Format`] once instead when rendering many versions.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if `template` is not a valid template.
    pub fn format(&self, template: &str, target: TargetRelease) -> Result<String, FormatError> {
        Ok(Format::parse(template)?.render(self, target))
    }

    /// Returns a copy of this version with the given prefix.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    /// Returns a copy of this version with the given pre-release text (without the leading `-`).
    pub fn with_pre_release(self, pre_release: impl Into<String>) -> Self {
        Self {
            pre_release: pre_release.into(),
            ..self
        }
    }

    /// Returns a copy of this version with the given number of commits since its tag.
    pub fn with_commits(self, commits: u64) -> Self {
        Self { commits, ..self }
    }

    /// Returns a copy of this version with the given build metadata (without the leading `+`).
    pub fn with_meta(self, meta: impl Into<String>) -> Self {
        Self {
            meta: meta.into(),
            ..self
        }
    }

    /// The letters that preceded the numbers in the tag, usually empty or `v`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The tag's pre-release text, between the first `-` and the first `+`. Empty if absent.
    ///
    /// This is the text as tagged. Any `dev.<commits>` marker only exists in formatted output.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// The number of commits since the tag.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Build metadata: the tag's `+` suffix if it had one, otherwise the commit hash.
    pub fn meta(&self) -> &str {
        &self.meta
    }

    /// Returns true if this version is exactly a tagged release, with no commits after it.
    pub fn is_release(&self) -> bool {
        self.commits == 0
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    /// Displays the version with the full format (`x.y.z-p+m`) and the default target.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = Format::from(NamedFormat::Full);
        f.write_str(&format.render(self, TargetRelease::default()))
    }
}

/// Splits the leading run of ASCII letters off of `tag`.
fn split_prefix(tag: &str) -> (&str, &str) {
    let end = tag
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(tag.len());
    tag.split_at(end)
}

/// Parses exactly three dot-separated decimal numbers.
fn parse_triplet(triplet: &str) -> Option<[u64; 3]> {
    let mut parts = triplet.split('.');
    let mut values = [0; 3];
    for value in values.iter_mut() {
        *value = parse_number(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(values)
}

fn parse_number(s: &str) -> Option<u64> {
    // `u64::from_str` would also take a leading `+`
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

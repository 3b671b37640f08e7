use crate::error::TargetReleaseParseError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The release a version with commits after its tag should be rendered as leading up to.
///
/// When a [`Version`](crate::Version) has commits since its tag and no pre-release of its own,
/// formatting projects it to the next release of this level and marks it with a `dev.<commits>`
/// pre-release. Released versions (zero commits) are rendered as-is whatever the target.
///
/// ```
/// use tagver::prelude::*;
///
/// let version = Version::new(1, 2, 3).with_commits(10);
/// assert_eq!("1.2.4-dev.10", version.format(NO_META_FORMAT, TargetRelease::Patch).unwrap());
/// assert_eq!("1.3.0-dev.10", version.format(NO_META_FORMAT, TargetRelease::Minor).unwrap());
/// assert_eq!("2.0.0-dev.10", version.format(NO_META_FORMAT, TargetRelease::Major).unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRelease {
    /// Keep the version as parsed. Next release bumps the patch.
    #[default]
    Patch,
    /// Next release bumps the minor and resets the patch.
    Minor,
    /// Next release bumps the major and resets the minor and patch.
    Major,
}

impl TargetRelease {
    /// All targets, in ordinal order.
    pub const ALL: [TargetRelease; 3] = [Self::Patch, Self::Minor, Self::Major];

    /// The name of this target, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            TargetRelease::Patch => "patch",
            TargetRelease::Minor => "minor",
            TargetRelease::Major => "major",
        }
    }

    /// Returns the ordinal of this target: `0` for patch, `1` for minor and `2` for major.
    pub fn ordinal(&self) -> u8 {
        match self {
            TargetRelease::Patch => 0,
            TargetRelease::Minor => 1,
            TargetRelease::Major => 2,
        }
    }

    /// Returns the target with the given ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is greater than 2. Ordinals only come from code, never from users, so a
    /// bad one is a bug.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => TargetRelease::Patch,
            1 => TargetRelease::Minor,
            2 => TargetRelease::Major,
            n => panic!("unexpected TargetRelease value {n}"),
        }
    }
}

impl Display for TargetRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetRelease {
    type Err = TargetReleaseParseError;

    /// Parses one of `patch`, `minor` or `major`. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use tagver::prelude::*;
    ///
    /// assert_eq!(Ok(TargetRelease::Minor), "minor".parse());
    /// assert_eq!(Err(TargetReleaseParseError), "Minor".parse::<TargetRelease>());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or(TargetReleaseParseError)
    }
}

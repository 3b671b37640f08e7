use crate::{error::FormatError, target::TargetRelease, version::Version};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use std::borrow::Cow;

/// Everything: `1.2.4-dev.10+fcf2c8f`.
pub const FULL_FORMAT: &str = "x.y.z-p+m";
/// Everything but build metadata: `1.2.4-dev.10`.
pub const NO_META_FORMAT: &str = "x.y.z-p";
/// Just the numbers: `1.2.4`.
pub const NO_PRE_FORMAT: &str = "x.y.z";
/// Major and minor: `1.2`.
pub const NO_PATCH_FORMAT: &str = "x.y";
/// Major only: `1`.
pub const NO_MINOR_FORMAT: &str = "x";

const SEPARATORS: [char; 3] = ['.', '-', '+'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Major,
    Minor,
    Patch,
    PreRelease,
    Meta,
}

impl Field {
    const ALL: [Field; 5] = [
        Field::Major,
        Field::Minor,
        Field::Patch,
        Field::PreRelease,
        Field::Meta,
    ];

    fn pattern(&self) -> char {
        match self {
            Field::Major => 'x',
            Field::Minor => 'y',
            Field::Patch => 'z',
            Field::PreRelease => 'p',
            Field::Meta => 'm',
        }
    }

    /// The separator dropped from the output when this field renders empty.
    fn leading_separator(&self) -> Option<char> {
        match self {
            Field::PreRelease => Some('-'),
            Field::Meta => Some('+'),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatToken {
    Field(Field),
    Separator(char),
}

impl Display for FormatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;
        match self {
            FormatToken::Field(field) => f.write_char(field.pattern()),
            FormatToken::Separator(sep) => f.write_char(*sep),
        }
    }
}

/// The five built-in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedFormat {
    /// [`FULL_FORMAT`]
    Full,
    /// [`NO_META_FORMAT`]
    NoMeta,
    /// [`NO_PRE_FORMAT`]
    NoPre,
    /// [`NO_PATCH_FORMAT`]
    NoPatch,
    /// [`NO_MINOR_FORMAT`]
    NoMinor,
}

impl NamedFormat {
    /// All named formats, from most to least detailed.
    pub const ALL: [NamedFormat; 5] = [
        Self::Full,
        Self::NoMeta,
        Self::NoPre,
        Self::NoPatch,
        Self::NoMinor,
    ];

    /// Returns the template string of this format.
    pub fn template(&self) -> &'static str {
        match self {
            NamedFormat::Full => FULL_FORMAT,
            NamedFormat::NoMeta => NO_META_FORMAT,
            NamedFormat::NoPre => NO_PRE_FORMAT,
            NamedFormat::NoPatch => NO_PATCH_FORMAT,
            NamedFormat::NoMinor => NO_MINOR_FORMAT,
        }
    }
}

impl From<NamedFormat> for Format {
    fn from(named: NamedFormat) -> Self {
        Format::parse(named.template())
            .unwrap_or_else(|_| unreachable!("named format `{}` should parse", named.template()))
    }
}

/// A Format describes how to render a [`Version`], as a sequence of *fields* and *separators*.
///
/// | Character | Renders |
/// |---|---|
/// | `x` | major |
/// | `y` | minor |
/// | `z` | patch |
/// | `p` | pre-release, including any `dev.<commits>` marker |
/// | `m` | build metadata |
/// | `.`, `-`, `+` | itself, except that a `-` right before an empty `p` and a `+` right before an empty `m` are left out |
///
/// The version's prefix is always rendered first. See [`Format::render`] for how commits since the
/// tag affect the output.
///
/// # Example
///
/// ```
/// use tagver::prelude::*;
///
/// let format = Format::parse("x.y-p").unwrap();
/// let version = Version::new(1, 2, 3).with_prefix("v").with_commits(10);
/// assert_eq!("v1.2-dev.10", format.render(&version, TargetRelease::Patch));
/// assert_eq!("v1.2", format.render(&Version::new(1, 2, 3).with_prefix("v"), TargetRelease::Patch));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub(crate) tokens: Vec<FormatToken>,
}

impl Format {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// - [`FormatError::UnknownField`] if the template contains a character other than `x`, `y`,
    ///   `z`, `p`, `m`, `.`, `-` and `+`.
    /// - [`FormatError::NoFields`] if the template contains only separators, or nothing at all.
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut tokens = Vec::with_capacity(template.len());

        for c in template.chars() {
            let token = if let Some(&field) = Field::ALL.iter().find(|f| f.pattern() == c) {
                FormatToken::Field(field)
            } else if SEPARATORS.contains(&c) {
                FormatToken::Separator(c)
            } else {
                return Err(FormatError::UnknownField {
                    template: template.to_owned(),
                    field: c,
                });
            };
            tokens.push(token);
        }

        if !tokens.iter().any(|t| matches!(t, FormatToken::Field(_))) {
            return Err(FormatError::NoFields {
                template: template.to_owned(),
            });
        }

        Ok(Self { tokens })
    }

    /// Renders `version` with this format.
    ///
    /// If the version has commits since its tag, it is not a release, and what gets rendered is a
    /// development version of an upcoming one:
    ///
    /// - Without a pre-release, the version is bumped according to `target` and gets the
    ///   pre-release `dev.<commits>`.
    /// - With a pre-release, the numbers stay put and `.dev.<commits>` is appended to it.
    ///
    /// Versions without commits are rendered as-is, whatever the target. `version` itself is never
    /// modified.
    ///
    /// ```
    /// use tagver::prelude::*;
    ///
    /// let format = Format::from(NamedFormat::Full);
    /// let version = Version::new(1, 2, 3).with_commits(10).with_meta("fcf2c8f");
    /// assert_eq!("1.3.0-dev.10+fcf2c8f", format.render(&version, TargetRelease::Minor));
    ///
    /// let version = Version::new(2, 5, 0).with_pre_release("rc.3").with_commits(3);
    /// assert_eq!("2.5.0-rc.3.dev.3", format.render(&version, TargetRelease::Major));
    /// ```
    pub fn render(&self, version: &Version, target: TargetRelease) -> String {
        let projected = Projected::new(version, target);
        let mut rendered = version.prefix.clone();

        for (idx, token) in self.tokens.iter().enumerate() {
            match token {
                FormatToken::Field(field) => rendered.push_str(&projected.value(field)),
                FormatToken::Separator(sep) => {
                    let suppressed = match self.tokens.get(idx + 1) {
                        Some(FormatToken::Field(next)) => {
                            next.leading_separator() == Some(*sep)
                                && projected.value(next).is_empty()
                        }
                        _ => false,
                    };
                    if !suppressed {
                        rendered.push(*sep);
                    }
                }
            }
        }

        rendered
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Format {
    /// Display a format as its template string.
    ///
    /// ```
    /// use tagver::prelude::*;
    ///
    /// let format = Format::parse("x.y-p").unwrap();
    /// assert_eq!("x.y-p", format.to_string());
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// The values a version renders with once commits since its tag are accounted for.
struct Projected<'v> {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Cow<'v, str>,
    meta: &'v str,
}

impl<'v> Projected<'v> {
    fn new(version: &'v Version, target: TargetRelease) -> Self {
        let mut projected = Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: Cow::Borrowed(version.pre_release.as_str()),
            meta: version.meta.as_str(),
        };

        if version.is_release() {
            return projected;
        }

        if version.pre_release.is_empty() {
            match target {
                TargetRelease::Patch => {
                    projected.patch = projected.patch.saturating_add(1);
                }
                TargetRelease::Minor => {
                    projected.minor = projected.minor.saturating_add(1);
                    projected.patch = 0;
                }
                TargetRelease::Major => {
                    projected.major = projected.major.saturating_add(1);
                    projected.minor = 0;
                    projected.patch = 0;
                }
            }
            projected.pre_release = Cow::Owned(format!("dev.{}", version.commits));
        } else {
            projected.pre_release =
                Cow::Owned(format!("{}.dev.{}", version.pre_release, version.commits));
        }

        projected
    }

    fn value(&self, field: &Field) -> Cow<'_, str> {
        match field {
            Field::Major => Cow::Owned(self.major.to_string()),
            Field::Minor => Cow::Owned(self.minor.to_string()),
            Field::Patch => Cow::Owned(self.patch.to_string()),
            Field::PreRelease => Cow::Borrowed(&*self.pre_release),
            Field::Meta => Cow::Borrowed(self.meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    #[fixture]
    fn dev_version() -> Version {
        Version::new(1, 2, 3).with_commits(10).with_meta("fcf2c8f")
    }

    #[fixture]
    fn versions() -> Vec<Version> {
        vec![
            Version::default(),
            Version::new(0, 3, 1),
            Version::new(0, 3, 1).with_prefix("v"),
            Version::new(1, 3, 0).with_pre_release("rc.3"),
            Version::new(1, 3, 0).with_pre_release("rc.3").with_meta("special"),
            Version::new(2, 5, 0).with_pre_release("rc.3").with_commits(3),
            Version::new(1, 2, 3).with_commits(10).with_meta("fcf2c8f"),
            Version::new(1, 2, 3).with_commits(1),
            Version::new(4, 0, 0).with_prefix("ver").with_meta("gd92f0b2"),
        ]
    }

    #[rstest]
    #[case(FULL_FORMAT, "", TargetRelease::default(), "1.2.4-dev.10+fcf2c8f")]
    #[case(NO_META_FORMAT, "", TargetRelease::default(), "1.2.4-dev.10")]
    #[case(NO_PRE_FORMAT, "", TargetRelease::default(), "1.2.4")]
    #[case(NO_PATCH_FORMAT, "", TargetRelease::default(), "1.2")]
    #[case(NO_MINOR_FORMAT, "v", TargetRelease::default(), "v1")]
    #[case("x.y-p", "v", TargetRelease::default(), "v1.2-dev.10")]
    #[case(FULL_FORMAT, "", TargetRelease::Patch, "1.2.4-dev.10+fcf2c8f")]
    #[case(FULL_FORMAT, "", TargetRelease::Minor, "1.3.0-dev.10+fcf2c8f")]
    #[case(FULL_FORMAT, "", TargetRelease::Major, "2.0.0-dev.10+fcf2c8f")]
    fn test_format(
        dev_version: Version,
        #[case] template: &str,
        #[case] prefix: &str,
        #[case] target: TargetRelease,
        #[case] expected: &str,
    ) {
        let version = dev_version.with_prefix(prefix);
        assert_eq!(Ok(expected.to_string()), version.format(template, target));
    }

    #[rstest]
    #[case("q", 'q')]
    #[case("x.y.z_p", '_')]
    #[case("X.Y.Z", 'X')]
    #[case("x y", ' ')]
    #[case("<MAJOR>", '<')]
    fn test_invalid_format(#[case] template: &str, #[case] field: char) {
        let version = Version::new(1, 2, 3);
        let err = version.format(template, TargetRelease::default()).unwrap_err();
        assert_eq!(
            FormatError::UnknownField {
                template: template.to_owned(),
                field,
            },
            err
        );
        assert_eq!(format!("invalid format: {template}"), err.to_string());
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("-.+")]
    fn test_no_fields(#[case] template: &str) {
        assert_eq!(
            Err(FormatError::NoFields {
                template: template.to_owned()
            }),
            Format::parse(template)
        );
    }

    #[rstest]
    #[case("x.y-p")]
    #[case("m")]
    #[case("p+m")]
    #[case("z.y.x")]
    #[case("x-m")]
    #[case("x.y.z-p.m")]
    #[case("x..y")]
    fn test_custom_format_round_trip(#[case] template: &str) {
        let format: Format = template.parse().unwrap();
        assert_eq!(template, format.to_string());
    }

    #[rstest]
    #[case("p+m", Version::new(1, 0, 0).with_pre_release("rc.1"), "rc.1")]
    #[case("p+m", Version::new(1, 0, 0).with_meta("abc"), "+abc")]
    #[case("x-m", Version::new(1, 0, 0).with_meta("abc"), "1-abc")]
    #[case("x+m", Version::new(1, 0, 0), "1")]
    #[case("x.y.z-p.m", Version::new(1, 0, 0).with_meta("abc"), "1.0.0.abc")]
    #[case("z.y.x", Version::new(1, 2, 3).with_prefix("v"), "v3.2.1")]
    #[case("m", Version::new(1, 2, 3).with_commits(2).with_meta("abc"), "abc")]
    fn test_custom_format_render(
        #[case] template: &str,
        #[case] version: Version,
        #[case] expected: &str,
    ) {
        let format = Format::parse(template).unwrap();
        assert_eq!(expected, format.render(&version, TargetRelease::default()));
    }

    #[test]
    fn test_named_formats_parse() {
        for named in NamedFormat::ALL {
            let format = Format::from(named);
            assert_eq!(named.template(), format.to_string());
        }
    }

    #[rstest]
    fn test_release_ignores_target(versions: Vec<Version>) {
        let releases = versions.iter().filter(|v| v.is_release());
        for (version, named) in releases.cartesian_product(NamedFormat::ALL) {
            let format = Format::from(named);
            let rendered = TargetRelease::ALL
                .iter()
                .map(|target| format.render(version, *target))
                .collect::<Vec<_>>();
            assert!(rendered.iter().all_equal(), "{rendered:?}");
        }
    }

    #[rstest]
    fn test_dev_suffix_once(
        #[values(1, 2, 10, 12345)] commits: u64,
        #[values(TargetRelease::Patch, TargetRelease::Minor, TargetRelease::Major)]
        target: TargetRelease,
    ) {
        let version = Version::new(1, 2, 3).with_commits(commits).with_meta("fcf2c8f");
        let rendered = Format::from(NamedFormat::Full).render(&version, target);
        let suffix = format!("-dev.{commits}+");
        assert_eq!(1, rendered.matches("dev.").count(), "{rendered}");
        assert!(rendered.contains(&suffix), "{rendered}");
    }

    #[rstest]
    fn test_no_dangling_separators(versions: Vec<Version>) {
        let combos = versions
            .iter()
            .cartesian_product(NamedFormat::ALL)
            .cartesian_product(TargetRelease::ALL);
        for ((version, named), target) in combos {
            let rendered = Format::from(named).render(version, target);
            assert!(!rendered.ends_with('-'), "{rendered}");
            assert!(!rendered.ends_with('+'), "{rendered}");
            assert!(!rendered.contains("-+"), "{rendered}");
        }
    }

    #[test]
    fn test_pre_release_gets_dev_appended() {
        let version = Version::new(2, 5, 0).with_pre_release("rc.3").with_commits(3);
        for target in TargetRelease::ALL {
            assert_eq!(
                Ok("2.5.0-rc.3.dev.3".to_string()),
                version.format(NO_META_FORMAT, target)
            );
        }
    }

    #[test]
    fn test_projection_saturates() {
        let version = Version::new(u64::MAX, 0, u64::MAX).with_commits(1);
        assert_eq!(
            Ok(format!("{}.0.{}-dev.1", u64::MAX, u64::MAX)),
            version.format(NO_META_FORMAT, TargetRelease::Patch)
        );
        assert_eq!(
            Ok(format!("{}.0.0-dev.1", u64::MAX)),
            version.format(NO_META_FORMAT, TargetRelease::Major)
        );
    }

    #[test]
    fn test_format_eq() {
        let format1 = Format::parse("x.y").unwrap();
        let format2 = Format::from(NamedFormat::NoPatch);
        assert_eq!(format1, format2);
        assert_ne!(format1, Format::from(NamedFormat::NoMinor));
    }
}

/// Errors that can occur when parsing a tag into a [`Version`](crate::Version).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The tag does not have the shape `[prefix]MAJOR.MINOR.PATCH[-pre][+meta]`.
    #[error("invalid version: {version_string}")]
    InvalidVersion {
        /// The offending tag
        version_string: String,
    },

    /// The tag's alphabetic prefix is not the one the caller asked for.
    #[error("invalid version: {version_string} (expected prefix \"{expected}\", found \"{found}\")")]
    PrefixMismatch {
        /// The offending tag
        version_string: String,
        /// The prefix the caller required
        expected: String,
        /// The prefix actually present in the tag
        found: String,
    },
}

/// Errors that can occur when parsing a format template.
///
/// Every variant displays as `invalid format: <template>`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template contains a character that is neither a field nor a separator.
    #[error("invalid format: {template}")]
    UnknownField {
        /// The offending template
        template: String,
        /// The first character that was not recognized
        field: char,
    },

    /// The template contains no fields at all, so it would render nothing but the prefix.
    #[error("invalid format: {template}")]
    NoFields {
        /// The offending template
        template: String,
    },
}

/// Error returned when a string does not name a [`TargetRelease`](crate::TargetRelease).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("parse error")]
pub struct TargetReleaseParseError;

//! # tagver
//!
//! A library for deriving version strings from a repository's head: its latest release tag, the
//! number of commits since that tag, and the current commit's hash.
//!
//! Tagged commits get the tag's version. Commits after a tag get a development version of the next
//! release, such as `1.2.4-dev.10+fcf2c8f` for the 10th commit after `1.2.3`.
//!
//! ## Examples
//!
//! Parse a head and render it:
//!
//! ```
//! use tagver::prelude::*;
//!
//! let head = RepoHead::new("v1.2.3", 10, "fcf2c8f");
//! let version = head.version("v").unwrap();
//!
//! assert_eq!("v1.2.4-dev.10+fcf2c8f", version.to_string());
//! assert_eq!("v1.3.0-dev.10", version.format(NO_META_FORMAT, TargetRelease::Minor).unwrap());
//! assert_eq!("v1.2", version.format("x.y", TargetRelease::Patch).unwrap());
//! ```
//!
//! Or parse the format once and reuse it:
//!
//! ```
//! use tagver::prelude::*;
//!
//! let format = Format::parse("x.y.z-p").unwrap();
//! for (tag, commits, expected) in [("1.2.3", 0, "1.2.3"), ("1.2.3", 2, "2.0.0-dev.2")] {
//!     let version = RepoHead::new(tag, commits, "").version("").unwrap();
//!     assert_eq!(expected, format.render(&version, TargetRelease::Major));
//! }
//! ```
//!
//! ## Tags
//!
//! Tags look like `[prefix]MAJOR.MINOR.PATCH[-pre][+meta]`:
//!
//! - The prefix is a run of ASCII letters, like `v`. It is kept and rendered back out.
//! - The pre-release is everything between the first `-` and the first `+`, e.g. `rc.1` or
//!   `liftoff-alpha.1`.
//! - The build metadata is everything after the first `+`. Without it, the commit hash is used.
//!
//! This is a practical subset of [SemVer](https://semver.org/) plus the prefix, not a validator
//! for it.
//!
//! ## Formats
//!
//! A format template is made of the fields `x` (major), `y` (minor), `z` (patch), `p`
//! (pre-release) and `m` (metadata), and the separators `.`, `-` and `+`. See [`Format`].
//!
//! | Constant | Template | Example |
//! |---|---|---|
//! | [`FULL_FORMAT`] | `x.y.z-p+m` | `1.2.4-dev.10+fcf2c8f` |
//! | [`NO_META_FORMAT`] | `x.y.z-p` | `1.2.4-dev.10` |
//! | [`NO_PRE_FORMAT`] | `x.y.z` | `1.2.4` |
//! | [`NO_PATCH_FORMAT`] | `x.y` | `1.2` |
//! | [`NO_MINOR_FORMAT`] | `x` | `1` |
//!
//! ## Prelude
//!
//! tagver provides a prelude module for convenience. Use it with:
//!
//! ```
//! use tagver::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod format;
mod head;
mod target;
mod version;

pub use crate::error::{FormatError, TargetReleaseParseError, VersionError};
pub use crate::format::{
    Format, NamedFormat, FULL_FORMAT, NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT,
    NO_PRE_FORMAT,
};
pub use crate::head::RepoHead;
pub use crate::target::TargetRelease;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use tagver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::NamedFormat;
    #[doc(no_inline)]
    pub use crate::RepoHead;
    #[doc(no_inline)]
    pub use crate::TargetRelease;
    #[doc(no_inline)]
    pub use crate::TargetReleaseParseError;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
    #[doc(no_inline)]
    pub use crate::{FULL_FORMAT, NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT, NO_PRE_FORMAT};
}

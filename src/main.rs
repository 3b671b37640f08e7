use clap::{Parser, ValueEnum};
use log::debug;
use tagver::{Format, FormatError, NamedFormat, RepoHead, TargetRelease, VersionError, FULL_FORMAT};

#[derive(thiserror::Error, Debug)]
pub enum TagverCliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Format(#[from] FormatError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum NamedFormatArg {
    Full,
    NoMeta,
    NoPre,
    NoPatch,
    NoMinor,
}

impl NamedFormatArg {
    fn to_named_format(self) -> NamedFormat {
        match self {
            NamedFormatArg::Full => NamedFormat::Full,
            NamedFormatArg::NoMeta => NamedFormat::NoMeta,
            NamedFormatArg::NoPre => NamedFormat::NoPre,
            NamedFormatArg::NoPatch => NamedFormat::NoPatch,
            NamedFormatArg::NoMinor => NamedFormat::NoMinor,
        }
    }
}

/// Prints the version of a repository head, given its latest tag, the number of commits since that
/// tag, and the current commit's hash.
///
/// Feed it the output of `git describe --tags --long`, split into its parts.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The most recent tag reachable from the current commit. Omit if there is none.
    #[arg(default_value = "")]
    tag: String,

    /// Number of commits since the tag
    #[arg(short, long, default_value_t = 0)]
    commits: u64,

    /// Short hash of the current commit, used as build metadata unless the tag has its own
    #[arg(long, default_value = "")]
    hash: String,

    /// Prefix the tag must have, like `v`. Omit to accept any prefix.
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Format template made of `x`, `y`, `z`, `p`, `m` and the separators `.`, `-`, `+`
    #[arg(short, long, default_value = FULL_FORMAT, conflicts_with = "named")]
    format: String,

    /// A named format to use instead of a template
    #[arg(short, long, value_enum)]
    named: Option<NamedFormatArg>,

    /// The release to project development versions towards: `patch`, `minor` or `major`
    #[arg(short, long, default_value_t = TargetRelease::default())]
    target: TargetRelease,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", &cli);

    match do_work(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<String, TagverCliError> {
    let head = RepoHead::new(cli.tag, cli.commits, cli.hash);
    let version = head.version(&cli.prefix)?;
    debug!("parsed {:?} into {:?}", &head, &version);

    let format = match cli.named {
        Some(named) => Format::from(named.to_named_format()),
        None => Format::parse(&cli.format)?,
    };
    Ok(format.render(&version, cli.target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, TagverCliError> {
        let cli = Cli::try_parse_from(std::iter::once("tagver").chain(args.iter().copied())).unwrap();
        do_work(cli)
    }

    #[test]
    fn test_defaults() {
        assert_eq!("0.0.0", run(&[]).unwrap());
        assert_eq!("1.2.3", run(&["1.2.3"]).unwrap());
    }

    #[test]
    fn test_dev_version() {
        let output = run(&["v1.2.3", "--commits", "10", "--hash", "fcf2c8f", "--prefix", "v"]);
        assert_eq!("v1.2.4-dev.10+fcf2c8f", output.unwrap());
    }

    #[test]
    fn test_target_and_format() {
        let output = run(&["1.2.3", "-c", "10", "-t", "major", "-f", "x.y.z-p"]);
        assert_eq!("2.0.0-dev.10", output.unwrap());
    }

    #[test]
    fn test_named_format() {
        let output = run(&["v1.2.3", "-c", "10", "--named", "no-patch"]);
        assert_eq!("v1.2", output.unwrap());
    }

    #[test]
    fn test_bad_target() {
        let res = Cli::try_parse_from(["tagver", "1.2.3", "--target", "foo"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_format_conflicts_with_named() {
        let res = Cli::try_parse_from(["tagver", "-f", "x.y", "-n", "full"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_errors() {
        let err = run(&["1.2"]).unwrap_err();
        assert_eq!("invalid version: 1.2", err.to_string());

        let err = run(&["1.2.3", "-f", "q"]).unwrap_err();
        assert_eq!("invalid format: q", err.to_string());
    }
}

use anyhow::bail;
use clap::Parser;

/// Command-line arguments for the `cuid` binary.
///
/// Every flag can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cuid",
    version,
    about = "Print collision-resistant identifiers"
)]
pub struct CliArgs {
    /// Number of identifiers to print, one per line.
    ///
    /// Environment variable: `CUID_COUNT`
    #[arg(short = 'n', long, env = "CUID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Print short slugs instead of full identifiers.
    ///
    /// Environment variable: `CUID_SLUG`
    #[arg(short, long, env = "CUID_SLUG", default_value_t = false)]
    pub slug: bool,
}

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Cuid,
    Slug,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub count: usize,
    pub kind: Kind,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("CUID_COUNT must be greater than 0");
        }

        Ok(Self {
            count: args.count,
            kind: if args.slug { Kind::Slug } else { Kind::Cuid },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_cuid() {
        let args = CliArgs::try_parse_from(["cuid"]).unwrap();
        let config = CliConfig::try_from(args).unwrap();
        assert_eq!(config.count, 1);
        assert_eq!(config.kind, Kind::Cuid);
    }

    #[test]
    fn parses_count_and_slug() {
        let args = CliArgs::try_parse_from(["cuid", "-n", "5", "--slug"]).unwrap();
        let config = CliConfig::try_from(args).unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.kind, Kind::Slug);
    }

    #[test]
    fn rejects_zero_count() {
        let args = CliArgs::try_parse_from(["cuid", "--count", "0"]).unwrap();
        assert!(CliConfig::try_from(args).is_err());
    }
}

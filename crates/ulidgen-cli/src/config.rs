use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ulidgen::parse_seed;

/// Upper bound on IDs per `generate` invocation.
pub const MAX_COUNT: usize = 1_000_000;

/// Command line arguments for the `ulidgen` binary.
///
/// Generation settings may also come from environment variables (or a
/// `.env` file), with flags taking precedence.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ulidgen",
    version,
    about = "Generate, validate and decode monotonic ULIDs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate ULIDs from a single monotonic stream.
    Generate(GenerateArgs),

    /// Check whether each argument is a structurally valid ULID.
    Validate {
        #[arg(required = true)]
        ulids: Vec<String>,
    },

    /// Print the millisecond timestamp embedded in each argument.
    DecodeTime {
        #[arg(required = true)]
        ulids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Seed timestamp in milliseconds since the Unix epoch.
    ///
    /// Negative or non-numeric values fall back to the current time, as
    /// does omitting the flag.
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Number of IDs to generate.
    ///
    /// Environment variable: `ULIDGEN_COUNT`
    #[arg(long, short = 'n', env = "ULIDGEN_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Where fresh randomness comes from.
    ///
    /// Environment variable: `ULIDGEN_ENTROPY`
    #[arg(long, env = "ULIDGEN_ENTROPY", value_enum, default_value_t = Entropy::Os)]
    pub entropy: Entropy,

    /// Print IDs in lowercase. They remain valid, since decoding is
    /// case-insensitive.
    ///
    /// Environment variable: `ULIDGEN_LOWERCASE`
    #[arg(long, env = "ULIDGEN_LOWERCASE")]
    pub lowercase: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entropy {
    /// Read every draw from the operating system.
    Os,
    /// Use the thread-local CSPRNG, seeded from the operating system.
    Thread,
}

/// Validated settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Generate(GenerateConfig),
    Validate(Vec<String>),
    DecodeTime(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// `None` means "now", per ID.
    pub seed: Option<u64>,
    pub count: usize,
    pub entropy: Entropy,
    pub lowercase: bool,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            Command::Generate(args) => Ok(Self::Generate(GenerateConfig::try_from(args)?)),
            Command::Validate { ulids } => Ok(Self::Validate(ulids)),
            Command::DecodeTime { ulids } => Ok(Self::DecodeTime(ulids)),
        }
    }
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = anyhow::Error;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("--count must be at least 1");
        }
        if args.count > MAX_COUNT {
            bail!("--count must not exceed {MAX_COUNT} (got {})", args.count);
        }

        let seed = args.seed.as_deref().and_then(|raw| {
            let seed = parse_seed(raw);
            if seed.is_none() {
                tracing::debug!(raw, "seed is not a non-negative number, using current time");
            }
            seed
        });

        Ok(Self {
            seed,
            count: args.count,
            entropy: args.entropy,
            lowercase: args.lowercase,
        })
    }
}

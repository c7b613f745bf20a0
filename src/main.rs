use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use versioning_scheme::config::{BumpOptions, NormalizeOptions};
use versioning_scheme::scheme::registry::scheme_for;
use versioning_scheme::scheme::types::SchemeKind;

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "VERSIONING_SCHEME_LOG";

#[derive(Parser)]
#[command(name = "versioning-scheme")]
#[command(version, about = "Validate, normalize, compare and bump version strings")]
struct Cli {
    /// Versioning scheme: monotonic, dotted or perl
    scheme: SchemeKind,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exit successfully if the version is valid
    IsValid { version: String },

    /// Print the canonical form of a version
    Normalize {
        version: String,
        /// Number of segments to truncate or pad to (dotted scheme only)
        #[arg(long, allow_negative_numbers = true)]
        parts: Option<i64>,
    },

    /// Print -1, 0 or 1
    Compare { v1: String, v2: String },

    /// Print the bumped version
    Bump {
        version: String,
        /// Step size, may be negative
        #[arg(long, allow_negative_numbers = true)]
        num: Option<i64>,
        /// Segment to bump; negative values count from the right
        #[arg(long, allow_negative_numbers = true)]
        part: Option<i64>,
        /// Keep less significant segments instead of zeroing them
        #[arg(long)]
        no_reset_smaller: bool,
        /// Bump options as a JSON object, e.g. '{"num": 2, "part": 0}'
        #[arg(long, conflicts_with_all = ["num", "part", "no_reset_smaller"])]
        options: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let scheme = scheme_for(cli.scheme);

    match cli.command {
        Command::IsValid { version } => {
            let valid = scheme.is_valid(&version);
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Normalize { version, parts } => {
            let normalized = scheme.normalize(&version, &NormalizeOptions { parts })?;
            println!("{}", normalized);
        }
        Command::Compare { v1, v2 } => {
            let ordering = scheme.compare(&v1, &v2)?;
            println!("{}", ordering as i8);
        }
        Command::Bump {
            version,
            num,
            part,
            no_reset_smaller,
            options,
        } => {
            let opts = match options {
                Some(json) => serde_json::from_str::<BumpOptions>(&json)
                    .with_context(|| format!("Invalid bump options: {}", json))?,
                None => {
                    let defaults = BumpOptions::default();
                    BumpOptions {
                        num: num.unwrap_or(defaults.num),
                        part: part.unwrap_or(defaults.part),
                        reset_smaller: !no_reset_smaller,
                    }
                }
            };
            println!("{}", scheme.bump(&version, &opts)?);
        }
    }

    Ok(())
}

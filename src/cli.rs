//! Command line: `-input <path> -output <path> -duration <secs> -provider <name>`.
//!
//! Flags are documented with a single dash. clap only knows `--long` flags,
//! so known single-dash names are rewritten before parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DURATION_SECS: u64 = 30;

const LONG_FLAGS: &[&str] = &["input", "output", "duration", "provider", "help", "version"];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "knapsack-mip", version, about = "Solve a 0/1 knapsack instance with a MIP backend.")]
pub struct Args {
    /// Path to input file. Default is stdin.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to output file. Default is stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Max runtime duration (in seconds).
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DURATION_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Solver backend (scip, highs, microlp, gurobi, glpk). Defaults to SCIP when built in.
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,
}

impl Args {
    pub fn parse_from_env() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }
}

/// Rewrites `-input` / `-input=x` to `--input` / `--input=x`. The program
/// name and anything that is not a known flag pass through untouched.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long_flag(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

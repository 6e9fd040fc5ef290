//! # CLI Interface
//!
//! Defines the command-line argument structure for `votechain` using
//! `clap` derive. Supports three subcommands: `run`, `verify`, and
//! `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Append-only hash chain for tamper-evident vote records.
///
/// Builds an in-memory chain from votes given on the command line, prints
/// it as JSON, and reports whether it validates. Exported chains can be
/// checked again later with `verify`.
#[derive(Parser, Debug)]
#[command(
    name = "votechain",
    about = "Append-only hash chain for tamper-evident vote records",
    version,
    propagate_version = true
)]
pub struct VotechainCli {
    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "VOTECHAIN_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format. Logs always go to stderr.
    #[arg(
        long,
        global = true,
        env = "VOTECHAIN_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain from votes, print it, and validate it.
    Run(RunArgs),
    /// Validate a chain previously exported as JSON.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Vote to record, as `VOTER_ID:CHOICE`. Repeat for more votes; they
    /// are appended in the order given.
    ///
    /// When omitted, two sample votes are recorded:
    /// `000.000.000-00:22` and `000.000.000-01:13`.
    #[arg(long = "vote", short = 'v', value_parser = parse_vote)]
    pub votes: Vec<VoteArg>,

    /// Write the chain JSON to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Path to a JSON chain export.
    pub input: PathBuf,
}

/// A `VOTER_ID:CHOICE` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteArg {
    pub voter_id: String,
    pub choice: i64,
}

/// Votes recorded by `run` when none are given.
pub fn sample_votes() -> Vec<VoteArg> {
    vec![
        VoteArg {
            voter_id: "000.000.000-00".to_string(),
            choice: 22,
        },
        VoteArg {
            voter_id: "000.000.000-01".to_string(),
            choice: 13,
        },
    ]
}

/// Parse `VOTER_ID:CHOICE`, splitting on the last colon so identifiers
/// may contain colons themselves.
fn parse_vote(s: &str) -> Result<VoteArg, String> {
    let (voter_id, choice) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected VOTER_ID:CHOICE, got '{}'", s))?;
    let choice = choice
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid choice '{}': {}", choice, e))?;
    Ok(VoteArg {
        voter_id: voter_id.to_string(),
        choice,
    })
}

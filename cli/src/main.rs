// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # votechain
//!
//! Entry point for the `votechain` binary. Parses CLI arguments,
//! initializes logging, and dispatches to a subcommand:
//!
//! - `run`     - build a chain from votes, print it, validate it
//! - `verify`  - validate a chain exported as JSON
//! - `version` - print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;

use votechain::config::{DIGEST_ALGORITHM, PROTOCOL_VERSION};
use votechain::Chain;

use cli::{Commands, VotechainCli};

fn main() -> Result<ExitCode> {
    let cli = VotechainCli::parse();

    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Run(args) => run_chain(args),
        Commands::Verify(args) => verify_chain(args),
        Commands::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Builds a chain from the given votes, emits it as JSON, and prints the
/// validation verdict.
fn run_chain(args: cli::RunArgs) -> Result<ExitCode> {
    let votes = if args.votes.is_empty() {
        cli::sample_votes()
    } else {
        args.votes
    };

    let mut chain = Chain::new();
    for vote in votes {
        chain
            .append(vote.voter_id, vote.choice)
            .context("failed to append vote")?;
    }
    tracing::info!(blocks = chain.len(), "chain built");

    let json = chain.to_json().context("failed to serialize chain")?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("failed to write chain to {}", path.display()))?;
            tracing::info!(path = %path.display(), "chain written");
        }
        None => println!("{}", json),
    }

    Ok(report(chain.validate()))
}

/// Loads a JSON chain export and validates it.
fn verify_chain(args: cli::VerifyArgs) -> Result<ExitCode> {
    let path = &args.input;
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let chain = Chain::from_json(&json)
        .with_context(|| format!("failed to parse chain from {}", path.display()))?;

    tracing::info!(blocks = chain.len(), path = %path.display(), "chain loaded");

    let verdict = chain.verify();
    if let Err(e) = &verdict {
        eprintln!("error: {}", e);
    }

    Ok(report(verdict.is_ok()))
}

/// Prints the verdict line and maps it to the process exit status.
fn report(valid: bool) -> ExitCode {
    println!("Valid Blockchain: {}", valid);
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints version information to stdout.
fn print_version() {
    println!("votechain {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", PROTOCOL_VERSION);
    println!("digest    {}", DIGEST_ALGORITHM);
}

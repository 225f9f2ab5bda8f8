//! bls381-calldata CLI - Groth16/BLS12-381 calldata and beacon-chain tooling
//!
//! This CLI reformats snarkjs proof and verification-key JSON into the word
//! format an on-chain BLS12-381 pairing-check verifier consumes, and prepares
//! beacon-chain validator data for BLS aggregation experiments.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{beacon, proof, verification_key};
use console::style;

/// CLI for Groth16/BLS12-381 verifier calldata
#[derive(Parser)]
#[command(name = "bls381-calldata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a proof and its public signals as verifier calldata
    Proof(proof::ProofArgs),

    /// Export a verification key in verifier word format
    VerificationKey(verification_key::VerificationKeyArgs),

    /// Beacon-chain validator and attestation tooling
    #[command(subcommand)]
    Beacon(beacon::BeaconCommands),
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Proof(args) => proof::run(args),
        Commands::VerificationKey(args) => verification_key::run(args),
        Commands::Beacon(cmd) => beacon::run(cmd),
    };

    // Handle errors nicely
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

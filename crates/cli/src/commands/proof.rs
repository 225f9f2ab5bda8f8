//! Proof command - export a proof and its public signals as calldata

use crate::commands::{read_document, write_document};
use crate::CommonArgs;
use anyhow::Result;
use bls381_calldata_core::proof_export;
use clap::Args;
use console::style;
use log::info;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProofArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to proof.json (snarkjs `groth16 prove` output)
    proof: PathBuf,

    /// Path to public.json (ordered public signal list)
    public: PathBuf,

    /// Path to write the calldata document
    output: PathBuf,

    /// Prepend the implicit constant-one public signal
    #[arg(long)]
    prepend_one: bool,
}

pub fn run(args: ProofArgs) -> Result<()> {
    let proof_json = read_document(&args.proof, "proof")?;
    let public_json = read_document(&args.public, "public signals")?;

    let document = proof_export(&proof_json, &public_json, args.prepend_one)?;
    info!(
        "encoded {} public signals, calldata is {} hex chars",
        document.pub_signals.len(),
        document.calldata.len()
    );

    write_document(&args.output, &document)?;

    if !args.common.quiet {
        println!(
            "{} Calldata written to {:?}",
            style("✓").green().bold(),
            args.output
        );
    }
    Ok(())
}

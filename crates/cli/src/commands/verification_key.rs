//! Verification-key command - export a key in verifier word format

use crate::commands::{read_document, write_document};
use crate::CommonArgs;
use anyhow::Result;
use bls381_calldata_core::verification_key_export;
use clap::Args;
use console::style;
use log::info;
use std::path::PathBuf;

#[derive(Args)]
pub struct VerificationKeyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to verification_key.json (snarkjs export)
    vk: PathBuf,

    /// Path to write the encoded key document
    output: PathBuf,

    /// Optional proof.json; bundles calldata with the key
    #[arg(long, requires = "public")]
    proof: Option<PathBuf>,

    /// Optional public.json, required alongside --proof
    #[arg(long, requires = "proof")]
    public: Option<PathBuf>,

    /// Prepend the implicit constant-one public signal
    #[arg(long)]
    prepend_one: bool,
}

pub fn run(args: VerificationKeyArgs) -> Result<()> {
    let vk_json = read_document(&args.vk, "verification key")?;

    let bundle = match (&args.proof, &args.public) {
        (Some(proof), Some(public)) => Some((
            read_document(proof, "proof")?,
            read_document(public, "public signals")?,
        )),
        _ => None,
    };

    let export = verification_key_export(
        &vk_json,
        bundle.as_ref().map(|(p, s)| (p.as_str(), s.as_str())),
        args.prepend_one,
    )?;
    info!("encoded verification key with {} ic entries", export.ic.len());

    write_document(&args.output, &export)?;

    if !args.common.quiet {
        println!(
            "{} Verification key written to {:?}",
            style("✓").green().bold(),
            args.output
        );
    }
    Ok(())
}

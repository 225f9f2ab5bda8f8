//! Beacon subcommands - validator lookup planning, response merging, and
//! public-key aggregation

use crate::commands::{read_document, write_document};
use crate::config::{ApiArgs, Config};
use crate::CommonArgs;
use anyhow::Result;
use beacon_bls::{
    aggregation_document, lookup_plan, merge_lookup_responses, AttestationsDocument,
    ValidatorLookupResponse, ValidatorSet,
};
use clap::{Args, Subcommand};
use console::style;
use log::info;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum BeaconCommands {
    /// Plan validator lookup requests for an attestation
    Batches(BatchesArgs),

    /// Merge validator lookup responses into a validator-set document
    Collect(CollectArgs),

    /// Aggregate validator pubkeys and decompress the attestation signature
    Aggregate(AggregateArgs),
}

#[derive(Args)]
pub struct BatchesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Path to the attestations document
    attestations: PathBuf,

    /// Path to write the request plan
    output: PathBuf,

    /// Which attestation in the document to use
    #[arg(long, default_value_t = 0)]
    attestation_index: usize,
}

#[derive(Args)]
pub struct CollectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the attestations document
    attestations: PathBuf,

    /// Path to write the merged validator set
    output: PathBuf,

    /// Lookup response files, in request order (repeatable)
    #[arg(long = "response", required = true)]
    responses: Vec<PathBuf>,

    /// Which attestation in the document to use
    #[arg(long, default_value_t = 0)]
    attestation_index: usize,
}

#[derive(Args)]
pub struct AggregateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the merged validator-set document
    validators: PathBuf,

    /// Path to the attestations document (supplies the signature)
    attestations: PathBuf,

    /// Path to write the aggregation document
    output: PathBuf,

    /// Which attestation in the document to use
    #[arg(long, default_value_t = 0)]
    attestation_index: usize,
}

pub fn run(cmd: BeaconCommands) -> Result<()> {
    match cmd {
        BeaconCommands::Batches(args) => batches(args),
        BeaconCommands::Collect(args) => collect(args),
        BeaconCommands::Aggregate(args) => aggregate(args),
    }
}

fn batches(args: BatchesArgs) -> Result<()> {
    let config = Config::load(&args.api)?;

    let attestations =
        AttestationsDocument::from_json(&read_document(&args.attestations, "attestations")?)?;
    let attestation = attestations.attestation(args.attestation_index)?;

    let plan = lookup_plan(attestation, &config.api_base, config.api_key.as_deref());
    info!(
        "planned {} lookup requests for {} validators",
        plan.requests.len(),
        attestation.validators.len()
    );

    write_document(&args.output, &plan)?;

    if !args.common.quiet {
        println!(
            "{} Request plan written to {:?}",
            style("✓").green().bold(),
            args.output
        );
    }
    Ok(())
}

fn collect(args: CollectArgs) -> Result<()> {
    let attestations =
        AttestationsDocument::from_json(&read_document(&args.attestations, "attestations")?)?;
    let attestation = attestations.attestation(args.attestation_index)?;

    let responses = args
        .responses
        .iter()
        .map(|path| {
            let json = read_document(path, "lookup response")?;
            Ok(ValidatorLookupResponse::from_json(&json)?)
        })
        .collect::<Result<Vec<_>>>()?;

    let set = merge_lookup_responses(attestation, &responses);
    info!(
        "merged {} validators for block slot {}",
        set.validators.len(),
        set.block_slot
    );

    write_document(&args.output, &set)?;

    if !args.common.quiet {
        println!(
            "{} Validator set written to {:?}",
            style("✓").green().bold(),
            args.output
        );
    }
    Ok(())
}

fn aggregate(args: AggregateArgs) -> Result<()> {
    let set = ValidatorSet::from_json(&read_document(&args.validators, "validator set")?)?;
    let attestations =
        AttestationsDocument::from_json(&read_document(&args.attestations, "attestations")?)?;
    let attestation = attestations.attestation(args.attestation_index)?;

    let document = aggregation_document(&set, attestation)?;
    info!(
        "aggregated {} validator pubkeys for block slot {}",
        document.validator_count, document.block_slot
    );

    write_document(&args.output, &document)?;

    if !args.common.quiet {
        println!(
            "{} Aggregation document written to {:?}",
            style("✓").green().bold(),
            args.output
        );
    }
    Ok(())
}

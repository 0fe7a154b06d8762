use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, span, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use seqalign::aligner::{align, print_alignment, AlignmentMode, AlignmentResult};
use seqalign::errors::AlignError;
use seqalign::io::load_sequences;
use seqalign::pairwise::{align_all_pairs, PairwiseRecord};

mod cli;

use cli::{AlignArgs, AlignmentOptions, CliArgs, CliSubcommand, OutputType, PairwiseArgs};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();
}

fn open_output(options: &AlignmentOptions) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(path) = &options.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        Box::new(File::create(path)
            .map(BufWriter::new)
            .with_context(|| format!("Could not create output file {path:?}"))?)
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    Ok(writer)
}

fn max_align_length(options: &AlignmentOptions) -> usize {
    usize::try_from(options.max_align_length).unwrap_or(usize::MAX)
}

fn write_result(writer: &mut impl Write, result: &AlignmentResult, output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Text => {
            writeln!(writer, "Alignment cost: {}", result.alignment_cost)?;
            writeln!(writer, "{}", print_alignment(result))?;
        },
        OutputType::Json => writeln!(writer, "{}", serde_json::to_string(result)?)?,
    }

    Ok(())
}

fn write_pairwise_record(writer: &mut impl Write, record: &PairwiseRecord, output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Text => writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            record.first_name,
            record.second_name,
            record.result.alignment_cost,
            record.result.first_sequence_aligned,
            record.result.second_sequence_aligned,
        )?,
        OutputType::Json => writeln!(writer, "{}", serde_json::to_string(record)?)?,
    }

    Ok(())
}

fn align_subcommand(args: &AlignArgs) -> Result<()> {
    let span = span!(Level::INFO, "align_subcommand");
    let _enter = span.enter();

    let mode = AlignmentMode::from_banded(args.options.banded);
    let result = align(args.first.as_bytes(), args.second.as_bytes(), mode, max_align_length(&args.options));
    info!("Done. Alignment cost: {}", result.alignment_cost);

    let mut writer = open_output(&args.options)?;
    write_result(&mut writer, &result, args.options.output_type)?;
    writer.flush()?;

    Ok(())
}

fn pairwise_subcommand(args: &PairwiseArgs) -> Result<()> {
    let span = span!(Level::INFO, "pairwise_subcommand");
    let _enter = span.enter();

    let records = load_sequences(&args.sequences)
        .with_context(|| format!("Could not load sequences from {:?}", args.sequences))?;

    let mode = AlignmentMode::from_banded(args.options.banded);
    let output = align_all_pairs(&records, mode, max_align_length(&args.options), args.num_threads)?;

    let num_aligned = output.iter().filter(|r| r.result.is_aligned()).count();
    info!("Done. Aligned {num_aligned} of {} pairs.", output.len());

    let mut writer = open_output(&args.options)?;
    for record in &output {
        write_pairwise_record(&mut writer, record, args.options.output_type)?;
    }
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(CliSubcommand::Align(v)) => align_subcommand(v)?,
        Some(CliSubcommand::Pairwise(v)) => pairwise_subcommand(v)?,
        None => return Err(AlignError::Other).with_context(|| "No subcommand given.".to_string()),
    };

    Ok(())
}

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};


/// The output formats supported by seqalign
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Human readable alignment view
    #[default]
    Text,

    /// One JSON object per alignment
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Align two sequences given on the command line
    Align(AlignArgs),

    /// Align all pairs of sequences from a FASTA file
    Pairwise(PairwiseArgs),
}

#[derive(Args, Debug)]
pub struct AlignmentOptions {
    /// Only fill a band of 7 diagonals around the main diagonal. Requires the (truncated)
    /// sequence lengths to differ by at most 3.
    #[arg(short, long)]
    #[clap(help_heading = "Alignment configuration")]
    pub banded: bool,

    /// Number of leading characters of each sequence to align
    #[arg(short = 'l', long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    #[clap(help_heading = "Alignment configuration")]
    pub max_align_length: u64,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// First sequence
    #[clap(help_heading = "Inputs")]
    pub first: String,

    /// Second sequence
    #[clap(help_heading = "Inputs")]
    pub second: String,

    #[command(flatten)]
    pub options: AlignmentOptions,
}

#[derive(Args, Debug)]
pub struct PairwiseArgs {
    /// Sequences to align in FASTA format, optionally gzipped.
    #[clap(help_heading = "Inputs")]
    pub sequences: PathBuf,

    /// Number of alignment threads
    #[arg(short = 't', long, default_value = "1")]
    pub num_threads: NonZeroUsize,

    #[command(flatten)]
    pub options: AlignmentOptions,
}

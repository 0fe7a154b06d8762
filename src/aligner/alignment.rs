use serde::Serialize;

use crate::aligner::scoring::Score;
use crate::aligner::traceback::{render_gapped, AlignmentSummary, EditOp, RENDER_LIMIT};

/// Marker reported in place of both aligned sequences when no alignment could be computed.
pub const NO_ALIGNMENT: &str = "No Alignment Possible";

/// An optimal alignment path together with its cost
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub score: Score,

    /// Edit operations from the start of both sequences to their end
    pub ops: Vec<EditOp>,
}

impl Alignment {
    pub fn summary(&self, seq1: &[u8], seq2: &[u8]) -> AlignmentSummary {
        AlignmentSummary::from_ops(seq1, seq2, &self.ops)
    }
}

/// Alignment cost and the first columns of both gapped sequences, as reported to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    pub alignment_cost: Score,
    pub first_sequence_aligned: String,
    pub second_sequence_aligned: String,
}

impl AlignmentResult {
    pub fn from_alignment(seq1: &[u8], seq2: &[u8], alignment: &Alignment) -> Self {
        let (first, second) = render_gapped(seq1, seq2, &alignment.ops, RENDER_LIMIT);

        Self {
            alignment_cost: alignment.score,
            first_sequence_aligned: first,
            second_sequence_aligned: second,
        }
    }

    pub fn no_alignment() -> Self {
        Self {
            alignment_cost: Score::Infinite,
            first_sequence_aligned: NO_ALIGNMENT.to_string(),
            second_sequence_aligned: NO_ALIGNMENT.to_string(),
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.alignment_cost.is_finite()
    }
}


/// Three-line view of an alignment result: first sequence, a marker line (`|` for matches,
/// `*` for substitutions), and the second sequence.
pub fn print_alignment(result: &AlignmentResult) -> String {
    if !result.is_aligned() {
        return format!("{}\n\n{}", result.first_sequence_aligned, result.second_sequence_aligned);
    }

    let aln_chars: String = result.first_sequence_aligned.chars()
        .zip(result.second_sequence_aligned.chars())
        .map(|(a, b)| match (a, b) {
            ('-', _) | (_, '-') => ' ',
            (a, b) if a == b => '|',
            _ => '*',
        })
        .collect();

    format!(
        "{}\n{}\n{}",
        result.first_sequence_aligned,
        aln_chars,
        result.second_sequence_aligned,
    )
}

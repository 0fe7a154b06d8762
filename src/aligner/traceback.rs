//! Rendering of edit operation paths recovered from a filled DP matrix.

use serde::Serialize;

/// Number of alignment columns included in the rendered, gapped sequences.
pub const RENDER_LIMIT: usize = 100;

/// A single step along an alignment path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// Match or substitution, consumes a character of both sequences
    Diagonal,

    /// Horizontal move: a character of the second sequence aligned to a gap in the first
    GapInFirst,

    /// Vertical move: a character of the first sequence aligned to a gap in the second
    GapInSecond,
}

/// Render both sequences with gaps inserted according to `ops`, stopping after `limit` columns
/// or when the operations run out, whichever comes first.
pub fn render_gapped(seq1: &[u8], seq2: &[u8], ops: &[EditOp], limit: usize) -> (String, String) {
    let mut first = Vec::with_capacity(ops.len().min(limit));
    let mut second = Vec::with_capacity(ops.len().min(limit));

    let mut pos1 = 0;
    let mut pos2 = 0;
    for op in ops.iter().take(limit) {
        match op {
            EditOp::Diagonal => {
                first.push(seq1[pos1]);
                second.push(seq2[pos2]);
                pos1 += 1;
                pos2 += 1;
            },
            EditOp::GapInFirst => {
                first.push(b'-');
                second.push(seq2[pos2]);
                pos2 += 1;
            },
            EditOp::GapInSecond => {
                first.push(seq1[pos1]);
                second.push(b'-');
                pos1 += 1;
            },
        }
    }

    (
        String::from_utf8_lossy(&first).into_owned(),
        String::from_utf8_lossy(&second).into_owned(),
    )
}

/// Edit operation counts along a complete alignment path
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentSummary {
    pub matches: usize,
    pub substitutions: usize,
    pub gaps_in_first: usize,
    pub gaps_in_second: usize,
}

impl AlignmentSummary {
    pub fn from_ops(seq1: &[u8], seq2: &[u8], ops: &[EditOp]) -> Self {
        let mut summary = Self::default();

        let mut pos1 = 0;
        let mut pos2 = 0;
        for op in ops {
            match op {
                EditOp::Diagonal => {
                    if seq1[pos1] == seq2[pos2] {
                        summary.matches += 1;
                    } else {
                        summary.substitutions += 1;
                    }
                    pos1 += 1;
                    pos2 += 1;
                },
                EditOp::GapInFirst => {
                    summary.gaps_in_first += 1;
                    pos2 += 1;
                },
                EditOp::GapInSecond => {
                    summary.gaps_in_second += 1;
                    pos1 += 1;
                }
            }
        }

        summary
    }

    pub fn num_columns(&self) -> usize {
        self.matches + self.substitutions + self.gaps_in_first + self.gaps_in_second
    }
}

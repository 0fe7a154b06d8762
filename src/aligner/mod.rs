pub mod scoring;
pub mod alignment;
pub mod traceback;
pub mod full;
pub mod banded;

use tracing::{debug, warn};

pub use alignment::{print_alignment, Alignment, AlignmentResult, NO_ALIGNMENT};
pub use banded::{BandedAligner, MAX_INDELS};
pub use full::FullAligner;
use crate::errors::AlignError;


/// Pairwise aligners computing a minimum-cost edit path between two sequences
pub trait PairwiseAligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<Alignment, AlignError>;
}

/// Which DP matrix to fill
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Fill the complete matrix, guaranteed to find the optimal alignment
    #[default]
    Full,

    /// Only fill a narrow band around the main diagonal
    Banded,
}

impl AlignmentMode {
    pub fn from_banded(banded: bool) -> Self {
        if banded { Self::Banded } else { Self::Full }
    }
}

/// Restrict a sequence to the prefix that takes part in the alignment
pub fn truncate(seq: &[u8], max_align_length: usize) -> &[u8] {
    &seq[..seq.len().min(max_align_length)]
}

/// Align the first `max_align_length` characters of both sequences.
///
/// Returns the alignment cost and the first columns of both gapped sequences. If banded
/// alignment is requested for sequences whose lengths are too far apart, the cost is infinite
/// and both sequences are replaced by [`NO_ALIGNMENT`].
pub fn align(seq1: &[u8], seq2: &[u8], mode: AlignmentMode, max_align_length: usize) -> AlignmentResult {
    let seq1 = truncate(seq1, max_align_length);
    let seq2 = truncate(seq2, max_align_length);

    let alignment = match mode {
        AlignmentMode::Full => FullAligner::default().align(seq1, seq2),
        AlignmentMode::Banded => BandedAligner::default().align(seq1, seq2),
    };

    match alignment {
        Ok(aln) => AlignmentResult::from_alignment(seq1, seq2, &aln),
        Err(e @ AlignError::BandingInfeasible { .. }) => {
            debug!("{e}");
            AlignmentResult::no_alignment()
        },
        Err(e) => {
            warn!("Alignment failed: {e}");
            AlignmentResult::no_alignment()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{align, truncate, AlignmentMode, NO_ALIGNMENT};
    use crate::aligner::scoring::Score;

    #[test]
    fn test_concrete_scenarios() {
        let result = align(b"AAA", b"AAA", AlignmentMode::Full, 3);
        assert_eq!(result.alignment_cost, Score::Score(-9));
        assert_eq!(result.first_sequence_aligned, "AAA");
        assert_eq!(result.second_sequence_aligned, "AAA");

        let result = align(b"AAA", b"AAT", AlignmentMode::Full, 3);
        assert_eq!(result.alignment_cost, Score::Score(-5));
        assert_eq!(result.first_sequence_aligned, "AAA");
        assert_eq!(result.second_sequence_aligned, "AAT");

        let result = align(b"AC", b"A", AlignmentMode::Full, 2);
        assert_eq!(result.alignment_cost, Score::Score(2));
        assert_eq!(result.first_sequence_aligned, "AC");
        assert_eq!(result.second_sequence_aligned, "A-");
    }

    #[test]
    fn test_truncation() {
        assert_eq!(truncate(b"ACGT", 2), b"AC");
        assert_eq!(truncate(b"ACGT", 10), b"ACGT");

        // Only the first three characters take part
        let result = align(b"AAAGGG", b"AAACCCCC", AlignmentMode::Full, 3);
        assert_eq!(result.alignment_cost, Score::Score(-9));
        assert_eq!(result.first_sequence_aligned, "AAA");

        // Length difference past the truncation point doesn't matter for banding
        let result = align(b"AAAGGGGGGGG", b"AAA", AlignmentMode::Banded, 3);
        assert_eq!(result.alignment_cost, Score::Score(-9));
    }

    #[test]
    fn test_self_alignment() {
        let seq = b"GATTACACCGTAGGCTAGCTAGGATCCAGT";

        for max_len in [1, 5, 17, seq.len(), 100] {
            let result = align(seq, seq, AlignmentMode::Full, max_len);
            let n = max_len.min(seq.len());

            assert_eq!(result.alignment_cost, Score::Score(-3 * n as i32));
            assert_eq!(result.first_sequence_aligned.as_bytes(), &seq[..n]);
            assert_eq!(result.first_sequence_aligned, result.second_sequence_aligned);
        }
    }

    #[test]
    fn test_render_limit() {
        let seq1 = "ACGT".repeat(60);
        let seq2 = format!("T{}", "ACGT".repeat(60));

        for mode in [AlignmentMode::Full, AlignmentMode::Banded] {
            let result = align(seq1.as_bytes(), seq2.as_bytes(), mode, 1000);
            assert!(result.alignment_cost.is_finite());
            assert_eq!(result.first_sequence_aligned.len(), 100);
            assert_eq!(result.second_sequence_aligned.len(), 100);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"GATTACA", b"GCATGCT"),
            (b"ACGTTTGCAT", b"ACGTGCAT"),
            (b"TTTT", b"AAAAAAA"),
            (b"", b"CAT"),
        ];

        for (seq1, seq2) in pairs {
            for mode in [AlignmentMode::Full, AlignmentMode::Banded] {
                let forward = align(seq1, seq2, mode, 100);
                let reverse = align(seq2, seq1, mode, 100);
                assert_eq!(forward.alignment_cost, reverse.alignment_cost);
            }
        }
    }

    #[test]
    fn test_banded_infeasible() {
        let result = align(b"ACGTACGT", b"ACGT", AlignmentMode::Banded, 100);
        assert_eq!(result.alignment_cost, Score::Infinite);
        assert_eq!(result.first_sequence_aligned, NO_ALIGNMENT);
        assert_eq!(result.second_sequence_aligned, NO_ALIGNMENT);

        let result = align(b"A", b"CCCCCCCCC", AlignmentMode::Banded, 100);
        assert_eq!(result.alignment_cost, Score::Infinite);

        // Full mode has no such restriction
        let result = align(b"ACGTACGT", b"ACGT", AlignmentMode::Full, 100);
        assert_eq!(result.alignment_cost, Score::Score(-12 + 20));
    }

    #[test]
    fn test_empty_input() {
        for mode in [AlignmentMode::Full, AlignmentMode::Banded] {
            let result = align(b"", b"", mode, 10);
            assert_eq!(result.alignment_cost, Score::Score(0));
            assert!(result.first_sequence_aligned.is_empty());
            assert!(result.second_sequence_aligned.is_empty());
        }
    }

    #[test]
    fn test_idempotent() {
        let seq1 = b"CTGACTAGCTAGCATCGACTAGCATCGACTAGCATCGA";
        let seq2 = b"CTGACTAGCTTGCATCGACTGCATCGAGTAGCATCGA";

        for mode in [AlignmentMode::Full, AlignmentMode::Banded] {
            assert_eq!(align(seq1, seq2, mode, 30), align(seq1, seq2, mode, 30));
        }
    }
}

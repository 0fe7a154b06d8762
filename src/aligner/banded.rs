//! Alignment restricted to a fixed-width band around the main diagonal.
//!
//! Row `i` of the band matrix stores the true DP columns `max(0, i - K) ..= max(0, i - K) + 2K`.
//! Up to row `K` the band is anchored at true column 0 and clipped on the right; after that
//! the band shifts one column to the right with every row. Consequently, the up and diagonal
//! neighbours of a cell sit at band column `j + 1` and `j` in rows past `K`, and at `j` and
//! `j - 1` before.

use tracing::{debug, debug_span, trace};

use crate::aligner::alignment::Alignment;
use crate::aligner::scoring::{Direction, EditCosts, Score};
use crate::aligner::traceback::EditOp;
use crate::aligner::PairwiseAligner;
use crate::errors::AlignError;

/// Maximum number of unmatched indels, i.e., the band extends `MAX_INDELS` diagonals to
/// each side of the main diagonal.
pub const MAX_INDELS: usize = 3;

const BAND_WIDTH: usize = 2 * MAX_INDELS + 1;

/// Band scores and their back-pointer directions, both `(len1 + 1) x BAND_WIDTH`.
struct BandedMatrix {
    rows: usize,
    len2: usize,
    scores: Vec<Score>,
    directions: Vec<Direction>,
}

impl BandedMatrix {
    fn new(len1: usize, len2: usize) -> Self {
        let rows = len1 + 1;

        Self {
            rows,
            len2,
            scores: vec![Score::Infinite; rows * BAND_WIDTH],
            directions: vec![Direction::None; rows * BAND_WIDTH],
        }
    }

    /// True column represented by band column 0 in the given row
    #[inline]
    fn band_offset(row: usize) -> usize {
        row.saturating_sub(MAX_INDELS)
    }

    #[inline]
    fn true_col(row: usize, band_col: usize) -> usize {
        Self::band_offset(row) + band_col
    }

    fn band_col(row: usize, true_col: usize) -> Option<usize> {
        true_col.checked_sub(Self::band_offset(row))
            .filter(|&j| j < BAND_WIDTH)
    }

    fn is_valid(&self, row: usize, band_col: usize) -> bool {
        if row >= self.rows || band_col >= BAND_WIDTH {
            return false;
        }

        let col = Self::true_col(row, band_col);
        col <= self.len2 && col.abs_diff(row) <= MAX_INDELS
    }

    /// Score of a band cell, `Infinite` for positions outside the band.
    #[inline]
    fn score(&self, row: usize, band_col: usize) -> Score {
        if self.is_valid(row, band_col) {
            self.scores[row * BAND_WIDTH + band_col]
        } else {
            Score::Infinite
        }
    }

    #[inline]
    fn direction(&self, row: usize, band_col: usize) -> Direction {
        self.directions[row * BAND_WIDTH + band_col]
    }

    #[inline]
    fn set(&mut self, row: usize, band_col: usize, score: Score, direction: Direction) {
        self.scores[row * BAND_WIDTH + band_col] = score;
        self.directions[row * BAND_WIDTH + band_col] = direction;
    }

    /// Band coordinates of the up neighbour
    #[inline]
    fn up_of(row: usize, band_col: usize) -> Option<(usize, usize)> {
        let prev = row.checked_sub(1)?;
        if row > MAX_INDELS {
            Some((prev, band_col + 1))
        } else {
            Some((prev, band_col))
        }
    }

    /// Band coordinates of the diagonal neighbour
    #[inline]
    fn diag_of(row: usize, band_col: usize) -> Option<(usize, usize)> {
        let prev = row.checked_sub(1)?;
        if row > MAX_INDELS {
            Some((prev, band_col))
        } else {
            Some((prev, band_col.checked_sub(1)?))
        }
    }

    #[inline]
    fn left_of(row: usize, band_col: usize) -> Option<(usize, usize)> {
        Some((row, band_col.checked_sub(1)?))
    }

    fn score_at(&self, pos: Option<(usize, usize)>) -> Score {
        pos.map_or(Score::Infinite, |(row, band_col)| self.score(row, band_col))
    }

    /// Follow the direction labels from the given cell back to the origin.
    fn backtrace(&self, end_row: usize, end_col: usize) -> Result<Vec<EditOp>, AlignError> {
        let mut ops = Vec::with_capacity(2 * self.rows);

        let (mut row, mut col) = (end_row, end_col);
        loop {
            let (op, prev) = match self.direction(row, col) {
                Direction::None => break,
                Direction::Left => (EditOp::GapInFirst, Self::left_of(row, col)),
                Direction::Up => (EditOp::GapInSecond, Self::up_of(row, col)),
                Direction::Diag => (EditOp::Diagonal, Self::diag_of(row, col)),
            };

            let Some((prev_row, prev_col)) = prev.filter(|&(r, c)| self.is_valid(r, c)) else {
                return Err(AlignError::InvalidTraceback { row, col: Self::true_col(row, col) });
            };

            ops.push(op);
            (row, col) = (prev_row, prev_col);
        }

        if (row, col) != (0, 0) {
            return Err(AlignError::InvalidTraceback { row, col: Self::true_col(row, col) });
        }

        ops.reverse();
        Ok(ops)
    }
}

/// Alignment restricted to a band of `2 * MAX_INDELS + 1` diagonals, at O(len1 * MAX_INDELS)
/// time and space. Only applicable to sequences differing in length by at most
/// `MAX_INDELS`; the result is optimal among paths that stay inside the band.
#[derive(Copy, Clone, Debug, Default)]
pub struct BandedAligner {
    costs: EditCosts,
}

impl BandedAligner {
    pub fn new(costs: EditCosts) -> Self {
        Self { costs }
    }

    pub fn is_feasible(len1: usize, len2: usize) -> bool {
        len1.abs_diff(len2) <= MAX_INDELS
    }

    fn fill(&self, seq1: &[u8], seq2: &[u8]) -> BandedMatrix {
        let mut matrix = BandedMatrix::new(seq1.len(), seq2.len());
        matrix.set(0, 0, Score::Score(0), Direction::None);

        for i in 0..matrix.rows {
            for j in 0..BAND_WIDTH {
                if !matrix.is_valid(i, j) {
                    continue;
                }

                if i == 0 && j == 0 {
                    continue;
                }

                // Base cases: first row and first column, only reachable while the band
                // still touches the matrix border.
                if i == 0 {
                    matrix.set(i, j, Score::Score(self.costs.gap_cost(j)), Direction::Left);
                    continue;
                }

                if i <= MAX_INDELS && j == 0 {
                    matrix.set(i, j, Score::Score(self.costs.gap_cost(i)), Direction::Up);
                    continue;
                }

                let step = self.costs.choose_predecessor(
                    matrix.score_at(BandedMatrix::left_of(i, j)),
                    matrix.score_at(BandedMatrix::up_of(i, j)),
                    matrix.score_at(BandedMatrix::diag_of(i, j)),
                    seq1[i - 1],
                    seq2[BandedMatrix::true_col(i, j) - 1],
                );

                trace!(row = i, band_col = j, score = %step.score, direction = ?step.direction, "fill");
                matrix.set(i, j, step.score, step.direction);
            }
        }

        matrix
    }
}

impl PairwiseAligner for BandedAligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<Alignment, AlignError> {
        let span = debug_span!("banded_align", len1 = seq1.len(), len2 = seq2.len());
        let _enter = span.enter();

        if !Self::is_feasible(seq1.len(), seq2.len()) {
            debug!("Length difference exceeds the band, skipping alignment");
            return Err(AlignError::BandingInfeasible {
                len1: seq1.len(),
                len2: seq2.len(),
                max_indels: MAX_INDELS,
            });
        }

        let matrix = self.fill(seq1, seq2);

        let end_row = seq1.len();
        let end_col = BandedMatrix::band_col(end_row, seq2.len())
            .ok_or(AlignError::InvalidTraceback { row: end_row, col: seq2.len() })?;

        let score = matrix.score(end_row, end_col);
        let ops = matrix.backtrace(end_row, end_col)?;

        debug!(%score, path_length = ops.len(), "Filled band matrix");

        Ok(Alignment { score, ops })
    }
}

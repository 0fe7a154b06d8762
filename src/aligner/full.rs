use tracing::{debug, debug_span, trace};

use crate::aligner::alignment::Alignment;
use crate::aligner::scoring::{Direction, EditCosts, Score};
use crate::aligner::traceback::EditOp;
use crate::aligner::PairwiseAligner;
use crate::errors::AlignError;

/// Entry of the dense DP matrix. The predecessor is the (row, col) index of the cell the
/// optimal path came from, `None` only for the origin.
#[derive(Copy, Clone, Debug, Default)]
struct Cell {
    score: Score,
    predecessor: Option<(usize, usize)>,
    is_match: bool,
}

/// Row-major `(len1 + 1) x (len2 + 1)` matrix of cells.
struct DenseMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl DenseMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    fn final_score(&self) -> Score {
        self.get(self.rows - 1, self.cols - 1).score
    }

    /// Follow predecessors from the bottom-right cell back to the origin.
    fn backtrace(&self) -> Result<Vec<EditOp>, AlignError> {
        let mut ops = Vec::with_capacity(self.rows + self.cols);

        let (mut row, mut col) = (self.rows - 1, self.cols - 1);
        while let Some((prev_row, prev_col)) = self.get(row, col).predecessor {
            let op = match (prev_row < row, prev_col < col) {
                (true, true) => EditOp::Diagonal,
                (false, true) => EditOp::GapInFirst,
                (true, false) => EditOp::GapInSecond,
                (false, false) => return Err(AlignError::InvalidTraceback { row, col }),
            };

            ops.push(op);
            (row, col) = (prev_row, prev_col);
        }

        if (row, col) != (0, 0) {
            return Err(AlignError::InvalidTraceback { row, col });
        }

        ops.reverse();
        Ok(ops)
    }
}

/// Needleman-Wunsch style alignment over the complete DP matrix. Always finds the
/// minimum-cost alignment, at O(len1 * len2) time and space.
#[derive(Copy, Clone, Debug, Default)]
pub struct FullAligner {
    costs: EditCosts,
}

impl FullAligner {
    pub fn new(costs: EditCosts) -> Self {
        Self { costs }
    }

    fn fill(&self, seq1: &[u8], seq2: &[u8]) -> DenseMatrix {
        let mut matrix = DenseMatrix::new(seq1.len() + 1, seq2.len() + 1);
        matrix.set(0, 0, Cell { score: Score::Score(0), predecessor: None, is_match: false });

        for i in 1..matrix.rows {
            matrix.set(i, 0, Cell {
                score: Score::Score(self.costs.gap_cost(i)),
                predecessor: Some((i - 1, 0)),
                is_match: false,
            });
        }

        for j in 1..matrix.cols {
            matrix.set(0, j, Cell {
                score: Score::Score(self.costs.gap_cost(j)),
                predecessor: Some((0, j - 1)),
                is_match: false,
            });
        }

        for i in 1..matrix.rows {
            for j in 1..matrix.cols {
                let step = self.costs.choose_predecessor(
                    matrix.get(i, j - 1).score,
                    matrix.get(i - 1, j).score,
                    matrix.get(i - 1, j - 1).score,
                    seq1[i - 1],
                    seq2[j - 1],
                );

                let predecessor = match step.direction {
                    Direction::Up => (i - 1, j),
                    Direction::Diag => (i - 1, j - 1),
                    _ => (i, j - 1),
                };

                trace!(row = i, col = j, score = %step.score, direction = ?step.direction, "fill");
                matrix.set(i, j, Cell {
                    score: step.score,
                    predecessor: Some(predecessor),
                    is_match: step.is_match,
                });
            }
        }

        matrix
    }
}

impl PairwiseAligner for FullAligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<Alignment, AlignError> {
        let span = debug_span!("full_align", len1 = seq1.len(), len2 = seq2.len());
        let _enter = span.enter();

        let matrix = self.fill(seq1, seq2);
        let score = matrix.final_score();
        let ops = matrix.backtrace()?;

        debug!(
            %score,
            matches = matrix.cells.iter().filter(|c| c.is_match).count(),
            path_length = ops.len(),
            "Filled dense matrix"
        );

        Ok(Alignment { score, ops })
    }
}

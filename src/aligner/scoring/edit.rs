use super::Score;

const MATCH_COST: i32 = -3;
const SUBSTITUTION_COST: i32 = 1;
const INDEL_COST: i32 = 5;

/// The edge of the DP matrix an optimal path entered a cell through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Origin cell, no predecessor
    #[default]
    None,

    /// From the cell to the left: consumes a character of the second sequence only
    Left,

    /// From the cell above: consumes a character of the first sequence only
    Up,

    /// Match or substitution
    Diag,
}

/// Outcome of choosing the best predecessor for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub direction: Direction,

    /// The diagonal move was taken, and it aligned two equal characters
    pub is_match: bool,

    /// Predecessor score plus the cost of the chosen edge
    pub score: Score,
}

/// Fixed linear cost model for edit-distance alignment. Lower is better.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EditCosts {
    cost_match: i32,
    cost_substitution: i32,
    cost_indel: i32,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            cost_match: MATCH_COST,
            cost_substitution: SUBSTITUTION_COST,
            cost_indel: INDEL_COST,
        }
    }
}

impl EditCosts {
    #[inline]
    pub fn match_cost(&self) -> i32 {
        self.cost_match
    }

    #[inline]
    pub fn substitution(&self) -> i32 {
        self.cost_substitution
    }

    #[inline]
    pub fn indel(&self) -> i32 {
        self.cost_indel
    }

    #[inline]
    pub fn diagonal(&self, a: u8, b: u8) -> i32 {
        if a == b { self.cost_match } else { self.cost_substitution }
    }

    /// Cost of `length` consecutive insertions or deletions.
    #[inline]
    pub fn gap_cost(&self, length: usize) -> i32 {
        length as i32 * self.cost_indel
    }

    /// Pick the predecessor of a cell among its left, up and diagonal neighbours.
    ///
    /// Candidates are examined in the order left, up, diag, and a later candidate only
    /// replaces the current one if it is strictly cheaper, so ties resolve to the earliest.
    /// The diagonal candidate is compared against the current best score plus the indel cost,
    /// regardless of which candidate is the current best.
    pub fn choose_predecessor(&self, left: Score, up: Score, diag: Score, a: u8, b: u8) -> Step {
        let mut direction = Direction::Left;
        let mut best = left;
        let mut to_add = self.cost_indel;

        if up + self.cost_indel < best + self.cost_indel {
            direction = Direction::Up;
            best = up;
        }

        let diag_cost = self.diagonal(a, b);
        if diag + diag_cost < best + self.cost_indel {
            direction = Direction::Diag;
            best = diag;
            to_add = diag_cost;
        }

        Step {
            direction,
            is_match: direction == Direction::Diag && a == b,
            score: best + to_add,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{Direction, EditCosts};
    use crate::aligner::scoring::Score;

    #[test]
    fn test_fixed_costs() {
        let costs = EditCosts::default();
        assert_eq!(costs.match_cost(), -3);
        assert_eq!(costs.substitution(), 1);
        assert_eq!(costs.indel(), 5);
        assert_eq!(costs.diagonal(b'A', b'A'), -3);
        assert_eq!(costs.diagonal(b'A', b'T'), 1);
        assert_eq!(costs.gap_cost(3), 15);
    }

    #[test]
    fn test_choose_predecessor() {
        let costs = EditCosts::default();

        // Match on the diagonal beats both indels
        let step = costs.choose_predecessor(Score::Score(5), Score::Score(5), Score::Score(0), b'A', b'A');
        assert_eq!(step.direction, Direction::Diag);
        assert!(step.is_match);
        assert_eq!(step.score, Score::Score(-3));

        // Cheaper cell above
        let step = costs.choose_predecessor(Score::Score(10), Score::Score(-3), Score::Score(5), b'C', b'A');
        assert_eq!(step.direction, Direction::Up);
        assert!(!step.is_match);
        assert_eq!(step.score, Score::Score(2));

        // Substitution wins if it's strictly cheaper than an indel
        let step = costs.choose_predecessor(Score::Score(0), Score::Score(0), Score::Score(0), b'C', b'A');
        assert_eq!(step.direction, Direction::Diag);
        assert!(!step.is_match);
        assert_eq!(step.score, Score::Score(1));
    }

    #[test]
    fn test_tie_priority() {
        let costs = EditCosts::default();

        // Equal left and up: keep left
        let step = costs.choose_predecessor(Score::Score(3), Score::Score(3), Score::Score(20), b'A', b'C');
        assert_eq!(step.direction, Direction::Left);
        assert_eq!(step.score, Score::Score(8));

        // Diagonal ties with the best indel: keep the indel
        let step = costs.choose_predecessor(Score::Score(3), Score::Score(4), Score::Score(7), b'A', b'C');
        assert_eq!(step.direction, Direction::Left);
        assert_eq!(step.score, Score::Score(8));

        // Diagonal is compared against the best *after* up replaced left
        let step = costs.choose_predecessor(Score::Score(10), Score::Score(0), Score::Score(4), b'A', b'C');
        assert_eq!(step.direction, Direction::Up);
        assert_eq!(step.score, Score::Score(5));
    }

    #[test]
    fn test_infinite_neighbours() {
        let costs = EditCosts::default();

        let step = costs.choose_predecessor(Score::Infinite, Score::Score(100), Score::Infinite, b'A', b'A');
        assert_eq!(step.direction, Direction::Up);
        assert_eq!(step.score, Score::Score(105));

        let step = costs.choose_predecessor(Score::Infinite, Score::Infinite, Score::Score(100), b'A', b'G');
        assert_eq!(step.direction, Direction::Diag);
        assert_eq!(step.score, Score::Score(101));

        let step = costs.choose_predecessor(Score::Infinite, Score::Infinite, Score::Infinite, b'A', b'G');
        assert_eq!(step.score, Score::Infinite);
    }
}

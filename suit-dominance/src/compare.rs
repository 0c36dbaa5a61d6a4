//! Comparison verdicts and the generic pairwise-matrix reducer.
//!
//! All comparisons in this engine are phrased from declarer's point of
//! view and can end four ways: the first operand wins, the second wins,
//! they are equal, or no usable ordering exists. The last verdict is a
//! valid result, not an error; callers must keep both alternatives.

use std::fmt;

/// Four-valued comparison verdict, declarer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    /// The first operand is at least as good, and better somewhere.
    First,
    /// The second operand is at least as good, and better somewhere.
    Second,
    /// The operands are interchangeable.
    Equal,
    /// Incommensurate: neither operand dominates the other.
    Different,
}

impl Compare {
    /// Swap the roles of the two operands.
    pub fn invert(self) -> Compare {
        match self {
            Compare::First => Compare::Second,
            Compare::Second => Compare::First,
            other => other,
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Compare::First => "first",
            Compare::Second => "second",
            Compare::Equal => "equal",
            Compare::Different => "different",
        };
        write!(f, "{}", s)
    }
}

/// Per-row or per-column tally of verdicts.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    first: usize,
    second: usize,
    equal: usize,
    different: usize,
}

impl Tally {
    fn count(&mut self, verdict: Compare) {
        match verdict {
            Compare::First => self.first += 1,
            Compare::Second => self.second += 1,
            Compare::Equal => self.equal += 1,
            Compare::Different => self.different += 1,
        }
    }

    /// Collapse a tally to one verdict: any incommensurate entry, or a
    /// mix of first- and second-favoring entries, spoils the whole
    /// marginal; otherwise a win beats an equality.
    fn reduce(&self) -> Compare {
        if self.different > 0 {
            Compare::Different
        } else if self.first > 0 && self.second > 0 {
            Compare::Different
        } else if self.first > 0 {
            Compare::First
        } else if self.second > 0 {
            Compare::Second
        } else {
            Compare::Equal
        }
    }
}

/// Pairwise-outcome matrix over two finite sets of alternatives.
///
/// The matrix holds the verdict of every (row alternative, column
/// alternative) pair; [`Comparer::resolve`] reduces it to one aggregate
/// verdict. Cells never written stay `Different`, which matches how an
/// unknown pairing must be treated.
pub struct Comparer {
    rows: usize,
    cols: usize,
    cells: Vec<Compare>,
}

impl Comparer {
    /// Create a matrix with every cell unset (treated as `Different`).
    pub fn new(rows: usize, cols: usize) -> Comparer {
        Comparer {
            rows,
            cols,
            cells: vec![Compare::Different; rows * cols],
        }
    }

    /// Build the full matrix from a pairwise callback.
    pub fn fill<F>(rows: usize, cols: usize, mut f: F) -> Comparer
    where
        F: FnMut(usize, usize) -> Compare,
    {
        let mut comparer = Comparer::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                comparer.set(row, col, f(row, col));
            }
        }
        comparer
    }

    pub fn set(&mut self, row: usize, col: usize, verdict: Compare) {
        assert!(row < self.rows && col < self.cols, "comparer cell out of bounds");
        self.cells[row * self.cols + col] = verdict;
    }

    pub fn get(&self, row: usize, col: usize) -> Compare {
        self.cells[row * self.cols + col]
    }

    /// Reduce the matrix to one aggregate verdict.
    ///
    /// Each row collapses to a verdict, and the row verdicts collapse to
    /// the row-side summary; columns likewise. The two summaries combine
    /// by a fixed table: agreement wins, a first/second clash or two
    /// incommensurate sides is incommensurate, and a single
    /// incommensurate side yields to the other side's win but not to its
    /// claimed equality.
    pub fn resolve(&self) -> Compare {
        let mut row_tally = Tally::default();
        for row in 0..self.rows {
            let mut tally = Tally::default();
            for col in 0..self.cols {
                tally.count(self.get(row, col));
            }
            row_tally.count(tally.reduce());
        }

        let mut col_tally = Tally::default();
        for col in 0..self.cols {
            let mut tally = Tally::default();
            for row in 0..self.rows {
                tally.count(self.get(row, col));
            }
            col_tally.count(tally.reduce());
        }

        Self::combine(row_tally.reduce(), col_tally.reduce())
    }

    fn combine(rows: Compare, cols: Compare) -> Compare {
        use Compare::*;
        match (rows, cols) {
            (Different, Different) => Different,
            // A clash between the two sides leaves no usable order.
            (First, Second) | (Second, First) => Different,
            // One incommensurate side yields to the other side's win;
            // claiming equality against mixed signals would contradict
            // them, so that pairing stays incommensurate.
            (Different, Equal) | (Equal, Different) => Different,
            (Different, other) | (other, Different) => other,
            (First, _) | (_, First) => First,
            (Second, _) | (_, Second) => Second,
            (Equal, Equal) => Equal,
        }
    }

    /// Convenience equality test for a square matrix.
    ///
    /// Requires the matrix to be square and the equal counts to be
    /// symmetric between rows and columns; both are caller contracts.
    pub fn equal(&self) -> bool {
        assert_eq!(self.rows, self.cols, "equal() requires a square matrix");
        for i in 0..self.rows {
            let row_equals = (0..self.cols)
                .filter(|&col| self.get(i, col) == Compare::Equal)
                .count();
            let col_equals = (0..self.rows)
                .filter(|&row| self.get(row, i) == Compare::Equal)
                .count();
            assert_eq!(
                row_equals, col_equals,
                "equal() requires symmetric equal counts at index {}",
                i
            );
        }
        self.resolve() == Compare::Equal
    }
}

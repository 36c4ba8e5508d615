//! Board encoding and conflict counting.
//!
//! A board stores one row index per column. Because each column holds
//! exactly one queen, vertical clashes cannot occur; only horizontal
//! (same row) and diagonal clashes are counted.
//!
//! # Conflict convention
//!
//! Horizontal clashes count unordered pairs sharing a row. Diagonal clashes
//! are counted over *ordered* column pairs, so every diagonal pair
//! contributes 2. A board is a solution iff its total is 0.

use crate::error::{QueensError, Result};
use rand::Rng;
use std::fmt;

/// Queen placement: `rows[column] = row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Draws a random board of `size` columns, each row uniform in `[0, size)`.
    ///
    /// Consumes exactly `size` draws from `rng`.
    ///
    /// # Panics
    /// Panics if `size` is 0.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        assert!(size > 0, "board size must be at least 1");
        let rows = (0..size).map(|_| rng.random_range(0..size)).collect();
        Self { rows }
    }

    /// Wraps caller-supplied rows without validation.
    ///
    /// Use [`validate`](Self::validate) to check length and row range.
    pub fn from_rows(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row index of each column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Consumes the board, returning its rows.
    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }

    /// Overwrites the row of one column.
    ///
    /// # Panics
    /// Panics if `column` is out of bounds.
    pub fn set_row(&mut self, column: usize, row: usize) {
        self.rows[column] = row;
    }

    /// Checks that the board has `expected_size` columns and every row is
    /// in `[0, expected_size)`.
    pub fn validate(&self, expected_size: usize) -> Result<()> {
        if self.rows.len() != expected_size {
            return Err(QueensError::BoardLength {
                expected: expected_size,
                actual: self.rows.len(),
            });
        }
        if let Some((column, &row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|&(_, &row)| row >= expected_size)
        {
            return Err(QueensError::RowOutOfRange {
                column,
                row,
                size: expected_size,
            });
        }
        Ok(())
    }

    /// Unordered pairs of queens sharing a row: `Σ c_v(c_v − 1)/2`.
    ///
    /// Rows outside `[0, size)` are counted like any other row; use
    /// [`checked_conflicts`](Self::checked_conflicts) to reject them.
    pub fn horizontal_clashes(&self) -> usize {
        let height = self.rows.iter().max().map_or(0, |&max| max + 1);
        let mut counts = vec![0usize; height];
        for &row in &self.rows {
            counts[row] += 1;
        }
        counts.iter().map(|&c| c * c.saturating_sub(1) / 2).sum()
    }

    /// Ordered column pairs `(i, j)`, `i != j`, on a common diagonal.
    pub fn diagonal_clashes(&self) -> usize {
        let n = self.rows.len();
        let mut clashes = 0;
        for i in 0..n {
            for j in 0..n {
                if i != j && i.abs_diff(j) == self.rows[i].abs_diff(self.rows[j]) {
                    clashes += 1;
                }
            }
        }
        clashes
    }

    /// Total conflicts: horizontal plus (doubled) diagonal clashes.
    ///
    /// Pure: calling it twice yields the same value.
    pub fn conflicts(&self) -> usize {
        self.horizontal_clashes() + self.diagonal_clashes()
    }

    /// Validates against `expected_size`, then counts conflicts.
    pub fn checked_conflicts(&self, expected_size: usize) -> Result<usize> {
        self.validate(expected_size)?;
        Ok(self.conflicts())
    }

    /// `true` when every row is on the board and no two queens attack
    /// each other.
    pub fn is_solution(&self) -> bool {
        self.validate(self.size()).is_ok() && self.conflicts() == 0
    }
}

/// Renders an N×N grid: row `r`, column `c` shows `1` if a queen sits there.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rows.len();
        for r in 0..n {
            for c in 0..n {
                if c > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.rows[c] == r { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! The GA individual: one candidate board with its cached fitness.
//!
//! Fitness is `None` until [`Individual::evaluate`] runs. Any operation
//! that changes the board (crossover produces a fresh child, mutation
//! edits in place) leaves fitness unset again, so a stale value can never
//! be read.

use crate::board::Board;
use crate::error::{QueensError, Result};

/// A candidate solution in the GA population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    board: Board,
    fitness: Option<usize>,
    times_picked: usize,
}

impl Individual {
    /// Wraps a board with unset fitness.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            fitness: None,
            times_picked: 0,
        }
    }

    /// The candidate board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the individual, returning its board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Mutable board access; clears the cached fitness.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.fitness = None;
        &mut self.board
    }

    /// Conflict count computed by the last [`evaluate`](Self::evaluate).
    ///
    /// Returns [`QueensError::FitnessNotEvaluated`] if the individual has
    /// not been evaluated since it was created or last modified.
    pub fn fitness(&self) -> Result<usize> {
        self.fitness.ok_or(QueensError::FitnessNotEvaluated)
    }

    /// `true` once fitness is computed for the current board.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Validates the board against `board_size` and stores its conflict count.
    ///
    /// Recomputes from scratch each call.
    pub fn evaluate(&mut self, board_size: usize) -> Result<usize> {
        let fitness = self.board.checked_conflicts(board_size)?;
        self.fitness = Some(fitness);
        Ok(fitness)
    }

    /// How many times this individual was picked as a parent.
    pub fn times_picked(&self) -> usize {
        self.times_picked
    }

    pub(crate) fn mark_picked(&mut self) {
        self.times_picked += 1;
    }
}

impl From<Board> for Individual {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_unset_until_evaluated() {
        let ind = Individual::new(Board::from_rows(vec![0, 0]));
        assert!(!ind.is_evaluated());
        assert_eq!(ind.fitness(), Err(QueensError::FitnessNotEvaluated));
    }

    #[test]
    fn test_evaluate_stores_fitness() {
        let mut ind = Individual::new(Board::from_rows(vec![0, 0, 0]));
        assert_eq!(ind.evaluate(3), Ok(3));
        assert_eq!(ind.fitness(), Ok(3));
    }

    #[test]
    fn test_repeated_evaluation_does_not_accumulate() {
        let mut ind = Individual::new(Board::from_rows(vec![0, 1, 2]));
        let first = ind.evaluate(3).unwrap();
        let second = ind.evaluate(3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_board_mut_invalidates_fitness() {
        let mut ind = Individual::new(Board::from_rows(vec![1, 3, 0, 2]));
        ind.evaluate(4).unwrap();
        ind.board_mut().set_row(0, 0);
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_evaluate_rejects_malformed_board() {
        let mut ind = Individual::new(Board::from_rows(vec![0, 1]));
        let err = ind.evaluate(3).unwrap_err();
        assert!(err.is_invariant_violation());
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_mark_picked() {
        let mut ind = Individual::from(Board::from_rows(vec![0]));
        ind.mark_picked();
        ind.mark_picked();
        assert_eq!(ind.times_picked(), 2);
    }
}

//! Genetic operators for row-per-column boards.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: prefix from parent1, suffix from parent2 at a
//!   random cut in `[0, n)`.
//!
//! # Mutation
//!
//! - [`reset_mutation`]: with probability `p`, overwrite one random column
//!   with a random row.
//!
//! The slice-level functions are the building blocks; [`crossover`] and
//! [`mutate`] apply them to [`Individual`]s.
//!
//! # Random draws
//!
//! | Operation            | Draws                                  |
//! |----------------------|----------------------------------------|
//! | `one_point_crossover`| 1 (cut)                                |
//! | `reset_mutation`     | 1 (probability), +2 on success (column, row) |

use super::types::Individual;
use crate::board::Board;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// One-point crossover with a random cut.
///
/// The cut `c` is uniform in `[0, n)`, so parent2 always contributes at
/// least its last column; `c = 0` yields a copy of parent2.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn one_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    crossover_at(parent1, parent2, cut)
}

/// Builds `parent1[..cut] ++ parent2[cut..]`.
///
/// # Panics
/// Panics if parents have different lengths or `cut > n`.
pub fn crossover_at(parent1: &[usize], parent2: &[usize], cut: usize) -> Vec<usize> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Crosses two individuals into a fresh, unevaluated child.
pub fn crossover<R: Rng>(parent1: &Individual, parent2: &Individual, rng: &mut R) -> Individual {
    let rows = one_point_crossover(parent1.board().rows(), parent2.board().rows(), rng);
    Individual::new(Board::from_rows(rows))
}

// ============================================================================
// Mutation
// ============================================================================

/// With probability `probability`, sets one random column to a random row
/// in `[0, n)`.
///
/// Returns `true` when a position was rewritten. The new row may equal the
/// old one, leaving the board observably unchanged.
///
/// # Panics
/// Panics if `probability` is outside `[0, 1]`.
pub fn reset_mutation<R: Rng>(rows: &mut [usize], probability: f64, rng: &mut R) -> bool {
    let n = rows.len();
    if n == 0 || !rng.random_bool(probability) {
        return false;
    }
    let column = rng.random_range(0..n);
    rows[column] = rng.random_range(0..n);
    true
}

/// Applies [`reset_mutation`] to an individual.
///
/// Fitness is cleared only when a position was rewritten.
pub fn mutate<R: Rng>(individual: &mut Individual, probability: f64, rng: &mut R) -> bool {
    let mut rows = individual.board().rows().to_vec();
    if !reset_mutation(&mut rows, probability, rng) {
        return false;
    }
    *individual.board_mut() = Board::from_rows(rows);
    true
}

// ============================================================================
// Tests
// ============================================================================

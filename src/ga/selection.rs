//! Elite-biased parent selection.
//!
//! The population is ranked ascending by fitness before selection, so the
//! first `threshold` indices hold the fittest individuals. With probability
//! `top_select_prob` an index is drawn from that elite prefix; otherwise it
//! is drawn from the tail range chosen by [`TailRange`].

use crate::error::{QueensError, Result};
use rand::Rng;

/// Index range used by the non-elite selection branch.
///
/// `P` is the population size and `t` the elite threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TailRange {
    /// `[0, P - t)`: the tail branch draws from the start of the ranking,
    /// overlapping the elite prefix. Matches the classic formulation of
    /// this solver.
    #[default]
    Prefix,

    /// `[t, P)`: the tail branch draws only from non-elite individuals.
    Complement,
}

impl TailRange {
    /// Half-open tail range for a population of `population_size` with
    /// elite `threshold`.
    pub fn bounds(self, population_size: usize, threshold: usize) -> (usize, usize) {
        match self {
            TailRange::Prefix => (0, population_size.saturating_sub(threshold)),
            TailRange::Complement => (threshold.min(population_size), population_size),
        }
    }
}

/// Parent selection parameters for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Population size `P`.
    pub population_size: usize,
    /// Elite prefix length: `floor(P * top_fitness_perc)`.
    pub threshold: usize,
    /// Probability of drawing from the elite prefix.
    pub top_select_prob: f64,
    /// Range for the non-elite branch.
    pub tail: TailRange,
}

impl Selection {
    /// Builds the policy from a population size and the elite fraction.
    ///
    /// Performs no checks; see [`try_new`](Self::try_new) and
    /// [`validate`](Self::validate).
    pub fn new(
        population_size: usize,
        top_fitness_perc: f64,
        top_select_prob: f64,
        tail: TailRange,
    ) -> Self {
        Self {
            population_size,
            threshold: elite_threshold(population_size, top_fitness_perc),
            top_select_prob,
            tail,
        }
    }

    /// Builds the policy and rejects it unless it can draw two distinct
    /// parents.
    pub fn try_new(
        population_size: usize,
        top_fitness_perc: f64,
        top_select_prob: f64,
        tail: TailRange,
    ) -> Result<Self> {
        let selection = Self::new(population_size, top_fitness_perc, top_select_prob, tail);
        selection.validate()?;
        Ok(selection)
    }

    /// Checks that the branch probability is in `[0, 1]`, every branch
    /// that can fire has a non-empty range, and at least two distinct
    /// indices are reachable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.top_select_prob) {
            return Err(QueensError::Configuration(format!(
                "top_select_prob must be within [0, 1], got {}",
                self.top_select_prob
            )));
        }
        if self.threshold > self.population_size {
            return Err(config_error("elite prefix exceeds population"));
        }
        if self.top_select_prob > 0.0 && self.threshold == 0 {
            return Err(config_error(
                "top_fitness_perc too low: elite prefix is empty",
            ));
        }
        let (lo, hi) = self.tail.bounds(self.population_size, self.threshold);
        if self.top_select_prob < 1.0 && lo >= hi {
            return Err(config_error(
                "top_fitness_perc too high: non-elite range is empty",
            ));
        }
        if self.reachable_indices() < 2 {
            return Err(config_error("selection cannot reach two distinct parents"));
        }
        Ok(())
    }

    /// Draws one parent index.
    ///
    /// # Panics
    /// Panics if the chosen branch has an empty range.
    /// [`validate`](Self::validate) rejects policies where that can happen.
    pub fn select<R: Rng>(&self, rng: &mut R) -> usize {
        let (lo, hi) = if rng.random_bool(self.top_select_prob) {
            (0, self.threshold)
        } else {
            self.tail.bounds(self.population_size, self.threshold)
        };
        assert!(lo < hi, "selection range [{lo}, {hi}) is empty");
        rng.random_range(lo..hi)
    }

    /// Draws two distinct parent indices.
    ///
    /// The second index is fixed after its first draw; only the first is
    /// redrawn until the two differ. Fails without drawing if fewer than
    /// two indices are reachable.
    pub fn select_parents<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize)> {
        if self.reachable_indices() < 2 {
            return Err(config_error("selection cannot reach two distinct parents"));
        }
        let mut index1 = self.select(rng);
        let index2 = self.select(rng);
        while index1 == index2 {
            index1 = self.select(rng);
        }
        Ok((index1, index2))
    }

    /// Number of distinct indices either branch can ever return.
    ///
    /// Branches with zero probability are ignored.
    pub fn reachable_indices(&self) -> usize {
        let top = if self.top_select_prob > 0.0 {
            Some((0, self.threshold))
        } else {
            None
        };
        let tail = if self.top_select_prob < 1.0 {
            Some(self.tail.bounds(self.population_size, self.threshold))
        } else {
            None
        };
        match (top, tail) {
            (Some((_, t)), Some((lo, hi))) => {
                if lo <= t {
                    hi.max(t)
                } else {
                    t + (hi - lo)
                }
            }
            (Some((lo, hi)), None) | (None, Some((lo, hi))) => hi.saturating_sub(lo),
            (None, None) => 0,
        }
    }
}

fn config_error(msg: &str) -> QueensError {
    QueensError::Configuration(msg.into())
}

/// Elite prefix length: `floor(population_size * top_fitness_perc)`.
pub fn elite_threshold(population_size: usize, top_fitness_perc: f64) -> usize {
    (population_size as f64 * top_fitness_perc) as usize
}

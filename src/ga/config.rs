//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::{Selection, TailRange};
use crate::error::{QueensError, Result};

/// Configuration for the N-Queens genetic search.
///
/// # Defaults
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 10);
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.max_generations, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::ga::{GaConfig, TailRange};
///
/// let config = GaConfig::default()
///     .with_board_size(8)
///     .with_population_size(100)
///     .with_mutation_probability(0.2)
///     .with_tail_range(TailRange::Complement)
///     .with_max_generations(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Board width and height (N).
    pub board_size: usize,

    /// Number of individuals per generation (P). Constant across the run.
    pub population_size: usize,

    /// Fraction of the ranked population forming the elite prefix (0.0–1.0).
    ///
    /// The prefix length is `floor(P * top_fitness_perc)`.
    pub top_fitness_perc: f64,

    /// Probability of drawing a parent from the elite prefix (0.0–1.0).
    pub top_select_prob: f64,

    /// Probability that a child receives one random row reset (0.0–1.0).
    pub mutation_probability: f64,

    /// Index range used by the non-elite selection branch.
    pub tail_range: TailRange,

    /// Maximum number of generations to evaluate.
    ///
    /// `None` runs until a solution is found, which never happens for
    /// N = 2 or N = 3.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            population_size: 40,
            top_fitness_perc: 0.3,
            top_select_prob: 0.7,
            mutation_probability: 0.3,
            tail_range: TailRange::default(),
            max_generations: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite fraction.
    pub fn with_top_fitness_perc(mut self, perc: f64) -> Self {
        self.top_fitness_perc = perc;
        self
    }

    /// Sets the probability of selecting from the elite prefix.
    pub fn with_top_select_prob(mut self, prob: f64) -> Self {
        self.top_select_prob = prob;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, prob: f64) -> Self {
        self.mutation_probability = prob;
        self
    }

    /// Sets the tail range of the non-elite selection branch.
    pub fn with_tail_range(mut self, tail: TailRange) -> Self {
        self.tail_range = tail;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selection policy derived from this configuration.
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.population_size,
            self.top_fitness_perc,
            self.top_select_prob,
            self.tail_range,
        )
    }

    /// Validates the configuration.
    ///
    /// Returns [`QueensError::Configuration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(config_error("board_size must be at least 1"));
        }
        if self.population_size == 0 {
            return Err(config_error("population_size must be at least 1"));
        }
        check_probability("top_fitness_perc", self.top_fitness_perc)?;
        check_probability("top_select_prob", self.top_select_prob)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        if self.max_generations == Some(0) {
            return Err(config_error("max_generations must be positive or None"));
        }

        // A 1-column board is solved by the first evaluation, so no
        // breeding ever happens.
        if self.board_size == 1 {
            return Ok(());
        }

        self.selection().validate()
    }
}

fn config_error(msg: &str) -> QueensError {
    QueensError::Configuration(msg.into())
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(QueensError::Configuration(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

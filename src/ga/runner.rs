//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the search one generation at a time:
//! evaluate → sort → check termination → select/crossover/mutate → repeat.
//! The loop is iterative; a run ends when a conflict-free board appears,
//! the optional generation cap is reached, or a cancellation flag is set.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::population::{GenerationStats, Population};
use super::selection::Selection;
use super::types::Individual;
use crate::error::{QueensError, Result};
use crate::random::rng_from_option;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A board with zero conflicts was found.
    Solved,
    /// `max_generations` generations were evaluated without a solution.
    GenerationCap,
    /// The cancellation flag was set.
    Cancelled,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the last evaluated generation.
    pub best: Individual,

    /// Conflict count of `best`.
    pub best_fitness: usize,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Fitness summary of every evaluated generation.
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    /// `true` when the run found a conflict-free board.
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_board_size(6)
///     .with_population_size(60)
///     .with_max_generations(2_000)
///     .with_seed(7);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.generations >= 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search with a generator seeded from `config.seed`.
    ///
    /// Fails with [`QueensError::Configuration`] before any generation runs
    /// if the configuration is invalid.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// after evaluating the current generation. The search itself stays on
    /// the calling thread; the flag is for embedding callers that run it on
    /// a worker thread and need to stop it from another. [`run`](Self::run)
    /// passes `None`.
    pub fn run_with_cancel(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        let mut rng = rng_from_option(config.seed);
        let population = Population::random(config.board_size, config.population_size, &mut rng);
        Self::evolve(population, config, &mut rng, cancel)
    }

    /// Runs the loop from an existing population with a caller-supplied
    /// generator.
    ///
    /// The population must match `config.population_size`; its boards are
    /// checked against `config.board_size` at the first evaluation.
    pub fn evolve<R: Rng>(
        mut population: Population,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(QueensError::Configuration(format!(
                "population has {} individuals, expected {}",
                population.len(),
                config.population_size
            )));
        }
        if population.board_size() != config.board_size {
            return Err(QueensError::Configuration(format!(
                "population board size is {}, expected {}",
                population.board_size(),
                config.board_size
            )));
        }

        let selection = config.selection();
        let mut history = Vec::new();

        loop {
            // 1-2. Evaluate and rank
            population.evaluate()?;
            population.sort()?;
            let stats = population.stats()?;
            let generation = population.generation();
            let best_fitness = stats.best_fitness;
            history.push(stats);

            // 3. Termination
            let termination = if best_fitness == 0 {
                log::info!("solution found in generation {generation}");
                Some(Termination::Solved)
            } else if config.max_generations.is_some_and(|cap| generation >= cap) {
                log::warn!("no solution found within {generation} generations");
                Some(Termination::GenerationCap)
            } else if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                log::info!("cancelled after generation {generation}");
                Some(Termination::Cancelled)
            } else {
                None
            };

            if let Some(termination) = termination {
                let best = population
                    .into_individuals()
                    .into_iter()
                    .next()
                    .ok_or_else(|| QueensError::Configuration("population is empty".into()))?;
                return Ok(GaResult {
                    best,
                    best_fitness,
                    generations: generation,
                    termination,
                    history,
                });
            }

            // 4-5. Breed the next generation
            population = next_generation(
                &mut population,
                &selection,
                config.mutation_probability,
                rng,
            )?;
            log::info!("generation {generation} done (best fitness {best_fitness})");
        }
    }
}

/// Breeds a full replacement population from a ranked one.
///
/// For each of the `P` slots: draw two distinct parents, cross them
/// (`index1` supplies the prefix), mutate the child. Parents' pick
/// counters are incremented on `current`.
///
/// Fails before drawing if `selection` was built for a different
/// population size, if it cannot reach two distinct parents, or if
/// `mutation_probability` is outside `[0, 1]`.
pub fn next_generation<R: Rng>(
    current: &mut Population,
    selection: &Selection,
    mutation_probability: f64,
    rng: &mut R,
) -> Result<Population> {
    let size = current.len();
    if selection.population_size != size {
        return Err(QueensError::Configuration(format!(
            "selection expects {} individuals, population has {size}",
            selection.population_size
        )));
    }
    selection.validate()?;
    if !(0.0..=1.0).contains(&mutation_probability) {
        return Err(QueensError::Configuration(format!(
            "mutation_probability must be within [0, 1], got {mutation_probability}"
        )));
    }

    let mut offspring = Vec::with_capacity(size);
    for _ in 0..size {
        let (index1, index2) = selection.select_parents(rng)?;
        let individuals = current.individuals_mut();
        individuals[index1].mark_picked();
        individuals[index2].mark_picked();

        let mut child = crossover(&individuals[index1], &individuals[index2], rng);
        mutate(&mut child, mutation_probability, rng);
        offspring.push(child);
    }

    Ok(Population::from_individuals(
        current.board_size(),
        offspring,
        current.generation() + 1,
    ))
}

// ============================================================================
// Tests
// ============================================================================

//! Population container: evaluation, ranking and per-generation statistics.

use super::types::Individual;
use crate::board::Board;
use crate::error::{QueensError, Result};
use rand::Rng;

/// An ordered set of individuals sharing one board size, tagged with the
/// generation that produced it.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    board_size: usize,
    generation: usize,
}

/// Fitness summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number (1-based).
    pub generation: usize,
    /// Lowest conflict count.
    pub best_fitness: usize,
    /// Highest conflict count.
    pub worst_fitness: usize,
    /// Mean conflict count.
    pub mean_fitness: f64,
    /// Every individual's fitness, in population order.
    pub fitnesses: Vec<usize>,
}

impl Population {
    /// Creates `population_size` random individuals at generation 1.
    ///
    /// Consumes `board_size * population_size` draws.
    pub fn random<R: Rng>(board_size: usize, population_size: usize, rng: &mut R) -> Self {
        let individuals = (0..population_size)
            .map(|_| Individual::new(Board::random(board_size, rng)))
            .collect();
        Self {
            individuals,
            board_size,
            generation: 1,
        }
    }

    /// Wraps existing individuals; the population size is `individuals.len()`.
    pub fn from_individuals(
        board_size: usize,
        individuals: Vec<Individual>,
        generation: usize,
    ) -> Self {
        Self {
            individuals,
            board_size,
            generation,
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// `true` when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Board size every individual must match.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Generation number, starting at 1.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Individuals in their current order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Consumes the population, returning its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Evaluates every individual.
    ///
    /// Fails on the first board whose length or rows do not match the
    /// population's board size.
    pub fn evaluate(&mut self) -> Result<()> {
        for individual in &mut self.individuals {
            let fitness = individual.evaluate(self.board_size)?;
            log::debug!("fitness is: {fitness}");
        }
        Ok(())
    }

    /// Stable ascending sort by fitness (best first).
    ///
    /// Every individual must have been evaluated.
    pub fn sort(&mut self) -> Result<()> {
        if self.individuals.iter().any(|ind| !ind.is_evaluated()) {
            return Err(QueensError::FitnessNotEvaluated);
        }
        self.individuals
            .sort_by_key(|ind| ind.fitness().unwrap_or(usize::MAX));
        Ok(())
    }

    /// The individual at index 0, which is the fittest after [`sort`](Self::sort).
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Fitness summary for the evaluated population.
    pub fn stats(&self) -> Result<GenerationStats> {
        let fitnesses = self
            .individuals
            .iter()
            .map(Individual::fitness)
            .collect::<Result<Vec<_>>>()?;
        let best_fitness = fitnesses.iter().copied().min().unwrap_or(0);
        let worst_fitness = fitnesses.iter().copied().max().unwrap_or(0);
        let mean_fitness = if fitnesses.is_empty() {
            0.0
        } else {
            fitnesses.iter().sum::<usize>() as f64 / fitnesses.len() as f64
        };
        Ok(GenerationStats {
            generation: self.generation,
            best_fitness,
            worst_fitness,
            mean_fitness,
            fitnesses,
        })
    }
}

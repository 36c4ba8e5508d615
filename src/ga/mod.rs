//! Genetic Algorithm for the N-Queens problem.
//!
//! Each individual is a [`Board`](crate::board::Board) with one queen per
//! column; fitness is the number of attacking pairs (lower is better, 0 is
//! a solution).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (sizes, selection, mutation, cap)
//! - [`Individual`]: A board with its cached fitness
//! - [`Population`]: Ranked collection of individuals for one generation
//! - [`Selection`]: Elite-biased parent selection
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: One-point crossover and row-reset mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::{GenerationStats, Population};
pub use runner::{next_generation, GaResult, GaRunner, Termination};
pub use selection::{elite_threshold, Selection, TailRange};
pub use types::Individual;

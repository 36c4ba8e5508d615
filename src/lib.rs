//! Genetic-algorithm search for the N-Queens problem.
//!
//! Places N queens on an N×N board so that no two attack each other,
//! using an evolutionary loop over a fixed-size population:
//!
//! - [`board`]: Row-per-column encoding and conflict counting
//! - [`ga`]: Individuals, population, selection, operators and the runner
//! - [`random`]: Seeded, portable random number generation
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```
//! use nqueens_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_board_size(4)
//!     .with_population_size(20)
//!     .with_max_generations(10_000)
//!     .with_seed(42);
//! let result = GaRunner::run(&config).unwrap();
//! if result.is_solved() {
//!     print!("{}", result.best.board());
//! }
//! ```

pub mod board;
pub mod error;
pub mod ga;
pub mod random;

pub use board::Board;
pub use error::{QueensError, Result};

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use nqueens_ga::ga::{GaConfig, GaRunner, TailRange, Termination};

/// Search for an N-Queens placement with a genetic algorithm
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width and height
    #[arg(long, default_value_t = 10)]
    board_size: usize,

    /// Individuals per generation
    #[arg(long, default_value_t = 40)]
    population_size: usize,

    /// Fraction of the ranked population treated as elite
    #[arg(long, default_value_t = 0.3)]
    top_fitness_perc: f64,

    /// Probability of picking a parent from the elite
    #[arg(long, default_value_t = 0.7)]
    top_select_prob: f64,

    /// Probability that a child is mutated
    #[arg(long, default_value_t = 0.3)]
    mutation_probability: f64,

    /// Stop after this many generations without a solution
    #[arg(long)]
    max_generations: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Index range used by the non-elite selection branch
    #[arg(long, value_enum, default_value_t = TailArg::Prefix)]
    tail_range: TailArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TailArg {
    Prefix,
    Complement,
}

impl From<TailArg> for TailRange {
    fn from(arg: TailArg) -> Self {
        match arg {
            TailArg::Prefix => TailRange::Prefix,
            TailArg::Complement => TailRange::Complement,
        }
    }
}

impl Args {
    fn to_config(&self) -> GaConfig {
        GaConfig {
            board_size: self.board_size,
            population_size: self.population_size,
            top_fitness_perc: self.top_fitness_perc,
            top_select_prob: self.top_select_prob,
            mutation_probability: self.mutation_probability,
            tail_range: self.tail_range.into(),
            max_generations: self.max_generations,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // `RUST_LOG=debug` adds the per-individual fitness trace.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.to_config();
    let result = GaRunner::run(&config)?;

    match result.termination {
        Termination::Solved => {
            println!("solution found in generation {}", result.generations);
            print!("{}", result.best.board());
            Ok(ExitCode::SUCCESS)
        }
        Termination::GenerationCap => {
            eprintln!(
                "no solution found within {} generations (best fitness {})",
                result.generations, result.best_fitness
            );
            Ok(ExitCode::from(2))
        }
        // The CLI passes no cancellation flag.
        Termination::Cancelled => anyhow::bail!("search was cancelled"),
    }
}

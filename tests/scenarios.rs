//! End-to-end runs of the genetic search.

use nqueens_ga::ga::{GaConfig, GaRunner, TailRange, Termination};
use nqueens_ga::Board;

/// Parses the `Display` grid back into queen coordinates `(row, column)`.
fn queens_from_grid(grid: &str) -> Vec<(usize, usize)> {
    grid.lines()
        .enumerate()
        .flat_map(|(r, line)| {
            line.split(' ')
                .enumerate()
                .filter(|(_, cell)| *cell == "1")
                .map(move |(c, _)| (r, c))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_valid_grid(board: &Board) {
    let n = board.size();
    let grid = board.to_string();
    assert_eq!(grid.lines().count(), n);

    let queens = queens_from_grid(&grid);
    assert_eq!(queens.len(), n, "grid:\n{grid}");
    for k in 0..n {
        assert_eq!(queens.iter().filter(|q| q.0 == k).count(), 1, "row {k}:\n{grid}");
        assert_eq!(queens.iter().filter(|q| q.1 == k).count(), 1, "column {k}:\n{grid}");
    }
    for (i, a) in queens.iter().enumerate() {
        for b in &queens[i + 1..] {
            assert_ne!(a.0.abs_diff(b.0), a.1.abs_diff(b.1), "diagonal:\n{grid}");
        }
    }
}

#[test]
fn four_queens_is_solved() {
    for seed in [1, 2, 3, 42] {
        let config = GaConfig::default()
            .with_board_size(4)
            .with_population_size(20)
            .with_max_generations(20_000)
            .with_seed(seed);
        let result = GaRunner::run(&config).unwrap();

        assert!(result.is_solved(), "seed {seed} hit the cap");
        assert_eq!(result.best_fitness, 0);
        assert_valid_grid(result.best.board());
    }
}

#[test]
fn four_queens_is_solved_with_complement_tail() {
    let config = GaConfig::default()
        .with_board_size(4)
        .with_population_size(20)
        .with_tail_range(TailRange::Complement)
        .with_max_generations(20_000)
        .with_seed(42);
    let result = GaRunner::run(&config).unwrap();
    assert!(result.is_solved());
    assert_valid_grid(result.best.board());
}

#[test]
fn single_queen_terminates_in_first_generation() {
    let config = GaConfig::default()
        .with_board_size(1)
        .with_population_size(5)
        .with_seed(42);
    let result = GaRunner::run(&config).unwrap();
    assert_eq!(result.termination, Termination::Solved);
    assert_eq!(result.generations, 1);
    assert_eq!(result.best.board().to_string(), "1\n");
}

#[test]
fn unsolvable_sizes_hit_the_cap() {
    for n in [2, 3] {
        let config = GaConfig::default()
            .with_board_size(n)
            .with_population_size(20)
            .with_max_generations(50)
            .with_seed(42);
        let result = GaRunner::run(&config).unwrap();

        assert_eq!(result.termination, Termination::GenerationCap);
        assert!(!result.is_solved());
        assert_eq!(result.generations, 50);
        assert!(result.history.iter().all(|s| s.best_fitness > 0));
        assert!(result.best_fitness > 0);
    }
}

#[test]
fn same_seed_reproduces_run() {
    let config = GaConfig::default()
        .with_board_size(6)
        .with_population_size(30)
        .with_max_generations(300)
        .with_seed(1234);

    let a = GaRunner::run(&config).unwrap();
    let b = GaRunner::run(&config).unwrap();

    assert_eq!(a.termination, b.termination);
    assert_eq!(a.generations, b.generations);
    assert_eq!(a.history, b.history);
    assert_eq!(a.best.board(), b.best.board());
}

#[test]
fn population_size_is_constant() {
    let config = GaConfig::default()
        .with_board_size(7)
        .with_population_size(25)
        .with_max_generations(40)
        .with_seed(9);
    let result = GaRunner::run(&config).unwrap();
    for (i, stats) in result.history.iter().enumerate() {
        assert_eq!(stats.generation, i + 1);
        assert_eq!(stats.fitnesses.len(), 25);
        assert!(stats.fitnesses.windows(2).all(|w| w[0] <= w[1]));
    }
}

//! Mastermind Solver
//!
//! A Mastermind solver using Knuth's minimax, with interchangeable scoring
//! backends, a shared score cache and a strategy tree reused across games.
//! The classic game (4 pins, 6 colors) averages 4.476 guesses, never more
//! than 5.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::GameConfig;
//! use mastermind_solver::solver::{Solver, SolverConfig};
//!
//! let mut solver = Solver::new(SolverConfig {
//!     game: GameConfig::new(3, 4).unwrap(),
//!     ..SolverConfig::default()
//! });
//!
//! let secret = *solver.catalog().parse("231").unwrap();
//! let record = solver.find_secret(&secret).unwrap();
//! for step in &record.steps {
//!     println!("{} scored {}", step.guess, step.score);
//! }
//! ```

// Core domain types
pub mod core;

// Scoring backends and the score cache
pub mod scoring;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

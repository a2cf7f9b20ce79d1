//! Knuth's minimax for Mastermind
//!
//! Picks the guess whose worst-case score leaves the fewest possible
//! solutions.

mod calculator;
mod selector;

pub use calculator::{GuessEvaluation, calculate_max_remaining, evaluate_guess};
pub use selector::{Selection, select_best_guess};

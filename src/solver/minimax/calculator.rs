//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and the possible solutions, partitions the solutions by the
//! score each would give and reports the largest partition.

use crate::core::{Codeword, Score};
use crate::scoring::Scorer;

/// What playing one guess would do to the possible solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessEvaluation {
    /// Size of the largest partition (worst-case remaining solutions)
    pub max_remaining: usize,
    /// Number of non-empty partitions
    pub outcomes: usize,
    /// Whether the guess is itself one of the possible solutions
    pub is_possible_solution: bool,
}

/// Partition `possible` by score against `guess`
///
/// Partitions live in a flat histogram indexed by the packed score byte.
/// The winning partition is included: it holds the guess itself when the
/// guess is still possible, which is how `is_possible_solution` is found.
#[must_use]
pub fn evaluate_guess(scorer: &Scorer, guess: &Codeword, possible: &[Codeword]) -> GuessEvaluation {
    let winning = Score::winning(guess.pin_count());
    let mut hit_counts = [0usize; Score::SLOTS];
    let mut is_possible_solution = false;

    for solution in possible {
        let score = scorer.score(guess, solution);
        hit_counts[usize::from(score.value())] += 1;
        if score == winning {
            is_possible_solution = true;
        }
    }

    GuessEvaluation {
        max_remaining: hit_counts.iter().copied().max().unwrap_or(0),
        outcomes: hit_counts.iter().filter(|&&count| count > 0).count(),
        is_possible_solution,
    }
}

/// Calculate the maximum remaining solutions for a guess
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Catalog, GameConfig};
/// use mastermind_solver::scoring::{Scorer, ScorerKind};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let catalog = Catalog::new(GameConfig::new(2, 3).unwrap());
/// let scorer = Scorer::new(ScorerKind::default());
///
/// // Opening "12" leaves at most four of the nine codewords
/// let max = calculate_max_remaining(&scorer, catalog.initial_guess(), catalog.all());
/// assert_eq!(max, 4);
/// ```
#[must_use]
pub fn calculate_max_remaining(scorer: &Scorer, guess: &Codeword, possible: &[Codeword]) -> usize {
    evaluate_guess(scorer, guess, possible).max_remaining
}

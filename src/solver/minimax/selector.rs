//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case number of remaining
//! solutions, preferring guesses that could themselves win.

use super::calculator::evaluate_guess;
use crate::core::Codeword;
use crate::scoring::Scorer;
use rayon::prelude::*;
use tracing::trace;

/// The guess picked by [`select_best_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub guess: Codeword,
    /// Worst-case remaining solutions after playing `guess`
    pub max_remaining: usize,
    /// Whether `guess` is one of the possible solutions
    pub is_possible_solution: bool,
}

/// Select best guess by minimizing worst-case remaining solutions
///
/// Every candidate is evaluated in parallel; the results are then walked in
/// candidate order. A later candidate replaces the current best when its
/// worst case is strictly smaller, or when it ties, is a possible solution
/// and the current best is not. Otherwise the earlier candidate stays, so the
/// choice does not depend on thread scheduling.
///
/// Returns `None` if `candidates` is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Catalog, GameConfig};
/// use mastermind_solver::scoring::{Scorer, ScorerKind};
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let catalog = Catalog::new(GameConfig::new(2, 3).unwrap());
/// let scorer = Scorer::new(ScorerKind::default());
/// let possible: Vec<_> = ["11", "13", "22", "32"]
///     .iter()
///     .map(|t| *catalog.parse(t).unwrap())
///     .collect();
///
/// let best = select_best_guess(&scorer, catalog.all(), &possible).unwrap();
/// assert_eq!(best.max_remaining, 1);
/// assert!(best.is_possible_solution);
/// ```
#[must_use]
pub fn select_best_guess(
    scorer: &Scorer,
    candidates: &[Codeword],
    possible: &[Codeword],
) -> Option<Selection> {
    let evaluations: Vec<_> = candidates
        .par_iter()
        .map(|guess| evaluate_guess(scorer, guess, possible))
        .collect();

    let mut best: Option<Selection> = None;
    for (guess, eval) in candidates.iter().zip(evaluations) {
        let replace = match &best {
            None => true,
            Some(current) => {
                eval.max_remaining < current.max_remaining
                    || (eval.max_remaining == current.max_remaining
                        && eval.is_possible_solution
                        && !current.is_possible_solution)
            }
        };

        if replace {
            best = Some(Selection {
                guess: *guess,
                max_remaining: eval.max_remaining,
                is_possible_solution: eval.is_possible_solution,
            });
        }
    }

    if let Some(selection) = &best {
        trace!(
            guess = %selection.guess,
            max_remaining = selection.max_remaining,
            is_possible = selection.is_possible_solution,
            candidates = candidates.len(),
            possible = possible.len(),
            "Selected minimax guess"
        );
    }
    best
}

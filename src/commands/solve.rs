//! Secret solving command
//!
//! Solves one secret and returns the guess sequence with per-game counters.

use crate::core::SolverError;
use crate::solver::{GameRecord, Solver};
use std::time::{Duration, Instant};

/// Secret from Knuth's paper, used when none is given
pub const KNUTH_EXAMPLE_SECRET: &str = "3632";

/// Result of solving one secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub record: GameRecord,
    /// Scores computed during this game
    pub comparisons: u64,
    /// Minimax selections run during this game
    pub selector_invocations: u64,
    pub duration: Duration,
}

/// Solve `secret_text` with `solver`
///
/// The solver's strategy tree is kept, so solving the same secret twice
/// replays the first game.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a codeword of the solver's game
/// - The solver runs out of possible solutions
pub fn solve_secret(solver: &mut Solver, secret_text: &str) -> Result<SolveResult, SolverError> {
    let secret = *solver.catalog().parse(secret_text)?;
    let before = solver.stats();
    let start = Instant::now();

    let record = solver.find_secret(&secret)?;

    let after = solver.stats();
    Ok(SolveResult {
        record,
        comparisons: after.comparisons - before.comparisons,
        selector_invocations: after.selector_invocations - before.selector_invocations,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::{GuessPolicy, SolverConfig};

    fn solver(pins: u8, colors: u8) -> Solver {
        Solver::new(SolverConfig {
            game: GameConfig::new(pins, colors).unwrap(),
            policy: GuessPolicy::Knuth,
            ..SolverConfig::default()
        })
    }

    #[test]
    fn knuth_example_within_five() {
        let mut solver = solver(4, 6);
        let result = solve_secret(&mut solver, KNUTH_EXAMPLE_SECRET).unwrap();

        let steps = &result.record.steps;
        assert_eq!(steps[0].guess.to_string(), "1122");
        assert_eq!(steps.last().unwrap().guess.to_string(), KNUTH_EXAMPLE_SECRET);
        assert!(result.record.turns() <= 5);
        assert!(result.comparisons > 0);
        assert!(result.selector_invocations >= 1);
    }

    #[test]
    fn second_solve_counts_only_itself() {
        let mut solver = solver(3, 4);
        let first = solve_secret(&mut solver, "342").unwrap();
        let second = solve_secret(&mut solver, "342").unwrap();

        assert_eq!(second.selector_invocations, 0);
        // Replay scores one guess per turn and nothing else
        assert_eq!(second.comparisons, second.record.turns() as u64);
        let guesses = |r: &SolveResult| r.record.steps.iter().map(|s| s.guess).collect::<Vec<_>>();
        assert_eq!(guesses(&first), guesses(&second));
    }

    #[test]
    fn rejects_unknown_secret() {
        let mut solver = solver(4, 6);
        assert!(matches!(
            solve_secret(&mut solver, "1279"),
            Err(SolverError::UnknownCodeword(_))
        ));
        assert!(matches!(
            solve_secret(&mut solver, "12"),
            Err(SolverError::UnknownCodeword(_))
        ));
    }
}

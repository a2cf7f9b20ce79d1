//! Scoring self-check against known answers
//!
//! Scores a fixed secret against reference guesses with every backend. The
//! last three cases catch scorers that get black pegs right but miscount
//! whites when colors repeat.

use crate::core::{Codeword, Score};
use crate::scoring::ScorerKind;

/// Secret all reference guesses are scored against
pub const REFERENCE_SECRET: u32 = 0x6684;

/// `(guess, black, white)` against [`REFERENCE_SECRET`]
pub const REFERENCE_CASES: [(u32, u8, u8); 14] = [
    (0x0000, 0, 0),
    (0x6666, 2, 0),
    (0x0123, 0, 0),
    (0x4567, 0, 2),
    (0x4589, 1, 1),
    (0x6700, 1, 0),
    (0x0798, 0, 1),
    (0x6484, 3, 0),
    (0x6480, 2, 1),
    (0x6884, 3, 0),
    (0x6684, 4, 0),
    (0x8468, 0, 3),
    (0x8866, 0, 3),
    (0x8466, 0, 4),
];

/// A reference case a backend got wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckFailure {
    pub scorer: ScorerKind,
    pub guess: Codeword,
    pub expected: Score,
    pub actual: Score,
}

/// Outcome of checking every backend
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub cases_run: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The reference cases as 4-pin codewords and expected scores
#[must_use]
pub fn reference_cases() -> Vec<(Codeword, Codeword, Score)> {
    let secret = Codeword::new(REFERENCE_SECRET, 4);
    REFERENCE_CASES
        .iter()
        .map(|&(guess, black, white)| (secret, Codeword::new(guess, 4), Score::new(black, white)))
        .collect()
}

/// Score every reference case with each of `scorers`
#[must_use]
pub fn run_reference_checks(scorers: &[ScorerKind]) -> CheckReport {
    let cases = reference_cases();
    let mut report = CheckReport::default();

    for &scorer in scorers {
        for &(secret, guess, expected) in &cases {
            report.cases_run += 1;
            let actual = scorer.score(&secret, &guess);
            if actual != expected {
                report.failures.push(CheckFailure {
                    scorer,
                    guess,
                    expected,
                    actual,
                });
            }
        }
    }
    report
}

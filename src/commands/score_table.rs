//! Score table export and verification
//!
//! A score table is a CSV of every ordered `(secret, guess)` pair of a game
//! with the expected black and white counts, for checking scorers written
//! elsewhere against this one, or this one against a table from elsewhere.

use super::check::reference_cases;
use crate::core::{Catalog, Codeword, Score, SolverError};
use crate::scoring::ScorerKind;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const SCORE_TABLE_HEADER: &str =
    "Secret,Guess,Correct Digit and Location,Correct Digit Wrong Location";

/// Write the score table for `catalog` and return the number of rows
///
/// For 4-pin games the reference cases (which use colors outside the game)
/// come first.
///
/// # Errors
/// Returns [`SolverError::Io`] if writing fails.
pub fn write_score_table<W: Write>(
    catalog: &Catalog,
    scorer: ScorerKind,
    mut out: W,
) -> Result<usize, SolverError> {
    writeln!(out, "{SCORE_TABLE_HEADER}")?;
    let mut rows = 0;

    if catalog.config().pin_count() == 4 {
        for (secret, guess, score) in reference_cases() {
            write_row(&mut out, &secret, &guess, score)?;
            rows += 1;
        }
    }

    for secret in catalog.all() {
        for guess in catalog.all() {
            write_row(&mut out, secret, guess, scorer.score(secret, guess))?;
            rows += 1;
        }
    }

    out.flush()?;
    info!(rows, "Wrote score table");
    Ok(rows)
}

fn write_row<W: Write>(out: &mut W, secret: &Codeword, guess: &Codeword, score: Score) -> std::io::Result<()> {
    writeln!(out, "{secret},{guess},{},{}", score.black(), score.white())
}

/// A row whose expected score differs from the computed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMismatch {
    pub line: usize,
    pub secret: Codeword,
    pub guess: Codeword,
    pub expected: Score,
    pub actual: Score,
}

/// Outcome of checking a score table
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub rows: usize,
    pub failed: usize,
    pub first_failure: Option<TableMismatch>,
}

impl VerifyReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.rows == 0 {
            return 100.0;
        }
        (self.rows - self.failed) as f64 / self.rows as f64 * 100.0
    }
}

/// Score every row of a table with `scorer` and compare
///
/// The first line is a header and is skipped. Blank lines are ignored.
///
/// # Errors
/// - [`SolverError::Io`] if reading fails
/// - [`SolverError::Format`] for a row that is not
///   `secret,guess,black,white` or whose codewords differ in length
pub fn verify_score_table<R: BufRead>(input: R, scorer: ScorerKind) -> Result<VerifyReport, SolverError> {
    let mut report = VerifyReport::default();

    for (idx, line) in input.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (secret, guess, expected) = parse_row(&line, line_no)?;
        let actual = scorer.score(&secret, &guess);
        report.rows += 1;

        if actual != expected {
            report.failed += 1;
            debug!(line = line_no, %secret, %guess, %expected, %actual, "Score mismatch");
            if report.first_failure.is_none() {
                report.first_failure = Some(TableMismatch {
                    line: line_no,
                    secret,
                    guess,
                    expected,
                    actual,
                });
            }
        }
    }

    info!(rows = report.rows, failed = report.failed, "Verified score table");
    Ok(report)
}

fn parse_row(line: &str, line_no: usize) -> Result<(Codeword, Codeword, Score), SolverError> {
    let format_error = |message: String| SolverError::Format {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [secret, guess, black, white] = fields[..] else {
        return Err(format_error(format!("expected 4 fields, found {}", fields.len())));
    };

    let secret = Codeword::parse(secret).map_err(|e| format_error(e.to_string()))?;
    let guess = Codeword::parse(guess).map_err(|e| format_error(e.to_string()))?;
    if secret.pin_count() != guess.pin_count() {
        return Err(format_error(format!("{secret} and {guess} differ in length")));
    }

    let count = |text: &str| {
        text.parse::<u8>()
            .ok()
            .filter(|&n| n <= secret.pin_count())
            .ok_or_else(|| format_error(format!("bad peg count '{text}'")))
    };
    let (black, white) = (count(black)?, count(white)?);
    if black + white > secret.pin_count() {
        return Err(format_error(format!("{black} black and {white} white exceed the pins")));
    }

    Ok((secret, guess, Score::new(black, white)))
}

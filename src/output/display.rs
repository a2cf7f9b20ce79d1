//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{CheckReport, SolveResult, VerifyReport};
use crate::core::{Codeword, Score};
use crate::solver::GuessSource;
use colored::Colorize;

/// Print the result of solving a secret
#[allow(clippy::cast_precision_loss)]
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let record = &result.record;
    let pins = record.secret.pin_count();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", record.secret.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let total = record.steps.first().map_or(0, |s| s.candidates);
    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess.to_string().bold(),
            score_to_pegs(step.score, pins),
            format!("({})", step.score).bright_black()
        );

        if verbose {
            let source = match step.source {
                GuessSource::Opening => "opening",
                GuessSource::Tree => "strategy tree",
                GuessSource::Forced => "only candidate",
                GuessSource::Policy => "guess policy",
            };
            let bar = create_progress_bar(step.candidates as f64, total as f64, 30);
            println!("  Candidates: [{}] {}", bar.green(), step.candidates);
            println!("  Source:     {source}");
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", record.turns()).green().bold()
    );
    if verbose {
        println!("  Comparisons:        {}", result.comparisons);
        println!("  Minimax selections: {}", result.selector_invocations);
        println!("  Time:               {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print one scored pair
pub fn print_score(secret: &Codeword, guess: &Codeword, score: Score) {
    println!(
        "{} vs {}: {} black, {} white {} ({})",
        secret.to_string().bright_yellow(),
        guess.to_string().bold(),
        score.black(),
        score.white(),
        score_to_pegs(score, secret.pin_count()),
        score
    );
}

/// Print the result of the scoring self-check
pub fn print_check_report(report: &CheckReport) {
    if report.passed() {
        println!("{}", format!("✅ Tests pass ({} cases)", report.cases_run).green().bold());
        return;
    }

    println!(
        "{}",
        format!("❌ Some tests failed! {} of {}", report.failures.len(), report.cases_run)
            .red()
            .bold()
    );
    for failure in &report.failures {
        println!(
            "  {}: {} expected {}, got {}",
            failure.scorer.to_string().yellow(),
            failure.guess,
            failure.expected,
            failure.actual.to_string().red()
        );
    }
}

/// Print the result of verifying a score table
pub fn print_verify_report(report: &VerifyReport, scorer_name: &str) {
    println!("Done running {} test cases.", report.rows);
    let rate = format!("{:.2}%", report.pass_rate());
    let rate = if report.passed() { rate.green() } else { rate.red() };
    print!("{scorer_name}: passed {rate}");

    if let Some(first) = &report.first_failure {
        print!(
            ", first failure: line {} {} vs {} expected {}, got {}",
            first.line, first.secret, first.guess, first.expected, first.actual
        );
    }
    println!();
}

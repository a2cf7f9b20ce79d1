//! Test all secrets - comprehensive solver evaluation
//!
//! Plays the solver against every codeword of its game (or the first
//! `limit`) and collects turn statistics and work counters.

use crate::core::{Codeword, SolverError};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics from testing all secrets
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub max_turns: usize,
    /// First secret that needed `max_turns`
    pub max_secret: Option<Codeword>,
    pub turn_distribution: HashMap<usize, usize>,
    pub comparisons: u64,
    pub selector_invocations: u64,
    pub tree_hits: u64,
    pub tree_nodes: usize,
    pub cache_cells_filled: Option<usize>,
    pub total_time: Duration,
}

impl TestAllStatistics {
    /// Average wall time per game
    #[must_use]
    pub fn time_per_game(&self) -> Duration {
        u32::try_from(self.total_games)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_time / n)
    }
}

/// Run the solver on every secret (or the first `limit`)
///
/// Counters are reset first, so the statistics cover this run only. The
/// strategy tree is not reset: a second run replays the first.
///
/// # Errors
///
/// Returns the first [`SolverError`] any game reports.
#[allow(clippy::cast_precision_loss)]
pub fn run_test_all(
    solver: &mut Solver,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics, SolverError> {
    let secrets: Vec<Codeword> = solver
        .catalog()
        .all()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .copied()
        .collect();

    info!(games = secrets.len(), policy = %solver.config().policy, "Testing all secrets");
    solver.reset_stats();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_turns = 0;
    let mut max_turns = 0;
    let mut max_secret = None;

    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let turns = solver.find_secret(secret)?.turns();

        total_turns += turns;
        *turn_distribution.entry(turns).or_insert(0) += 1;
        if turns > max_turns {
            max_turns = turns;
            max_secret = Some(*secret);
        }

        if idx % 64 == 0 {
            let avg = total_turns as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.4}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    let stats = solver.stats();
    let average_turns = if secrets.is_empty() {
        0.0
    } else {
        total_turns as f64 / secrets.len() as f64
    };

    info!(
        average_turns,
        max_turns,
        comparisons = stats.comparisons,
        elapsed_ms = total_time.as_millis(),
        "Finished testing all secrets"
    );

    Ok(TestAllStatistics {
        total_games: secrets.len(),
        total_turns,
        average_turns,
        max_turns,
        max_secret,
        turn_distribution,
        comparisons: stats.comparisons,
        selector_invocations: stats.selector_invocations,
        tree_hits: stats.tree_hits,
        tree_nodes: stats.tree_nodes,
        cache_cells_filled: solver.scorer().cache().map(|cache| cache.filled()),
        total_time,
    })
}

/// Print test-all statistics
#[allow(clippy::cast_precision_loss)]
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_games);
    println!("  Total turns:         {}", stats.total_turns);
    println!(
        "  Average turns:       {}",
        format!("{:.4}", stats.average_turns).bright_yellow().bold()
    );
    if let Some(secret) = stats.max_secret {
        println!(
            "  Max turns:           {} (first at {})",
            stats.max_turns.to_string().yellow(),
            secret.to_string().yellow()
        );
    }
    println!("  Total time:          {:.3}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per game:       {:.3}ms",
        stats.time_per_game().as_secs_f64() * 1000.0
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = stats.turn_distribution.values().copied().max().unwrap_or(1);
    for turns in 1..=stats.max_turns {
        let count = stats.turn_distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / stats.total_games.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {turns} turns: {bar} {count:6} ({percentage:5.1}%)");
    }

    println!("\n🧮 {}", "Work".bright_cyan().bold());
    println!("  Comparisons:         {}", stats.comparisons);
    println!("  Minimax selections:  {}", stats.selector_invocations);
    println!("  Strategy tree hits:  {}", stats.tree_hits);
    println!("  Strategy tree nodes: {}", stats.tree_nodes);
    if let Some(filled) = stats.cache_cells_filled {
        println!("  Score cache filled:  {filled} cells");
    } else {
        println!("  Score cache:         {}", "disabled".bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::{GuessPolicy, SolverConfig};

    fn solver(policy: GuessPolicy) -> Solver {
        Solver::new(SolverConfig {
            game: GameConfig::new(3, 3).unwrap(),
            policy,
            seed: Some(1),
            ..SolverConfig::default()
        })
    }

    #[test]
    fn covers_every_secret() {
        let mut solver = solver(GuessPolicy::Knuth);
        let stats = run_test_all(&mut solver, None, false).unwrap();

        assert_eq!(stats.total_games, 27);
        assert_eq!(stats.turn_distribution.values().sum::<usize>(), 27);
        assert_eq!(stats.turn_distribution.get(&1), Some(&1));
        assert!(stats.max_turns >= 2);
        assert!(stats.max_secret.is_some());
        assert!((stats.average_turns - stats.total_turns as f64 / 27.0).abs() < 1e-12);
        assert!(stats.comparisons > 0);
        assert!(stats.cache_cells_filled.is_some());
    }

    #[test]
    fn limit_restricts_games() {
        let mut solver = solver(GuessPolicy::FirstOne);
        let stats = run_test_all(&mut solver, Some(5), false).unwrap();
        assert_eq!(stats.total_games, 5);
    }

    #[test]
    fn second_run_replays_tree() {
        let mut solver = solver(GuessPolicy::Knuth);
        let first = run_test_all(&mut solver, None, false).unwrap();
        let second = run_test_all(&mut solver, None, false).unwrap();

        assert_eq!(second.selector_invocations, 0);
        assert_eq!(second.tree_nodes, first.tree_nodes);
        assert_eq!(second.total_turns, first.total_turns);
        assert_eq!(second.comparisons, second.total_turns as u64);
    }

    #[test]
    fn empty_limit() {
        let mut solver = solver(GuessPolicy::Random);
        let stats = run_test_all(&mut solver, Some(0), false).unwrap();
        assert_eq!(stats.total_games, 0);
        assert!(stats.average_turns.abs() < f64::EPSILON);
        assert_eq!(stats.max_secret, None);
    }
}

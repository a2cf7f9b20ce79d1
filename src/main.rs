//! Mastermind Solver - CLI
//!
//! Plays Mastermind against every secret with Knuth's minimax, reusing the
//! strategy learned from earlier games. Classic 4 pins, 6 colors averages
//! 4.476 turns with a worst case of 5.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        KNUTH_EXAMPLE_SECRET, default_strategy_path, print_test_all_statistics, run_reference_checks,
        run_test_all, solve_secret, verify_score_table, write_score_table, write_strategy_dot,
    },
    core::{Catalog, Codeword, GameConfig},
    output::{print_check_report, print_score, print_solve_result, print_verify_report},
    scoring::{ScoreCache, ScorerKind},
    solver::{GuessPolicy, MAX_CODEWORDS, Solver, SolverConfig},
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::info;

const BYTES_PER_MIB: u64 = 1 << 20;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using Knuth's minimax with a reusable strategy tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pins per codeword (1-8)
    #[arg(short, long, global = true, default_value_t = GameConfig::CLASSIC.pin_count())]
    pins: u8,

    /// Colors per pin (1-15)
    #[arg(short, long, global = true, default_value_t = GameConfig::CLASSIC.color_count())]
    colors: u8,

    /// Guess policy: knuth (default), first-one, random
    #[arg(long, global = true, default_value = "knuth")]
    policy: String,

    /// Scoring backend: counting-lanes (default), counting-auto-vec, counting-scalar, simple-loops
    #[arg(long, global = true, default_value = "counting-lanes")]
    scorer: String,

    /// Largest score cache to allocate, in MiB; 0 disables it
    #[arg(long, global = true, default_value_t = 4096)]
    cache_limit_mib: u64,

    /// Seed for the random policy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve Knuth's example secret, then every secret (default)
    Run,

    /// Solve a specific secret
    Solve {
        /// The secret, one hex digit per pin
        #[arg(default_value = KNUTH_EXAMPLE_SECRET)]
        secret: String,

        /// Show candidate counts and work counters
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every secret and report statistics
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Score one guess against one secret
    Score { secret: String, guess: String },

    /// Check every scoring backend against reference scores
    Check,

    /// Write every (secret, guess) score of the game as CSV
    ExportScores {
        /// Output path (default: mastermind_<pins>p<colors>c.txt)
        path: Option<String>,
    },

    /// Check the scoring backend against a CSV score table
    VerifyScores { path: String },

    /// Solve every secret, then write the strategy tree as GraphViz
    DumpStrategy {
        /// Output path (default: mastermind_strategy_<pins>p<colors>c.gv)
        path: Option<String>,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the solver configuration from the global flags
fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let game = GameConfig::new(cli.pins, cli.colors)?;
    let Some(policy) = GuessPolicy::from_name(&cli.policy) else {
        bail!("unknown policy '{}'", cli.policy);
    };
    let scorer = scorer_kind(&cli.scorer)?;

    Ok(SolverConfig {
        game,
        policy,
        scorer,
        cache_limit_bytes: cli.cache_limit_mib.saturating_mul(BYTES_PER_MIB),
        seed: cli.seed,
    })
}

fn scorer_kind(name: &str) -> Result<ScorerKind> {
    ScorerKind::from_name(name).with_context(|| format!("unknown scorer '{name}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = solver_config(&cli)?;
    info!(
        pins = config.game.pin_count(),
        colors = config.game.color_count(),
        codewords = config.game.total_codewords(),
        policy = %config.policy,
        scorer = %config.scorer,
        cache_estimate_bytes = ScoreCache::estimate_bytes(config.game.total_codewords()),
        "Configured solver"
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_default_command(config),
        Commands::Solve { secret, verbose } => run_solve_command(config, &secret, verbose),
        Commands::TestAll { limit, quiet } => run_test_all_command(config, limit, !quiet),
        Commands::Score { secret, guess } => run_score_command(config, &secret, &guess),
        Commands::Check => run_check_command(),
        Commands::ExportScores { path } => run_export_command(config, path),
        Commands::VerifyScores { path } => run_verify_command(config, &path),
        Commands::DumpStrategy { path } => run_dump_command(config, path),
    }
}

fn run_default_command(config: SolverConfig) -> Result<()> {
    let mut solver = Solver::try_new(config)?;

    // Knuth's example only exists in the classic game
    if config.game == GameConfig::CLASSIC {
        let result = solve_secret(&mut solver, KNUTH_EXAMPLE_SECRET)?;
        print_solve_result(&result, true);
        // Start the full run from a fresh strategy
        solver.reset_strategy();
    }

    let stats = run_test_all(&mut solver, None, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_solve_command(config: SolverConfig, secret: &str, verbose: bool) -> Result<()> {
    let mut solver = Solver::try_new(config)?;
    let result = solve_secret(&mut solver, secret)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(config: SolverConfig, limit: Option<usize>, show_progress: bool) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\n{} pins, {} colors: {} secrets",
        config.game.pin_count(),
        config.game.color_count(),
        config.game.total_codewords()
    );
    println!("Policy: {}", config.policy);
    println!("Scorer: {}", config.scorer);
    println!();

    let mut solver = Solver::try_new(config)?;
    let stats = run_test_all(&mut solver, limit, show_progress)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_score_command(config: SolverConfig, secret: &str, guess: &str) -> Result<()> {
    let secret = Codeword::parse(secret)?;
    let guess = Codeword::parse(guess)?;
    if secret.pin_count() != guess.pin_count() {
        bail!("{secret} and {guess} have different pin counts");
    }
    print_score(&secret, &guess, config.scorer.score(&secret, &guess));
    Ok(())
}

fn run_check_command() -> Result<()> {
    let report = run_reference_checks(&ScorerKind::ALL);
    print_check_report(&report);
    if !report.passed() {
        bail!("{} reference checks failed", report.failures.len());
    }
    Ok(())
}

fn run_export_command(config: SolverConfig, path: Option<String>) -> Result<()> {
    let game = config.game;
    if game.total_codewords() > MAX_CODEWORDS {
        bail!("{} codewords is too many to enumerate", game.total_codewords());
    }
    let path = path.unwrap_or_else(|| format!("mastermind_{}p{}c.txt", game.pin_count(), game.color_count()));
    println!("Writing tests to {path}");

    let file = File::create(&path).with_context(|| format!("failed to create {path}"))?;
    let catalog = Catalog::new(game);
    let rows = write_score_table(&catalog, config.scorer, BufWriter::new(file))?;
    println!("Wrote {rows} test cases");
    Ok(())
}

fn run_verify_command(config: SolverConfig, path: &str) -> Result<()> {
    println!("Running tests from file {path}");
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let report = verify_score_table(BufReader::new(file), config.scorer)?;
    print_verify_report(&report, config.scorer.name());
    if !report.passed() {
        bail!("{} of {} scores did not match", report.failed, report.rows);
    }
    Ok(())
}

fn run_dump_command(config: SolverConfig, path: Option<String>) -> Result<()> {
    let mut solver = Solver::try_new(config)?;
    let stats = run_test_all(&mut solver, None, true)?;
    print_test_all_statistics(&stats);

    let path = path.unwrap_or_else(|| default_strategy_path(config.game));
    println!("\nWriting strategy to {path}");
    let file = File::create(&path).with_context(|| format!("failed to create {path}"))?;
    let nodes = write_strategy_dot(solver.tree(), config.game, BufWriter::new(file))?;
    println!("Wrote {nodes} strategy nodes");
    Ok(())
}

//! End-to-end games over full solution spaces.

use mastermind_solver::commands::run_test_all;
use mastermind_solver::core::{Codeword, GameConfig, Score, SolverError};
use mastermind_solver::scoring::ScorerKind;
use mastermind_solver::solver::{GuessPolicy, Solver, SolverConfig};

fn solver(pins: u8, colors: u8, policy: GuessPolicy, scorer: ScorerKind) -> Solver {
    Solver::new(SolverConfig {
        game: GameConfig::new(pins, colors).unwrap(),
        policy,
        scorer,
        seed: Some(2024),
        ..SolverConfig::default()
    })
}

#[test]
fn every_policy_finds_every_secret() {
    for policy in GuessPolicy::ALL {
        let mut solver = solver(3, 4, policy, ScorerKind::default());
        let secrets = solver.catalog().all().to_vec();
        for secret in &secrets {
            let record = solver.find_secret(secret).unwrap();
            assert_eq!(record.steps.last().unwrap().guess, *secret, "{policy}");
            assert!(record.turns() <= secrets.len());
        }
    }
}

#[test]
fn narrowing_is_sound() {
    // Every recorded score is the true score of that guess against the secret
    let mut solver = solver(2, 3, GuessPolicy::Knuth, ScorerKind::SimpleLoops);
    let secrets = solver.catalog().all().to_vec();
    for secret in &secrets {
        let record = solver.find_secret(secret).unwrap();
        for step in &record.steps {
            assert_eq!(step.score, ScorerKind::CountingLanes.score(secret, &step.guess));
        }
    }
}

#[test]
fn backends_play_identical_games() {
    let play = |scorer| {
        let mut solver = solver(3, 4, GuessPolicy::Knuth, scorer);
        let secrets = solver.catalog().all().to_vec();
        secrets
            .iter()
            .map(|s| {
                let record = solver.find_secret(s).unwrap();
                record.steps.iter().map(|step| step.guess).collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
    };

    let expected = play(ScorerKind::SimpleLoops);
    for kind in ScorerKind::ALL {
        assert_eq!(play(kind), expected, "{kind}");
    }
}

#[test]
fn cache_does_not_change_games() {
    let play = |cache_limit_bytes| {
        let mut solver = Solver::new(SolverConfig {
            game: GameConfig::new(3, 5).unwrap(),
            cache_limit_bytes,
            ..SolverConfig::default()
        });
        let stats = run_test_all(&mut solver, None, false).unwrap();
        (stats.total_turns, stats.max_turns, solver.scorer().cache().is_some())
    };

    let (cached_turns, cached_max, has_cache) = play(u64::MAX);
    let (plain_turns, plain_max, no_cache) = play(0);
    assert!(has_cache);
    assert!(!no_cache);
    assert_eq!(cached_turns, plain_turns);
    assert_eq!(cached_max, plain_max);
}

#[test]
fn single_color_game_is_one_turn() {
    let mut solver = solver(4, 1, GuessPolicy::Knuth, ScorerKind::default());
    let secret = *solver.catalog().parse("1111").unwrap();
    let record = solver.find_secret(&secret).unwrap();
    assert_eq!(record.turns(), 1);
    assert_eq!(record.steps[0].score, Score::winning(4));
}

#[test]
fn secret_from_other_game_rejected() {
    let mut solver = solver(2, 3, GuessPolicy::Knuth, ScorerKind::default());
    let other = *Solver::new(SolverConfig::default()).catalog().parse("3632").unwrap();
    assert!(matches!(
        solver.find_secret(&other),
        Err(SolverError::UnknownCodeword(_))
    ));
}

#[test]
fn secret_with_unknown_colors_rejected() {
    let mut solver = solver(2, 3, GuessPolicy::Knuth, ScorerKind::default());
    for text in ["00", "44"] {
        let secret = Codeword::parse(text).unwrap();
        assert!(
            matches!(solver.find_secret(&secret), Err(SolverError::UnknownCodeword(_))),
            "{text}"
        );
    }
    assert_eq!(solver.stats().tree_nodes, 1);
}

#[test]
fn strategy_lists_released_after_full_run() {
    let mut solver = solver(3, 4, GuessPolicy::Knuth, ScorerKind::default());
    run_test_all(&mut solver, None, false).unwrap();

    let stats = solver.tree().stats();
    // Every reachable outcome has been seen, so no node needs its lists
    assert_eq!(stats.holding_working_sets, 0);
    assert_eq!(stats.nodes, solver.stats().tree_nodes);
    assert!(solver.tree().get(solver.tree().root()).is_fully_explored());
}

/// Knuth's published result for the classic game
#[test]
#[ignore = "plays all 1296 classic games; slow in debug builds"]
fn classic_game_matches_knuth() {
    let mut solver = solver(4, 6, GuessPolicy::Knuth, ScorerKind::default());
    let stats = run_test_all(&mut solver, None, false).unwrap();

    assert_eq!(stats.total_games, 1296);
    assert_eq!(stats.max_turns, 5);
    assert!((stats.average_turns - 4.476).abs() < 0.001, "{}", stats.average_turns);
}

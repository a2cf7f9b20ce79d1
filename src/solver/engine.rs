//! Main Mastermind solver interface

use super::minimax::select_best_guess;
use super::policy::GuessPolicy;
use super::tree::{NodeId, StrategyTree};
use crate::core::{Catalog, Codeword, GameConfig, Score, SolverError};
use crate::scoring::{Scorer, ScorerKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Default ceiling for the score cache: 4 GiB
pub const DEFAULT_CACHE_LIMIT_BYTES: u64 = 4 << 30;

/// Largest solution space [`Solver::try_new`] will enumerate
///
/// The enumeration is held three times over (catalog plus the root's two
/// working lists), so 8 pins with 11 colors fits and 8 pins with 12 does not.
pub const MAX_CODEWORDS: u64 = 1 << 28;

/// Everything needed to build a [`Solver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub game: GameConfig,
    pub policy: GuessPolicy,
    pub scorer: ScorerKind,
    /// Largest score cache to allocate; 0 disables the cache
    pub cache_limit_bytes: u64,
    /// Seed for [`GuessPolicy::Random`]; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::CLASSIC,
            policy: GuessPolicy::default(),
            scorer: ScorerKind::default(),
            cache_limit_bytes: DEFAULT_CACHE_LIMIT_BYTES,
            seed: None,
        }
    }
}

/// Where a guess came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// The fixed opening guess
    Opening,
    /// Replayed from an earlier game's strategy
    Tree,
    /// The only remaining possible solution
    Forced,
    /// Chosen by the guess policy
    Policy,
}

/// One guess of a game and its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Codeword,
    pub score: Score,
    /// Possible solutions when the guess was played
    pub candidates: usize,
    pub source: GuessSource,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Codeword,
    pub steps: Vec<GuessStep>,
}

impl GameRecord {
    /// Number of guesses, counting the winning one
    #[inline]
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Counters accumulated across games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverStats {
    /// Scores requested from the scorer
    pub comparisons: u64,
    /// Minimax selections run
    pub selector_invocations: u64,
    /// Guesses replayed from the strategy tree
    pub tree_hits: u64,
    pub tree_nodes: usize,
}

/// Main Mastermind solver
///
/// Owns the enumeration, the scorer and the strategy tree. The tree persists
/// across [`Solver::find_secret`] calls until [`Solver::reset_strategy`].
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    catalog: Catalog,
    scorer: Scorer,
    tree: StrategyTree,
    rng: StdRng,
    selector_invocations: u64,
    tree_hits: u64,
}

impl Solver {
    /// Create a solver, enumerating every codeword and sizing the score cache
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::solver::{Solver, SolverConfig};
    ///
    /// let config = SolverConfig {
    ///     game: GameConfig::new(3, 4).unwrap(),
    ///     ..SolverConfig::default()
    /// };
    /// let mut solver = Solver::new(config);
    /// let secret = *solver.catalog().parse("342").unwrap();
    ///
    /// let record = solver.find_secret(&secret).unwrap();
    /// assert_eq!(record.steps.last().unwrap().guess, secret);
    /// ```
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let catalog = Catalog::new(config.game);
        debug!(
            pins = config.game.pin_count(),
            colors = config.game.color_count(),
            codewords = catalog.len(),
            "Solution space enumerated"
        );

        let scorer = if config.cache_limit_bytes == 0 {
            Scorer::new(config.scorer)
        } else {
            Scorer::with_cache(config.scorer, &catalog, config.cache_limit_bytes)
        };
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let tree = Self::fresh_tree(&catalog);

        Self {
            config,
            catalog,
            scorer,
            tree,
            rng,
            selector_invocations: 0,
            tree_hits: 0,
        }
    }

    /// Like [`Solver::new`], but refuse games too large to enumerate
    ///
    /// # Errors
    /// Returns [`SolverError::Configuration`] if the game has more than
    /// [`MAX_CODEWORDS`] codewords.
    pub fn try_new(config: SolverConfig) -> Result<Self, SolverError> {
        let total = config.game.total_codewords();
        if total > MAX_CODEWORDS {
            return Err(SolverError::Configuration(format!(
                "{} pins with {} colors is {total} codewords, more than the {MAX_CODEWORDS} that can be enumerated",
                config.game.pin_count(),
                config.game.color_count()
            )));
        }
        Ok(Self::new(config))
    }

    fn fresh_tree(catalog: &Catalog) -> StrategyTree {
        StrategyTree::new(*catalog.initial_guess(), catalog.all().to_vec(), catalog.all().to_vec())
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &StrategyTree {
        &self.tree
    }

    /// Discard the learned strategy; the next game starts from the opening alone
    pub fn reset_strategy(&mut self) {
        self.tree = Self::fresh_tree(&self.catalog);
    }

    /// Zero the comparison, selector and tree-hit counters
    pub fn reset_stats(&mut self) {
        self.scorer.reset_counter();
        self.selector_invocations = 0;
        self.tree_hits = 0;
    }

    #[must_use]
    pub fn stats(&self) -> SolverStats {
        SolverStats {
            comparisons: self.scorer.comparisons(),
            selector_invocations: self.selector_invocations,
            tree_hits: self.tree_hits,
            tree_nodes: self.tree.len(),
        }
    }

    /// Play one game against `secret` and return every guess made
    ///
    /// Guesses already in the strategy tree are replayed; new game states
    /// extend the tree.
    ///
    /// # Errors
    /// - [`SolverError::UnknownCodeword`] if `secret` is not a codeword of
    ///   this game (wrong pin count or a color outside the game)
    /// - [`SolverError::InvariantViolation`] if no possible solution remains
    ///   before the secret is found
    pub fn find_secret(&mut self, secret: &Codeword) -> Result<GameRecord, SolverError> {
        let pins = self.config.game.pin_count();
        if secret.pin_count() != pins {
            return Err(SolverError::UnknownCodeword(format!(
                "{secret} has {} pins, expected {pins}",
                secret.pin_count()
            )));
        }
        // Resolve against the enumeration so raw codewords carry an ordinal
        let secret = *self.catalog.lookup(secret.packed())?;

        let winning = Score::winning(pins);
        let mut node = self.tree.root();
        let mut source = GuessSource::Opening;
        let mut steps = Vec::new();
        debug!(%secret, "Starting game");

        loop {
            let current = self.tree.get(node);
            let guess = *current.guess();
            let score = self.scorer.score(&secret, &guess);
            trace!(%guess, %score, candidates = current.solutions_remaining(), ?source, "Played guess");
            steps.push(GuessStep {
                guess,
                score,
                candidates: current.solutions_remaining(),
                source,
            });

            if score == winning {
                break;
            }

            if let Some(next) = self.tree.child(node, score) {
                self.tree_hits += 1;
                node = next;
                source = GuessSource::Tree;
                continue;
            }

            (node, source) = self.extend(node, score, &secret)?;
        }

        debug!(%secret, turns = steps.len(), "Found secret");
        Ok(GameRecord { secret, steps })
    }

    /// Narrow the possible solutions at `node` by `score` and add the next guess
    fn extend(
        &mut self,
        node: NodeId,
        score: Score,
        secret: &Codeword,
    ) -> Result<(NodeId, GuessSource), SolverError> {
        let current = self.tree.get(node);
        let guess = *current.guess();
        let winning = Score::winning(guess.pin_count());

        let mut seen = [false; Score::SLOTS];
        let mut possible = Vec::new();
        for candidate in current.possible_solutions() {
            let candidate_score = self.scorer.score(candidate, &guess);
            seen[usize::from(candidate_score.value())] = true;
            if candidate_score == score {
                possible.push(*candidate);
            }
        }
        seen[usize::from(winning.value())] = false;
        let outcomes = seen.iter().filter(|&&hit| hit).count();

        let unguessed: Vec<Codeword> = current
            .unguessed()
            .iter()
            .filter(|c| **c != guess)
            .copied()
            .collect();

        if possible.is_empty() {
            return Err(SolverError::InvariantViolation {
                secret: secret.to_string(),
                detail: format!("no possible solutions remain after guess {guess} scored {score}"),
            });
        }
        self.tree.set_expected_children(node, outcomes);
        trace!(%guess, %score, remaining = possible.len(), outcomes, "Narrowed possible solutions");

        let (next, source) = if possible.len() == 1 {
            (possible[0], GuessSource::Forced)
        } else {
            (self.choose_guess(&possible, &unguessed, secret)?, GuessSource::Policy)
        };

        let child = self.tree.add_child(node, score, next, possible, unguessed)?;
        Ok((child, source))
    }

    fn choose_guess(
        &mut self,
        possible: &[Codeword],
        unguessed: &[Codeword],
        secret: &Codeword,
    ) -> Result<Codeword, SolverError> {
        match self.config.policy {
            GuessPolicy::FirstOne => Ok(possible[0]),
            GuessPolicy::Random => Ok(possible[self.rng.random_range(0..possible.len())]),
            GuessPolicy::Knuth => {
                self.selector_invocations += 1;
                select_best_guess(&self.scorer, unguessed, possible)
                    .map(|selection| selection.guess)
                    .ok_or_else(|| SolverError::InvariantViolation {
                        secret: secret.to_string(),
                        detail: "no unplayed codewords left to choose from".to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_solver(policy: GuessPolicy) -> Solver {
        Solver::new(SolverConfig {
            game: GameConfig::new(2, 3).unwrap(),
            policy,
            seed: Some(7),
            ..SolverConfig::default()
        })
    }

    fn code(solver: &Solver, text: &str) -> Codeword {
        *solver.catalog().parse(text).unwrap()
    }

    #[test]
    fn opening_guess_wins_immediately() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "12");

        let record = solver.find_secret(&secret).unwrap();
        assert_eq!(record.turns(), 1);
        assert_eq!(record.steps[0].source, GuessSource::Opening);
        assert_eq!(record.steps[0].score, Score::winning(2));
        assert_eq!(record.steps[0].candidates, 9);
    }

    #[test]
    fn last_guess_is_secret() {
        for policy in GuessPolicy::ALL {
            let mut solver = small_solver(policy);
            let secrets: Vec<_> = solver.catalog().all().to_vec();
            for secret in &secrets {
                let record = solver.find_secret(secret).unwrap();
                let last = record.steps.last().unwrap();
                assert_eq!(last.guess, *secret, "{policy}");
                assert_eq!(last.score, Score::winning(2));
                assert!(record.steps[..record.turns() - 1]
                    .iter()
                    .all(|step| step.score != Score::winning(2)));
            }
        }
    }

    #[test]
    fn knuth_two_by_three_takes_at_most_three() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secrets: Vec<_> = solver.catalog().all().to_vec();
        let max = secrets
            .iter()
            .map(|s| solver.find_secret(s).unwrap().turns())
            .max()
            .unwrap();
        assert_eq!(max, 3);
    }

    #[test]
    fn candidates_never_grow() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "31");
        let record = solver.find_secret(&secret).unwrap();
        for pair in record.steps.windows(2) {
            assert!(pair[1].candidates <= pair[0].candidates);
        }
    }

    #[test]
    fn replay_uses_tree() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "31");

        let first = solver.find_secret(&secret).unwrap();
        let before = solver.stats();
        let second = solver.find_secret(&secret).unwrap();
        let after = solver.stats();

        let guesses = |r: &GameRecord| r.steps.iter().map(|s| s.guess).collect::<Vec<_>>();
        assert_eq!(guesses(&first), guesses(&second));
        assert_eq!(after.selector_invocations, before.selector_invocations);
        assert_eq!(after.tree_nodes, before.tree_nodes);
        assert_eq!(after.tree_hits, before.tree_hits + first.turns() as u64 - 1);
        assert!(second.steps[1..].iter().all(|s| s.source == GuessSource::Tree));
    }

    #[test]
    fn reset_strategy_forgets_tree() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "31");
        let first = solver.find_secret(&secret).unwrap();
        assert!(solver.stats().tree_nodes > 1);

        solver.reset_strategy();
        assert_eq!(solver.stats().tree_nodes, 1);

        let again = solver.find_secret(&secret).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn reset_stats_zeroes_counters() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "33");
        solver.find_secret(&secret).unwrap();
        assert!(solver.stats().comparisons > 0);

        solver.reset_stats();
        let stats = solver.stats();
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.selector_invocations, 0);
        assert_eq!(stats.tree_hits, 0);
        assert!(stats.tree_nodes > 1);
    }

    #[test]
    fn wrong_pin_count_rejected() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = Codeword::parse("123").unwrap();
        assert!(matches!(
            solver.find_secret(&secret),
            Err(SolverError::UnknownCodeword(_))
        ));
    }

    #[test]
    fn colors_outside_game_rejected() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        for text in ["00", "44", "14"] {
            let secret = Codeword::parse(text).unwrap();
            assert!(
                matches!(solver.find_secret(&secret), Err(SolverError::UnknownCodeword(_))),
                "{text}"
            );
        }
        // Rejected before play, so the tree is untouched
        assert_eq!(solver.tree().len(), 1);
        assert_eq!(solver.stats().comparisons, 0);
    }

    #[test]
    fn raw_secret_resolves_to_enumerated_codeword() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let raw = Codeword::parse("31").unwrap();
        assert_eq!(raw.ordinal(), None);

        let record = solver.find_secret(&raw).unwrap();
        assert_eq!(record.secret.ordinal(), code(&solver, "31").ordinal());
        assert_eq!(record.steps.last().unwrap().guess, raw);
    }

    #[test]
    fn try_new_refuses_oversized_games() {
        let too_big = SolverConfig {
            game: GameConfig::new(8, 15).unwrap(),
            ..SolverConfig::default()
        };
        assert!(matches!(Solver::try_new(too_big), Err(SolverError::Configuration(_))));

        let small = SolverConfig {
            game: GameConfig::new(2, 3).unwrap(),
            ..SolverConfig::default()
        };
        assert_eq!(Solver::try_new(small).unwrap().catalog().len(), 9);
    }

    #[test]
    fn empty_candidates_is_invariant_violation() {
        let mut solver = small_solver(GuessPolicy::Knuth);
        let secret = code(&solver, "33");
        // A strategy that already ruled the secret out
        let opening = *solver.catalog().initial_guess();
        let without_secret: Vec<_> = solver
            .catalog()
            .all()
            .iter()
            .filter(|c| **c != secret)
            .copied()
            .collect();
        solver.tree = StrategyTree::new(opening, without_secret.clone(), without_secret);

        let result = solver.find_secret(&secret);
        assert!(matches!(result, Err(SolverError::InvariantViolation { .. })));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let play = || {
            let mut solver = Solver::new(SolverConfig {
                game: GameConfig::new(3, 4).unwrap(),
                policy: GuessPolicy::Random,
                seed: Some(42),
                ..SolverConfig::default()
            });
            let secrets: Vec<_> = solver.catalog().all().to_vec();
            secrets
                .iter()
                .map(|s| solver.find_secret(s).unwrap().turns())
                .collect::<Vec<_>>()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn classic_opening_is_1122() {
        let solver = Solver::new(SolverConfig::default());
        assert_eq!(solver.tree().get(solver.tree().root()).guess().to_string(), "1122");
    }
}

//! Scoring a guess against a secret
//!
//! One contract, `score(secret, guess) -> Score`, with interchangeable
//! backends that differ only in technique. [`Scorer`] is the component the
//! solver owns: it wraps the chosen backend with the optional score cache and
//! the comparison counter.

pub mod cache;
mod counting;
mod loops;

pub use cache::ScoreCache;
pub use counting::{black_hits, score_counting_auto_vec, score_counting_lanes, score_counting_scalar};
pub use loops::score_simple_loops;

use crate::core::{Catalog, Codeword, Score};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Scoring backend, selected by configuration
///
/// All backends return identical scores for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    /// Two passes over the pins with unused-color counters
    SimpleLoops,
    /// SWAR black pegs plus scalar per-color minimums
    CountingScalar,
    /// SWAR black pegs plus an auto-vectorized minimum-and-sum
    CountingAutoVec,
    /// SWAR black pegs plus a lane-wise minimum-and-sum in one `u128`
    #[default]
    CountingLanes,
}

impl ScorerKind {
    /// Every backend, for equivalence checks
    pub const ALL: [Self; 4] = [
        Self::SimpleLoops,
        Self::CountingScalar,
        Self::CountingAutoVec,
        Self::CountingLanes,
    ];

    /// Create a backend from its name
    ///
    /// Supported names: "simple-loops", "counting-scalar", "counting-auto-vec",
    /// "counting-lanes". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple-loops" | "loops" => Some(Self::SimpleLoops),
            "counting-scalar" | "scalar" => Some(Self::CountingScalar),
            "counting-auto-vec" | "auto-vec" => Some(Self::CountingAutoVec),
            "counting-lanes" | "lanes" => Some(Self::CountingLanes),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleLoops => "simple-loops",
            Self::CountingScalar => "counting-scalar",
            Self::CountingAutoVec => "counting-auto-vec",
            Self::CountingLanes => "counting-lanes",
        }
    }

    /// Score `guess` against `secret` with this backend, uncached and uncounted
    #[inline]
    #[must_use]
    pub fn score(self, secret: &Codeword, guess: &Codeword) -> Score {
        match self {
            Self::SimpleLoops => score_simple_loops(secret, guess),
            Self::CountingScalar => score_counting_scalar(secret, guess),
            Self::CountingAutoVec => score_counting_auto_vec(secret, guess),
            Self::CountingLanes => score_counting_lanes(secret, guess),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scoring component owned by one solver
///
/// Holds the backend, the optional cache and a comparison counter. The
/// counter and cache cells are atomics, so a `&Scorer` can be shared with
/// parallel workers.
#[derive(Debug)]
pub struct Scorer {
    kind: ScorerKind,
    cache: Option<ScoreCache>,
    comparisons: AtomicU64,
}

impl Scorer {
    /// Scorer without a cache
    #[must_use]
    pub const fn new(kind: ScorerKind) -> Self {
        Self {
            kind,
            cache: None,
            comparisons: AtomicU64::new(0),
        }
    }

    /// Scorer with a cache over `catalog`, if the table fits in `limit_bytes`
    #[must_use]
    pub fn with_cache(kind: ScorerKind, catalog: &Catalog, limit_bytes: u64) -> Self {
        let count = u32::try_from(catalog.len()).unwrap_or(u32::MAX);
        Self {
            cache: ScoreCache::with_limit(count, limit_bytes),
            ..Self::new(kind)
        }
    }

    /// Score `guess` against `secret`
    ///
    /// Counts every call. Looks up the cache when both codewords carry an
    /// ordinal; codewords from outside the enumeration are always computed.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Score};
    /// use mastermind_solver::scoring::{Scorer, ScorerKind};
    ///
    /// let scorer = Scorer::new(ScorerKind::default());
    /// let secret = Codeword::parse("6684").unwrap();
    /// let guess = Codeword::parse("6480").unwrap();
    ///
    /// assert_eq!(scorer.score(&secret, &guess), Score::new(2, 1));
    /// assert_eq!(scorer.comparisons(), 1);
    /// ```
    #[inline]
    pub fn score(&self, secret: &Codeword, guess: &Codeword) -> Score {
        self.comparisons.fetch_add(1, Ordering::Relaxed);

        if let Some(cache) = &self.cache
            && let (Some(a), Some(b)) = (secret.ordinal(), guess.ordinal())
        {
            return cache.get_or_insert_with(a, b, || self.kind.score(secret, guess));
        }

        self.kind.score(secret, guess)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ScorerKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn cache(&self) -> Option<&ScoreCache> {
        self.cache.as_ref()
    }

    /// Number of scores requested since creation or the last reset
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    pub fn reset_counter(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn from_name_round_trip() {
        for kind in ScorerKind::ALL {
            assert_eq!(ScorerKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ScorerKind::from_name("scalar"), Some(ScorerKind::CountingScalar));
        assert_eq!(ScorerKind::from_name("nope"), None);
    }

    #[test]
    fn default_backend_is_lanes() {
        assert_eq!(ScorerKind::default(), ScorerKind::CountingLanes);
    }

    #[test]
    fn counter_counts_every_call() {
        let scorer = Scorer::new(ScorerKind::SimpleLoops);
        let a = Codeword::new(0x1234, 4);
        let b = Codeword::new(0x4321, 4);
        for _ in 0..5 {
            let _ = scorer.score(&a, &b);
        }
        assert_eq!(scorer.comparisons(), 5);

        scorer.reset_counter();
        assert_eq!(scorer.comparisons(), 0);
    }

    #[test]
    fn cached_scorer_fills_lazily() {
        let catalog = Catalog::new(GameConfig::new(2, 3).unwrap());
        let scorer = Scorer::with_cache(ScorerKind::CountingScalar, &catalog, 1024);
        let cache = scorer.cache().unwrap();
        assert_eq!(cache.filled(), 0);

        let all = catalog.all();
        let first = scorer.score(&all[1], &all[5]);
        let mirrored = scorer.score(&all[5], &all[1]);
        assert_eq!(first, mirrored);
        assert_eq!(scorer.cache().unwrap().filled(), 1);
        // Hits are still comparisons
        assert_eq!(scorer.comparisons(), 2);
    }

    #[test]
    fn cache_skipped_when_too_big() {
        let catalog = Catalog::new(GameConfig::CLASSIC);
        let scorer = Scorer::with_cache(ScorerKind::default(), &catalog, 1024);
        assert!(scorer.cache().is_none());
    }

    #[test]
    fn raw_codewords_bypass_cache() {
        let catalog = Catalog::new(GameConfig::CLASSIC);
        let scorer = Scorer::with_cache(ScorerKind::default(), &catalog, u64::MAX);
        let secret = Codeword::parse("6684").unwrap();
        let guess = Codeword::parse("6666").unwrap();
        assert_eq!(scorer.score(&secret, &guess), Score::new(2, 0));
        assert_eq!(scorer.cache().unwrap().filled(), 0);
    }
}

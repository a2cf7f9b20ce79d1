//! Lazily filled table of scores keyed by codeword ordinals
//!
//! Scores are commutative, so the cell for `(a, b)` is the cell for
//! `(min(a, b), max(a, b))` and the table is stored as a lower triangle:
//! `N * (N + 1) / 2` one-byte cells. Either argument order hits the same
//! cell; there is no mirrored entry to miss.
//!
//! Cells start as [`Score::INVALID`] and are filled on first access. A fill
//! is an idempotent store of a pure function of two immutable codewords, so
//! racing writers may both compute a cell but always store the same byte.

use crate::core::Score;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// Dense triangular score table shared by every game of a solver
#[derive(Debug)]
pub struct ScoreCache {
    cells: Vec<AtomicU8>,
    codeword_count: u32,
}

impl ScoreCache {
    /// Bytes needed to cache every unordered pair of `codeword_count` codewords
    #[must_use]
    pub const fn estimate_bytes(codeword_count: u64) -> u64 {
        codeword_count * (codeword_count + 1) / 2
    }

    /// Build a cache if its estimated size is within `limit_bytes`
    ///
    /// Returns `None` when the table would be too big; callers then always
    /// recompute scores.
    #[must_use]
    pub fn with_limit(codeword_count: u32, limit_bytes: u64) -> Option<Self> {
        let bytes = Self::estimate_bytes(u64::from(codeword_count));
        let size_gib = bytes as f64 / BYTES_PER_GIB;

        if bytes > limit_bytes {
            info!(size_gib, limit_bytes, "Skipping score cache, too big");
            return None;
        }

        info!(size_gib, codeword_count, "Setting up score cache");
        let cells = (0..bytes)
            .map(|_| AtomicU8::new(Score::INVALID.value()))
            .collect();
        Some(Self {
            cells,
            codeword_count,
        })
    }

    #[inline]
    fn index(a: u32, b: u32) -> usize {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let hi = hi as usize;
        hi * (hi + 1) / 2 + lo as usize
    }

    /// Number of codewords the table covers
    #[inline]
    #[must_use]
    pub const fn codeword_count(&self) -> u32 {
        self.codeword_count
    }

    /// Number of cells in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read a cell; [`Score::INVALID`] if not computed yet
    #[inline]
    #[must_use]
    pub fn get(&self, a: u32, b: u32) -> Score {
        Score::from_packed(self.cells[Self::index(a, b)].load(Ordering::Relaxed))
    }

    /// Read a cell, computing and storing it on a miss
    #[inline]
    pub fn get_or_insert_with(&self, a: u32, b: u32, compute: impl FnOnce() -> Score) -> Score {
        let cell = &self.cells[Self::index(a, b)];
        let cached = Score::from_packed(cell.load(Ordering::Relaxed));
        if !cached.is_invalid() {
            return cached;
        }

        let score = compute();
        cell.store(score.value(), Ordering::Relaxed);
        score
    }

    /// Number of cells filled so far
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.load(Ordering::Relaxed) != Score::INVALID.value())
            .count()
    }
}

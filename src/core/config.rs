//! Game dimensions: pins per codeword and colors per pin

use super::SolverError;
use super::codeword::{MAX_COLORS, MAX_PINS};

/// Pin and color counts, validated once and fixed afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pin_count: u8,
    color_count: u8,
}

impl GameConfig {
    /// The classic 4-pin, 6-color game
    pub const CLASSIC: Self = Self {
        pin_count: 4,
        color_count: 6,
    };

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `SolverError::Configuration` if pins are outside 1-8 or colors
    /// outside 1-15; those are the limits of the packed 4-bit representation.
    /// The largest games are valid here but too big to enumerate in memory;
    /// `Solver::try_new` rejects those.
    pub fn new(pin_count: u8, color_count: u8) -> Result<Self, SolverError> {
        if !(1..=MAX_PINS).contains(&pin_count) {
            return Err(SolverError::configuration(format!(
                "pin count must be 1-{MAX_PINS}, got {pin_count}"
            )));
        }
        if !(1..=MAX_COLORS).contains(&color_count) {
            return Err(SolverError::configuration(format!(
                "color count must be 1-{MAX_COLORS}, got {color_count}"
            )));
        }
        Ok(Self {
            pin_count,
            color_count,
        })
    }

    #[inline]
    #[must_use]
    pub const fn pin_count(self) -> u8 {
        self.pin_count
    }

    #[inline]
    #[must_use]
    pub const fn color_count(self) -> u8 {
        self.color_count
    }

    /// Number of codewords in the canonical enumeration
    #[must_use]
    pub fn total_codewords(self) -> u64 {
        u64::from(self.color_count).pow(u32::from(self.pin_count))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

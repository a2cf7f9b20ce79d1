//! Mastermind feedback score calculation and representation
//!
//! A score counts black pegs (right color, right position) and white pegs
//! (right color, wrong position). Both fit in a nibble, so the score is
//! packed into a single byte as `(black << 4) | white`:
//! - `0x40` = 4 black, a win in a 4-pin game
//! - `0x21` = 2 black, 1 white
//!
//! The packed byte doubles as an index into flat histograms, which is how
//! the minimax selector partitions candidates.

use std::fmt;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Sentinel for "not yet computed", used by the score cache
    pub const INVALID: Self = Self(0xFF);

    /// Number of distinct packed values a valid score can take (max pins is 8)
    pub const SLOTS: usize = (8 << 4) + 1;

    /// Create a score from black and white peg counts
    ///
    /// # Panics
    /// Panics in debug mode if either count does not fit in a nibble
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        debug_assert!(black < 16 && white < 16, "Peg counts must fit in a nibble");
        Self((black << 4) | white)
    }

    /// The winning score for a game with `pin_count` pins
    #[inline]
    #[must_use]
    pub const fn winning(pin_count: u8) -> Self {
        Self::new(pin_count, 0)
    }

    /// Rebuild a score from its packed byte
    #[inline]
    #[must_use]
    pub const fn from_packed(value: u8) -> Self {
        Self(value)
    }

    /// Get the packed byte
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.0 >> 4
    }

    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.0 & 0xF
    }

    /// Check for the "not yet computed" sentinel
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

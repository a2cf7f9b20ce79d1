//! Mastermind codeword representation
//!
//! A Codeword packs up to 8 pins as 4-bit colors in a `u32`, along with its
//! ordinal in the canonical enumeration (used as a compact cache key) and
//! per-color counts precomputed for the counting scorers.

use super::SolverError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum pins a packed `u32` can hold
pub const MAX_PINS: u8 = 8;

/// Maximum colors a 4-bit pin can hold
pub const MAX_COLORS: u8 = 15;

/// A secret or guess: a fixed-length sequence of colored pins
///
/// The color counts are computed once at construction and never change.
/// Two forms are kept: 16 packed 4-bit counters for the scalar scorer and
/// 16 byte lanes for the lane-wise scorers.
#[derive(Debug, Clone, Copy)]
pub struct Codeword {
    packed: u32,
    pin_count: u8,
    ordinal: Option<u32>,
    color_counts4: u64,
    color_counts8: [u8; 16],
}

impl Codeword {
    /// Create a codeword from packed pins, outside of any enumeration
    ///
    /// The first pin lives in the most significant used nibble, so
    /// `Codeword::new(0x6684, 4)` displays as `6684`.
    ///
    /// # Panics
    /// Panics in debug mode if `pin_count` is 0 or above [`MAX_PINS`]
    #[must_use]
    pub fn new(packed: u32, pin_count: u8) -> Self {
        debug_assert!((1..=MAX_PINS).contains(&pin_count), "Pin count must be 1-8");
        let mut color_counts4 = 0u64;
        let mut color_counts8 = [0u8; 16];

        let mut s = packed;
        for _ in 0..pin_count {
            let color = s & 0xF;
            color_counts4 += 1u64 << (color * 4);
            color_counts8[color as usize] += 1;
            s >>= 4;
        }

        Self {
            packed,
            pin_count,
            ordinal: None,
            color_counts4,
            color_counts8,
        }
    }

    pub(crate) fn with_ordinal(packed: u32, pin_count: u8, ordinal: u32) -> Self {
        Self {
            ordinal: Some(ordinal),
            ..Self::new(packed, pin_count)
        }
    }

    /// Parse a codeword from its digit string, e.g. `"6684"`
    ///
    /// Accepts hex digits so every 4-bit color is expressible. The result
    /// carries no ordinal; use [`super::Catalog::parse`] to resolve it
    /// against the canonical enumeration.
    ///
    /// # Errors
    /// Returns `SolverError::UnknownCodeword` if the text is empty, longer
    /// than [`MAX_PINS`], or contains a non-hex character.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Codeword;
    ///
    /// let code = Codeword::parse("6684").unwrap();
    /// assert_eq!(code.packed(), 0x6684);
    /// assert_eq!(code.to_string(), "6684");
    ///
    /// assert!(Codeword::parse("66x4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        let text = text.trim();
        let pin_count = text.chars().count();
        if pin_count == 0 || pin_count > usize::from(MAX_PINS) {
            return Err(SolverError::UnknownCodeword(format!(
                "'{text}' must have 1-{MAX_PINS} pins"
            )));
        }

        let mut packed = 0u32;
        for ch in text.chars() {
            let digit = ch
                .to_digit(16)
                .ok_or_else(|| SolverError::UnknownCodeword(format!("'{text}' has bad pin '{ch}'")))?;
            packed = (packed << 4) | digit;
        }

        Ok(Self::new(packed, pin_count as u8))
    }

    /// The packed pins
    #[inline]
    #[must_use]
    pub const fn packed(&self) -> u32 {
        self.packed
    }

    #[inline]
    #[must_use]
    pub const fn pin_count(&self) -> u8 {
        self.pin_count
    }

    /// Position in the canonical enumeration, if this codeword came from it
    #[inline]
    #[must_use]
    pub const fn ordinal(&self) -> Option<u32> {
        self.ordinal
    }

    /// Colors in play order (first pin first)
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.pin_count)
            .rev()
            .map(move |i| ((self.packed >> (u32::from(i) * 4)) & 0xF) as u8)
    }

    /// Per-color counts as 16 packed 4-bit counters
    #[inline]
    #[must_use]
    pub const fn color_counts4(&self) -> u64 {
        self.color_counts4
    }

    /// Per-color counts as 16 byte lanes
    #[inline]
    #[must_use]
    pub const fn color_counts8(&self) -> &[u8; 16] {
        &self.color_counts8
    }

    /// Count of `color` in this codeword
    #[inline]
    #[must_use]
    pub fn count_of(&self, color: u8) -> u8 {
        self.color_counts8[usize::from(color & 0xF)]
    }
}

// Identity is the pins alone: a parsed codeword equals its enumerated twin.
impl PartialEq for Codeword {
    fn eq(&self, other: &Self) -> bool {
        self.packed == other.packed && self.pin_count == other.pin_count
    }
}

impl Eq for Codeword {}

impl Hash for Codeword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.packed.hash(state);
        self.pin_count.hash(state);
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$x}",
            self.packed,
            width = usize::from(self.pin_count)
        )
    }
}

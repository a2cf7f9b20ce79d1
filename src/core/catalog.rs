//! Canonical enumeration of every codeword for a game configuration
//!
//! Ordinal `i` is the base-`color_count` representation of `i`, least
//! significant digit in the lowest nibble, with colors starting at 1.
//! Because the mapping is positional, a packed value converts back to its
//! ordinal arithmetically, no search needed.

use super::{Codeword, GameConfig, SolverError};

/// All codewords of a game, owned for the lifetime of the solver
#[derive(Debug, Clone)]
pub struct Catalog {
    config: GameConfig,
    codewords: Vec<Codeword>,
    initial_guess: usize,
}

impl Catalog {
    /// Enumerate all `color_count ^ pin_count` codewords
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Catalog, GameConfig};
    ///
    /// let catalog = Catalog::new(GameConfig::new(2, 3).unwrap());
    /// assert_eq!(catalog.len(), 9);
    /// assert_eq!(catalog.all()[0].to_string(), "11");
    /// assert_eq!(catalog.all()[8].to_string(), "33");
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let pins = u32::from(config.pin_count());
        let colors = u32::from(config.color_count());
        let total = config.total_codewords() as usize;
        let one_pins = Self::one_pins(config);

        let mut codewords = Vec::with_capacity(total);
        for i in 0..total as u32 {
            let mut w = i;
            let mut packed = 0u32;
            for di in 0..pins {
                packed |= (w % colors) << (4 * di);
                w /= colors;
            }
            // Colors start at 1, not 0.
            packed += one_pins;
            codewords.push(Codeword::with_ordinal(packed, config.pin_count(), i));
        }

        // Knuth's opening is 1122 for 4 pins; generalize to the lower half
        // of the pins (rounded up) set to color 2, the rest color 1.
        let initial_guess = if colors < 2 {
            0
        } else {
            (0..pins.div_ceil(2)).map(|di| colors.pow(di) as usize).sum()
        };

        Self {
            config,
            codewords,
            initial_guess,
        }
    }

    /// A 1 in every used nibble
    fn one_pins(config: GameConfig) -> u32 {
        let mask = (1u64 << (u32::from(config.pin_count()) * 4)) - 1;
        (0x1111_1111u64 & mask) as u32
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Codeword] {
        &self.codewords
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Get a codeword by ordinal
    #[inline]
    #[must_use]
    pub fn get(&self, ordinal: u32) -> Option<&Codeword> {
        self.codewords.get(ordinal as usize)
    }

    /// The fixed opening guess every game starts with
    #[inline]
    #[must_use]
    pub fn initial_guess(&self) -> &Codeword {
        &self.codewords[self.initial_guess]
    }

    /// Find the enumerated codeword with these packed pins
    ///
    /// # Errors
    /// Returns `SolverError::UnknownCodeword` if any pin is outside
    /// `1..=color_count` or bits are set beyond the last pin.
    pub fn lookup(&self, packed: u32) -> Result<&Codeword, SolverError> {
        let pins = u32::from(self.config.pin_count());
        let colors = u32::from(self.config.color_count());
        let unknown = || {
            SolverError::UnknownCodeword(format!(
                "{packed:x} is not a {pins}-pin, {colors}-color codeword"
            ))
        };

        if u64::from(packed) >> (pins * 4) != 0 {
            return Err(unknown());
        }

        let mut ordinal = 0u32;
        let mut place = 1u32;
        for di in 0..pins {
            let digit = (packed >> (4 * di)) & 0xF;
            if digit < 1 || digit > colors {
                return Err(unknown());
            }
            ordinal += (digit - 1) * place;
            place = place.saturating_mul(colors);
        }

        self.get(ordinal).ok_or_else(unknown)
    }

    /// Parse text such as `"3632"` and resolve it against the enumeration
    ///
    /// # Errors
    /// Returns `SolverError::UnknownCodeword` if the text does not parse or
    /// has the wrong length or colors for this game.
    pub fn parse(&self, text: &str) -> Result<&Codeword, SolverError> {
        let code = Codeword::parse(text)?;
        if code.pin_count() != self.config.pin_count() {
            return Err(SolverError::UnknownCodeword(format!(
                "'{}' has {} pins, expected {}",
                text.trim(),
                code.pin_count(),
                self.config.pin_count()
            )));
        }
        self.lookup(code.packed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Catalog {
        Catalog::new(GameConfig::CLASSIC)
    }

    #[test]
    fn enumerates_every_codeword_once() {
        let catalog = classic();
        assert_eq!(catalog.len(), 1296);

        let unique: std::collections::HashSet<u32> =
            catalog.all().iter().map(Codeword::packed).collect();
        assert_eq!(unique.len(), 1296);
    }

    #[test]
    fn ordinals_are_dense_indices() {
        let catalog = classic();
        for (i, code) in catalog.all().iter().enumerate() {
            assert_eq!(code.ordinal(), Some(i as u32));
        }
    }

    #[test]
    fn enumeration_order() {
        let catalog = classic();
        assert_eq!(catalog.all()[0].to_string(), "1111");
        assert_eq!(catalog.all()[1].to_string(), "1112");
        assert_eq!(catalog.all()[6].to_string(), "1121");
        assert_eq!(catalog.all()[1295].to_string(), "6666");
    }

    #[test]
    fn lookup_inverts_enumeration() {
        let catalog = classic();
        for code in catalog.all() {
            let found = catalog.lookup(code.packed()).unwrap();
            assert_eq!(found.ordinal(), code.ordinal());
        }
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        let catalog = classic();
        assert!(matches!(
            catalog.lookup(0x1117),
            Err(SolverError::UnknownCodeword(_))
        ));
        assert!(catalog.lookup(0x0111).is_err()); // color 0
        assert!(catalog.lookup(0x1_1111).is_err()); // fifth pin
        assert!(catalog.lookup(0x6684).is_err());
    }

    #[test]
    fn parse_resolves_ordinal() {
        let catalog = classic();
        let code = catalog.parse("3632").unwrap();
        assert_eq!(code.packed(), 0x3632);
        assert!(code.ordinal().is_some());

        assert!(catalog.parse("363").is_err());
        assert!(catalog.parse("36320").is_err());
        assert!(catalog.parse("3639").is_err());
    }

    #[test]
    fn initial_guess_generalizes_knuth() {
        assert_eq!(classic().initial_guess().to_string(), "1122");

        let two = Catalog::new(GameConfig::new(2, 3).unwrap());
        assert_eq!(two.initial_guess().to_string(), "12");

        let three = Catalog::new(GameConfig::new(3, 4).unwrap());
        assert_eq!(three.initial_guess().to_string(), "122");

        let five = Catalog::new(GameConfig::new(5, 8).unwrap());
        assert_eq!(five.initial_guess().to_string(), "11222");

        let mono = Catalog::new(GameConfig::new(3, 1).unwrap());
        assert_eq!(mono.initial_guess().to_string(), "111");
    }

    #[test]
    fn eight_pins_lookup() {
        let catalog = Catalog::new(GameConfig::new(8, 2).unwrap());
        assert_eq!(catalog.len(), 256);
        let last = catalog.lookup(0x2222_2222).unwrap();
        assert_eq!(last.ordinal(), Some(255));
    }
}

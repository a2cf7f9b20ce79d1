//! Two-pass scoring over the packed pins
//!
//! First pass counts black pegs and tallies the secret's unmatched colors in
//! 4-bit counters. Second pass consumes those counters for white pegs. O(2p)
//! with no precomputed color counts.

use crate::core::{Codeword, Score};

/// Score `guess` against `secret` with two passes over the pins
#[must_use]
pub fn score_simple_loops(secret: &Codeword, guess: &Codeword) -> Score {
    let mut black = 0u8;
    let mut white = 0u8;
    let mut unused_color_counts = 0u64; // Room for 16 4-bit counters

    let mut s = secret.packed();
    let mut g = guess.packed();
    for _ in 0..secret.pin_count() {
        if (g & 0xF) == (s & 0xF) {
            black += 1;
        } else {
            unused_color_counts += 1u64 << ((s & 0xF) * 4);
        }
        s >>= 4;
        g >>= 4;
    }

    s = secret.packed();
    g = guess.packed();
    for _ in 0..secret.pin_count() {
        let shift = (g & 0xF) * 4;
        if (g & 0xF) != (s & 0xF) && (unused_color_counts & (0xFu64 << shift)) > 0 {
            white += 1;
            unused_color_counts -= 1u64 << shift;
        }
        s >>= 4;
        g >>= 4;
    }

    Score::new(black, white)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: u32, guess: u32) -> Score {
        score_simple_loops(&Codeword::new(secret, 4), &Codeword::new(guess, 4))
    }

    #[test]
    fn exact_match_is_all_black() {
        assert_eq!(score(0x1234, 0x1234), Score::new(4, 0));
    }

    #[test]
    fn permutation_is_all_white() {
        assert_eq!(score(0x1234, 0x4321), Score::new(0, 4));
    }

    #[test]
    fn black_pins_are_not_reused_for_white() {
        // Secret 1122, guess 1212: pins 0 and 3 match, 2 and 1 swap
        assert_eq!(score(0x1122, 0x1212), Score::new(2, 2));
        // Secret 1111, guess 1222: one black, the 2s find nothing
        assert_eq!(score(0x1111, 0x1222), Score::new(1, 0));
    }

    #[test]
    fn duplicate_guess_colors_count_once() {
        // Secret has a single 3, guess has three
        assert_eq!(score(0x3456, 0x1333), Score::new(0, 1));
    }
}

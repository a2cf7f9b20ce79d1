//! Knuth's counting method: black pegs by SWAR, all hits from color counts
//!
//! Black pegs come from xor-ing the packed pins, which leaves a zero nibble
//! wherever the pins match, then counting the zero nibbles with a popcount.
//! Total hits (black + white) are the sum over colors of
//! `min(secret_count, guess_count)`; white is total minus black. The three
//! scorers here differ only in how they compute that sum.

use crate::core::{Codeword, Score};

const NIBBLE_LOW_BITS: u32 = 0x7777_7777;

/// 0x80 in every byte lane of a `u128`
const LANE_HIGH: u128 = 0x8080_8080_8080_8080_8080_8080_8080_8080;

/// 0x01 in every byte of a `u64`
const BYTE_ONES: u64 = 0x0101_0101_0101_0101;

/// Count positions where both codewords have the same color
///
/// Unused high nibbles are forced non-zero so they never count as matches.
#[inline]
#[must_use]
pub fn black_hits(secret: &Codeword, guess: &Codeword) -> u8 {
    let used = (1u64 << (u32::from(secret.pin_count()) * 4)) - 1;
    let unused_pins_mask = !(used as u32);

    let mut v = secret.packed() ^ guess.packed(); // Matched pins are now 0
    v |= unused_pins_mask;
    // High bit of each nibble set iff the nibble is non-zero, then inverted
    let r = !((((v & NIBBLE_LOW_BITS) + NIBBLE_LOW_BITS) | v) | NIBBLE_LOW_BITS);
    r.count_ones() as u8
}

/// Sum of per-color minimums over the packed 4-bit counters
///
/// Stops as soon as either side has no higher colors left.
#[inline]
fn all_hits_scalar(secret: &Codeword, guess: &Codeword) -> u8 {
    let mut all_hits = 0u64;
    let mut scc = secret.color_counts4();
    let mut gcc = guess.color_counts4();
    loop {
        all_hits += (scc & 0xF).min(gcc & 0xF);
        scc >>= 4;
        gcc >>= 4;
        if scc == 0 || gcc == 0 {
            break;
        }
    }
    all_hits as u8
}

/// Sum of per-color minimums over byte arrays, shaped for auto-vectorization
#[inline]
fn all_hits_auto_vec(secret: &Codeword, guess: &Codeword) -> u8 {
    secret
        .color_counts8()
        .iter()
        .zip(guess.color_counts8())
        .map(|(&s, &g)| s.min(g))
        .sum()
}

/// Sum of per-color minimums with all 16 lanes held in one `u128`
///
/// Counts never exceed 8, so `(s | 0x80) - g` cannot borrow across lanes
/// and its high bit says whether `s >= g`.
#[inline]
fn all_hits_lanes(secret: &Codeword, guess: &Codeword) -> u8 {
    let s = u128::from_le_bytes(*secret.color_counts8());
    let g = u128::from_le_bytes(*guess.color_counts8());

    let s_ge_g = (((s | LANE_HIGH) - g) & LANE_HIGH) >> 7;
    let mask = s_ge_g * 0xFF;
    let mins = (g & mask) | (s & !mask);

    // Fold to 8 lanes (each <= 16), then sum the bytes into the top byte
    let folded = (mins as u64) + ((mins >> 64) as u64);
    (folded.wrapping_mul(BYTE_ONES) >> 56) as u8
}

/// Counting method with scalar per-color minimums
#[must_use]
pub fn score_counting_scalar(secret: &Codeword, guess: &Codeword) -> Score {
    let black = black_hits(secret, guess);
    Score::new(black, all_hits_scalar(secret, guess) - black)
}

/// Counting method with an auto-vectorizable minimum-and-sum
#[must_use]
pub fn score_counting_auto_vec(secret: &Codeword, guess: &Codeword) -> Score {
    let black = black_hits(secret, guess);
    Score::new(black, all_hits_auto_vec(secret, guess) - black)
}

/// Counting method with a lane-wise minimum-and-sum in one wide register
#[must_use]
pub fn score_counting_lanes(secret: &Codeword, guess: &Codeword) -> Score {
    let black = black_hits(secret, guess);
    Score::new(black, all_hits_lanes(secret, guess) - black)
}

//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as key pegs: `●` black, `○` white, `·` empty
#[must_use]
pub fn score_to_pegs(score: Score, pin_count: u8) -> String {
    let black = usize::from(score.black());
    let white = usize::from(score.white());
    let empty = usize::from(pin_count).saturating_sub(black + white);

    let mut result = String::with_capacity(usize::from(pin_count) * 3);
    result.push_str(&"●".repeat(black));
    result.push_str(&"○".repeat(white));
    result.push_str(&"·".repeat(empty));
    result
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

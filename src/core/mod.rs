//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codewords, scores, the
//! canonical enumeration and the game dimensions. Nothing here scores or
//! solves; it only describes the game.

mod catalog;
mod codeword;
mod config;
mod error;
mod score;

pub use catalog::Catalog;
pub use codeword::{Codeword, MAX_COLORS, MAX_PINS};
pub use config::GameConfig;
pub use error::SolverError;
pub use score::Score;

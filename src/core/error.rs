//! Error type shared by the engine and the driver commands

use thiserror::Error;

/// Failures the solver reports instead of guessing
#[derive(Debug, Error)]
pub enum SolverError {
    /// Pin or color count outside what the packed representation can hold
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Input that does not name a codeword of the canonical enumeration
    #[error("Unknown codeword: {0}")]
    UnknownCodeword(String),

    /// The scorer or the candidate filter produced an impossible state
    #[error("Solver invariant violated with secret {secret}: {detail}")]
    InvariantViolation { secret: String, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in a score table file
    #[error("Bad score table line {line}: {message}")]
    Format { line: usize, message: String },
}

impl SolverError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

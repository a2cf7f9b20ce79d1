//! Mastermind solving algorithms
//!
//! The [`Solver`] plays games against known secrets, growing a
//! [`StrategyTree`] as it goes. Guesses after the opening come from a
//! [`GuessPolicy`]; the Knuth policy uses the [`minimax`] selector.

mod engine;
pub mod minimax;
pub mod policy;
pub mod tree;

pub use engine::{
    DEFAULT_CACHE_LIMIT_BYTES, GameRecord, GuessSource, GuessStep, MAX_CODEWORDS, Solver, SolverConfig,
    SolverStats,
};
pub use policy::GuessPolicy;
pub use tree::{NodeId, StrategyNode, StrategyTree, TreeStats};

//! Command implementations

pub mod check;
pub mod dump;
pub mod score_table;
pub mod solve;
pub mod test_all;

pub use check::{CheckFailure, CheckReport, REFERENCE_CASES, REFERENCE_SECRET, reference_cases, run_reference_checks};
pub use dump::{default_strategy_path, write_strategy_dot};
pub use score_table::{SCORE_TABLE_HEADER, TableMismatch, VerifyReport, verify_score_table, write_score_table};
pub use solve::{KNUTH_EXAMPLE_SECRET, SolveResult, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

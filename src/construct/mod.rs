//! Initial tour construction.
//!
//! The tabu search needs one feasible cycle to start from. On an arbitrary
//! (possibly sparse) graph a random permutation is almost never feasible,
//! so the first tour is built by exhaustive backtracking instead.

mod backtrack;

pub use backtrack::{InitialTourFinder, DEFAULT_MAX_RETRIES, START_VERTEX};

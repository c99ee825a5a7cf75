//! Tabu Search (TS) over Hamiltonian cycles.
//!
//! A single-solution trajectory metaheuristic that remembers recently
//! accepted tours in a tabu list and refuses to revisit them, unless doing
//! so improves on the best cost found so far (aspiration).
//!
//! The tabu list stores whole tours rather than moves: a candidate is
//! forbidden only if exactly that vertex sequence was accepted recently.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod neighborhood;
mod runner;
mod types;

pub use config::{TabuConfig, DEFAULT_SEED};
pub use neighborhood::{retain_feasible, swap_neighbors};
pub use runner::{SearchResult, TabuRunner};
pub use types::TabuList;

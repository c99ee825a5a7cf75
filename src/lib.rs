//! Tabu search for the Traveling Salesman Problem.
//!
//! Solves TSP heuristically on a weighted undirected graph given as an
//! adjacency matrix:
//!
//! - **Graph**: immutable weighted graph with edge, weight and neighbor
//!   queries, plus a loader for the plain-text matrix format.
//! - **Construction**: depth-first backtracking that yields one
//!   Hamiltonian cycle through vertex 1.
//! - **Tabu Search (TS)**: swap-neighborhood local search with a
//!   bounded FIFO tabu list of whole tours and an aspiration criterion,
//!   tracking the best and worst tours it accepts.
//!
//! # Example
//!
//! ```
//! use tabu_tsp::graph::parse_matrix;
//! use tabu_tsp::tabu::{TabuConfig, TabuRunner};
//!
//! let graph = parse_matrix("3\n0 2 9\n2 0 4\n9 4 0\n").unwrap();
//! let config = TabuConfig::default().with_max_iterations(10).with_seed(7);
//! let result = TabuRunner::run(&graph, &config).unwrap();
//!
//! assert_eq!(result.best_cost, 15);
//! ```
//!
//! No result is ever claimed optimal: the search runs for exactly the
//! configured number of iterations and reports what it saw.

pub mod construct;
pub mod error;
pub mod graph;
pub mod report;
pub mod tabu;
pub mod tour;

pub use error::{Result, TspError};
pub use tour::Tour;

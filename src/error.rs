//! Error types shared by the graph model, the tour builder and the search.

use thiserror::Error;

use crate::graph::Vertex;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised while loading a graph or running the search.
#[derive(Error, Debug)]
pub enum TspError {
    /// The adjacency matrix does not match its declared dimension, or the
    /// input text could not be parsed.
    #[error("malformed graph: {0}")]
    GraphFormat(String),

    /// A cost was requested for a vertex pair that has no edge.
    ///
    /// The feasibility filter excludes such tours, so seeing this during a
    /// search means a tour was corrupted upstream.
    #[error("no edge between {from} and {to}")]
    EdgeNotFound {
        /// Tail vertex of the missing edge.
        from: Vertex,
        /// Head vertex of the missing edge.
        to: Vertex,
    },

    /// The backtracking search exhausted its retries without closing a cycle.
    #[error("no Hamiltonian cycle found after {attempts} attempt(s)")]
    NoHamiltonianCycle {
        /// Number of full searches performed.
        attempts: usize,
    },

    /// A search parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

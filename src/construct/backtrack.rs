//! Depth-first backtracking search for a Hamiltonian cycle.
//!
//! # Cost
//!
//! The frontier is expanded with stack discipline, so memory stays
//! proportional to `N` times the branching factor, but the number of
//! expansions is exponential in `N` for sparse or adversarial graphs. On
//! dense graphs a cycle is usually found after roughly `N` expansions.

use tracing::{debug, warn};

use crate::error::{Result, TspError};
use crate::graph::{Graph, Vertex};
use crate::tour::Tour;

/// Vertex every constructed cycle starts and ends at.
pub const START_VERTEX: Vertex = 1;

/// Default number of extra searches after a failed one.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// A partial path and the vertices it has consumed.
#[derive(Debug, Clone)]
struct Branch {
    path: Vec<Vertex>,
    visited: Vec<bool>,
}

/// Builds a first feasible tour by backtracking from [`START_VERTEX`].
///
/// # Examples
///
/// ```
/// use tabu_tsp::construct::InitialTourFinder;
/// use tabu_tsp::graph::build_graph;
///
/// let graph = build_graph(&[
///     vec![0, 1, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 0],
/// ]).unwrap();
///
/// let tour = InitialTourFinder::default().find(&graph).unwrap();
/// assert_eq!(tour.vertices(), &[1, 3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct InitialTourFinder {
    max_retries: usize,
}

impl Default for InitialTourFinder {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl InitialTourFinder {
    /// Sets how many times an exhausted search is repeated before giving up.
    pub fn with_max_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// Finds a Hamiltonian cycle starting and ending at [`START_VERTEX`].
    ///
    /// Fails with [`TspError::NoHamiltonianCycle`] once every attempt has
    /// emptied its frontier.
    pub fn find(&self, graph: &Graph) -> Result<Tour> {
        let attempts = self.max_retries + 1;
        for attempt in 1..=attempts {
            if let Some(tour) = search(graph) {
                debug!(attempt, tour = %tour, "initial tour found");
                return Ok(tour);
            }
            warn!(attempt, attempts, "backtracking frontier exhausted");
        }
        Err(TspError::NoHamiltonianCycle { attempts })
    }
}

fn search(graph: &Graph) -> Option<Tour> {
    let n = graph.vertex_count();
    if n == 1 {
        return graph
            .has_edge(START_VERTEX, START_VERTEX)
            .then(|| Tour::new(vec![START_VERTEX, START_VERTEX]));
    }

    // Indexed by vertex id; slot 0 is unused.
    let mut visited = vec![false; n + 1];
    visited[START_VERTEX] = true;
    let mut frontier = vec![Branch {
        path: vec![START_VERTEX],
        visited,
    }];

    while let Some(branch) = frontier.pop() {
        let Some(&last) = branch.path.last() else {
            continue;
        };

        for &next in graph.neighbors(last) {
            if branch.visited[next] {
                continue;
            }

            let mut path = branch.path.clone();
            path.push(next);

            if path.len() == n {
                if graph.has_edge(next, START_VERTEX) {
                    path.push(START_VERTEX);
                    return Some(Tour::new(path));
                }
                continue;
            }

            let mut visited = branch.visited.clone();
            visited[next] = true;

            // Dead end: nothing left to extend into.
            if !graph.neighbors(next).iter().any(|&v| !visited[v]) {
                continue;
            }

            frontier.push(Branch { path, visited });
        }
    }

    None
}

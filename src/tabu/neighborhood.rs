//! Swap neighborhood and feasibility filter.

use rand::Rng;

use crate::graph::Graph;
use crate::tour::Tour;

/// Generates the swap neighborhood of `tour` around one random position.
///
/// Draws a single index `i` from `0..tour.len()` and returns, for every
/// `j != i` in ascending order, the tour with positions `i` and `j`
/// exchanged. Candidates may be infeasible: swapping an endpoint breaks
/// closure and any swap may break adjacency.
///
/// Tours shorter than two positions have no neighbors and consume no draw.
pub fn swap_neighbors<R: Rng>(tour: &Tour, rng: &mut R) -> Vec<Tour> {
    let len = tour.len();
    if len < 2 {
        return Vec::new();
    }

    let i = rng.random_range(0..len);
    (0..len)
        .filter(|&j| j != i)
        .map(|j| tour.swapped(i, j))
        .collect()
}

/// Keeps the candidates that are closed cycles over edges of `graph`,
/// preserving their order.
pub fn retain_feasible(graph: &Graph, candidates: Vec<Tour>) -> Vec<Tour> {
    candidates
        .into_iter()
        .filter(|tour| tour.is_feasible(graph))
        .collect()
}

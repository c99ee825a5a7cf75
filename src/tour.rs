//! Closed tours over a [`Graph`].

use std::fmt;

use crate::error::{Result, TspError};
use crate::graph::{Graph, Vertex, Weight};

/// An ordered vertex sequence that starts and ends at the same vertex.
///
/// A tour over `N` vertices has `N + 1` entries. Candidate tours produced
/// by perturbation may violate closure or adjacency; use
/// [`Tour::is_feasible`] before trusting one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour(Vec<Vertex>);

impl Tour {
    /// Wraps a vertex sequence.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }

    /// The vertex sequence, closing vertex included.
    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    /// Number of entries, closing vertex included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last vertices coincide.
    pub fn is_closed(&self) -> bool {
        !self.0.is_empty() && self.0.first() == self.0.last()
    }

    /// Closed, and every consecutive pair is an edge of `graph`.
    pub fn is_feasible(&self, graph: &Graph) -> bool {
        self.is_closed() && self.0.windows(2).all(|w| graph.has_edge(w[0], w[1]))
    }

    /// Sum of the weights of consecutive edges.
    ///
    /// Fails with [`TspError::EdgeNotFound`] on the first missing edge, and
    /// with [`TspError::GraphFormat`] if the sum does not fit in [`Weight`].
    pub fn cost(&self, graph: &Graph) -> Result<Weight> {
        self.0.windows(2).try_fold(0 as Weight, |total, w| {
            let weight = graph.edge_weight(w[0], w[1])?;
            total.checked_add(weight).ok_or_else(|| {
                TspError::GraphFormat(format!("cost of tour {self} overflows"))
            })
        })
    }

    /// A copy with positions `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut vertices = self.0.clone();
        vertices.swap(i, j);
        Self(vertices)
    }
}

impl From<Vec<Vertex>> for Tour {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

//! Immutable weighted undirected graph backed by a dense weight matrix.

use crate::error::{Result, TspError};

/// Vertex identifier. Vertices are numbered `1..=N`.
pub type Vertex = usize;

/// Edge weight and tour cost.
pub type Weight = u64;

/// A weighted undirected graph.
///
/// Built once from an adjacency matrix where `0` means "no edge"; read-only
/// afterwards. Weights are stored symmetrically: if the input matrix
/// disagrees on `(i, j)` and `(j, i)`, the entry read last (row-major)
/// wins.
///
/// # Examples
///
/// ```
/// use tabu_tsp::graph::Graph;
///
/// let graph = Graph::from_matrix(3, &[
///     vec![0, 4, 0],
///     vec![4, 0, 7],
///     vec![0, 7, 0],
/// ]).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.has_edge(2, 3));
/// assert!(!graph.has_edge(1, 3));
/// assert_eq!(graph.neighbors(2), &[1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    weights: Vec<Weight>,
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    /// Builds a graph from `n` rows of `n` weights each.
    ///
    /// Fails with [`TspError::GraphFormat`] if `n` is zero or if the number
    /// of rows or any row length differs from `n`.
    pub fn from_matrix(n: usize, rows: &[Vec<Weight>]) -> Result<Self> {
        if n == 0 {
            return Err(TspError::GraphFormat(
                "vertex count must be positive".into(),
            ));
        }
        if rows.len() != n {
            return Err(TspError::GraphFormat(format!(
                "expected {n} rows, got {}",
                rows.len()
            )));
        }

        let mut weights = vec![0; n * n];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::GraphFormat(format!(
                    "row {} has {} columns, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
            for (j, &w) in row.iter().enumerate() {
                if w != 0 {
                    weights[i * n + j] = w;
                    weights[j * n + i] = w;
                }
            }
        }

        let adjacency = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| weights[i * n + j] != 0)
                    .map(|j| j + 1)
                    .collect()
            })
            .collect();

        Ok(Self {
            n,
            weights,
            adjacency,
        })
    }

    /// Number of vertices `N`.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        (1..=self.n)
            .map(|u| self.neighbors(u).iter().filter(|&&v| v >= u).count())
            .sum()
    }

    /// Whether `u` and `v` are joined by an edge.
    ///
    /// Out-of-range vertices have no edges.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.slot(u, v).is_some_and(|k| self.weights[k] != 0)
    }

    /// Weight of the edge `(u, v)`.
    pub fn edge_weight(&self, u: Vertex, v: Vertex) -> Result<Weight> {
        match self.slot(u, v).map(|k| self.weights[k]) {
            Some(w) if w != 0 => Ok(w),
            _ => Err(TspError::EdgeNotFound { from: u, to: v }),
        }
    }

    /// Neighbors of `v` in ascending order. Empty for out-of-range vertices.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        match v.checked_sub(1).and_then(|i| self.adjacency.get(i)) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Iterates `(neighbor, weight)` pairs incident to `v`.
    pub fn edges(&self, v: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.neighbors(v)
            .iter()
            .map(move |&u| (u, self.weights[(v - 1) * self.n + (u - 1)]))
    }

    fn slot(&self, u: Vertex, v: Vertex) -> Option<usize> {
        if (1..=self.n).contains(&u) && (1..=self.n).contains(&v) {
            Some((u - 1) * self.n + (v - 1))
        } else {
            None
        }
    }
}

/// Builds a graph from a square matrix, taking `N` from the row count.
pub fn build_graph(matrix: &[Vec<Weight>]) -> Result<Graph> {
    Graph::from_matrix(matrix.len(), matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        // 1 - 2 - 3, no edge 1-3
        Graph::from_matrix(3, &[vec![0, 4, 0], vec![4, 0, 7], vec![0, 7, 0]]).unwrap()
    }

    #[test]
    fn test_queries() {
        let g = path_graph();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_weight(1, 2).unwrap(), 4);
        assert_eq!(g.edge_weight(3, 2).unwrap(), 7);
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(1, 3));
        assert_eq!(g.neighbors(1), &[2]);
        assert_eq!(g.neighbors(2), &[1, 3]);
    }

    #[test]
    fn test_missing_edge_is_error() {
        let g = path_graph();
        assert!(matches!(
            g.edge_weight(1, 3),
            Err(TspError::EdgeNotFound { from: 1, to: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_vertices() {
        let g = path_graph();
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 4));
        assert!(g.neighbors(0).is_empty());
        assert!(g.neighbors(9).is_empty());
        assert!(g.edge_weight(4, 1).is_err());
    }

    #[test]
    fn test_one_sided_entry_is_symmetric() {
        let g = Graph::from_matrix(2, &[vec![0, 3], vec![0, 0]]).unwrap();
        assert_eq!(g.edge_weight(2, 1).unwrap(), 3);
        assert_eq!(g.neighbors(2), &[1]);
    }

    #[test]
    fn test_edges_iterator() {
        let g = path_graph();
        let edges: Vec<_> = g.edges(2).collect();
        assert_eq!(edges, vec![(1, 4), (3, 7)]);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let g = Graph::from_matrix(2, &[vec![5, 1], vec![1, 0]]).unwrap();
        assert!(g.has_edge(1, 1));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert!(matches!(
            Graph::from_matrix(3, &[vec![0, 1, 1], vec![1, 0, 1]]),
            Err(TspError::GraphFormat(_))
        ));
        assert!(matches!(
            Graph::from_matrix(2, &[vec![0, 1], vec![1, 0, 4]]),
            Err(TspError::GraphFormat(_))
        ));
        assert!(matches!(
            Graph::from_matrix(0, &[]),
            Err(TspError::GraphFormat(_))
        ));
    }

    #[test]
    fn test_build_graph_uses_row_count() {
        let g = build_graph(&[vec![0, 2], vec![2, 0]]).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert!(build_graph(&[vec![0, 2, 1], vec![2, 0, 1]]).is_err());
    }
}

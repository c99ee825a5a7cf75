//! Weighted undirected graph model and its adjacency-matrix loader.

pub mod loading;
mod model;

pub use loading::{load_graph, parse_matrix};
pub use model::{build_graph, Graph, Vertex, Weight};

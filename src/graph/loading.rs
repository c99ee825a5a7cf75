//! Adjacency-matrix text format.
//!
//! ```text
//! 4
//! 0 10 15 20
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```
//!
//! The first line holds the vertex count `N`; the next `N` lines hold one
//! matrix row each as whitespace-separated non-negative integers. A `0`
//! entry means the two vertices are not adjacent. Blank lines are ignored.

use std::path::Path;

use super::model::{Graph, Weight};
use crate::error::{Result, TspError};

/// Parses a graph from the matrix text format.
pub fn parse_matrix(content: &str) -> Result<Graph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| TspError::GraphFormat("empty input".into()))?;
    let n: usize = header.parse().map_err(|_| {
        TspError::GraphFormat(format!(
            "line {header_line}: invalid vertex count '{header}'"
        ))
    })?;

    let mut rows = Vec::with_capacity(n);
    for (line_num, line) in lines {
        if rows.len() == n {
            return Err(TspError::GraphFormat(format!(
                "line {line_num}: unexpected data after {n} rows"
            )));
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<Weight>().map_err(|_| {
                    TspError::GraphFormat(format!("line {line_num}: invalid weight '{token}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Graph::from_matrix(n, &rows)
}

/// Reads and parses a matrix file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let content = std::fs::read_to_string(path)?;
    parse_matrix(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_matrix() {
        let text = "3\n0 1 2\n1 0 3\n2 3 0\n";
        let g = parse_matrix(text).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_weight(2, 3).unwrap(), 3);
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let text = "\n  2 \n0   9\n\n9 0\n\n";
        let g = parse_matrix(text).unwrap();
        assert_eq!(g.edge_weight(1, 2).unwrap(), 9);
    }

    #[test]
    fn test_zero_means_no_edge() {
        let g = parse_matrix("3\n0 1 0\n1 0 1\n0 1 0").unwrap();
        assert!(!g.has_edge(1, 3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(parse_matrix(""), Err(TspError::GraphFormat(_))));
        assert!(matches!(
            parse_matrix("three\n0"),
            Err(TspError::GraphFormat(_))
        ));
    }

    #[test]
    fn test_bad_tokens() {
        let err = parse_matrix("2\n0 x\n1 0").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(parse_matrix("2\n0 -1\n-1 0").is_err());
    }

    #[test]
    fn test_row_count_mismatch() {
        assert!(parse_matrix("3\n0 1 1\n1 0 1").is_err());
        assert!(parse_matrix("2\n0 1\n1 0\n1 1").is_err());
    }

    #[test]
    fn test_column_count_mismatch() {
        assert!(parse_matrix("2\n0 1 5\n1 0").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, TspError::Io(_)));
    }
}

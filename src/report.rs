//! Plain-text rendering of a graph and of a search result.

use std::fmt::Write;

use crate::graph::Graph;
use crate::tabu::{SearchResult, TabuConfig};

/// Renders one row per vertex listing its incident edges as `neighbor:weight`.
pub fn graph_table(graph: &Graph) -> String {
    let width = graph.vertex_count().to_string().len().max("Vertex".len());
    let mut out = String::new();
    let _ = writeln!(out, "{:>width$} | Edges", "Vertex");
    let _ = writeln!(out, "{}-+-{}", "-".repeat(width), "-".repeat(5));
    for v in 1..=graph.vertex_count() {
        let edges = graph
            .edges(v)
            .map(|(u, w)| format!("{u}:{w}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{v:>width$} | {edges}");
    }
    out
}

/// Renders the run summary printed after a search.
pub fn search_report(name: &str, config: &TabuConfig, result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {name}");
    let _ = writeln!(
        out,
        "Tabu list size {} with {} iterations",
        config.tabu_size, config.max_iterations
    );
    let _ = writeln!(
        out,
        "Total time: {:.4} s",
        result.total_time.as_secs_f64()
    );
    let _ = writeln!(
        out,
        "Time to initial tour: {:.4} s",
        result.time_to_initial.as_secs_f64()
    );
    let _ = writeln!(out);
    let rows = [
        ("Initial tour", &result.initial_tour, result.initial_cost),
        ("Final tour", &result.final_tour, result.final_cost),
        ("Best tour", &result.best_tour, result.best_cost),
        ("Worst tour", &result.worst_tour, result.worst_cost),
    ];
    for (label, tour, cost) in rows {
        let _ = writeln!(out, "{label}: {tour} (cost {cost})");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::parse_matrix;
    use crate::tabu::TabuRunner;

    #[test]
    fn test_graph_table_rows() {
        let g = parse_matrix("3\n0 4 0\n4 0 7\n0 7 0").unwrap();
        let table = graph_table(&g);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Vertex | Edges");
        assert_eq!(lines[2], "     1 | 2:4");
        assert_eq!(lines[3], "     2 | 1:4 3:7");
        assert_eq!(lines[4], "     3 | 2:7");
    }

    #[test]
    fn test_search_report_mentions_every_tour() {
        let g = parse_matrix("3\n0 2 9\n2 0 4\n9 4 0").unwrap();
        let config = TabuConfig::default().with_tabu_size(2).with_max_iterations(3);
        let result = TabuRunner::run(&g, &config).unwrap();

        let report = search_report("tri.txt", &config, &result);

        assert!(report.starts_with("File: tri.txt\n"));
        assert!(report.contains("Tabu list size 2 with 3 iterations"));
        assert!(report.contains("Initial tour: 1 -> 3 -> 2 -> 1 (cost 15)"));
        assert!(report.contains("Best tour: "));
        assert!(report.contains("Worst tour: "));
    }
}

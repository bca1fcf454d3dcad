//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use campusnav_lib::{load_campus, CampusData, Graph, GraphData, GraphEdge, GraphNode};

/// Directory holding the checked-in campus fixture (`buildings.json`, `graph.json`).
#[allow(dead_code)]
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus")
}

#[allow(dead_code)]
pub fn fixture_campus() -> CampusData {
    load_campus(&fixture_dir()).expect("fixture campus loads")
}

/// Graph data from `(a, b, distance)` triples plus nodes without edges.
///
/// Nodes are laid out on a line of latitude so every position is valid.
#[allow(dead_code)]
pub fn graph_data(edges: &[(&str, &str, f64)], isolated: &[&str]) -> GraphData {
    let mut ids: Vec<&str> = edges.iter().flat_map(|(a, b, _)| [*a, *b]).collect();
    ids.extend_from_slice(isolated);
    ids.sort_unstable();
    ids.dedup();

    GraphData {
        nodes: ids
            .iter()
            .enumerate()
            .map(|(i, id)| GraphNode {
                id: id.to_string(),
                latitude: 8.48,
                longitude: 4.54 + i as f64 * 0.001,
                connections: edges
                    .iter()
                    .filter_map(|(a, b, _)| match (*a == *id, *b == *id) {
                        (true, _) => Some(b.to_string()),
                        (_, true) => Some(a.to_string()),
                        _ => None,
                    })
                    .collect(),
            })
            .collect(),
        edges: edges
            .iter()
            .map(|(a, b, d)| GraphEdge {
                from: a.to_string(),
                to: b.to_string(),
                distance: *d,
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn graph(edges: &[(&str, &str, f64)], isolated: &[&str]) -> Graph {
    Graph::from_data(&graph_data(edges, isolated)).expect("valid test graph")
}

/// The four-node example: A-B 5, B-C 3, A-C 10, C-D 2.
#[allow(dead_code)]
pub fn diamond(isolated: &[&str]) -> Graph {
    graph(
        &[("A", "B", 5.0), ("B", "C", 3.0), ("A", "C", 10.0), ("C", "D", 2.0)],
        isolated,
    )
}

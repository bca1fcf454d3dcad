use crate::geo::GeoPoint;
use crate::graph::{Graph, Node};

/// Location used when the caller cannot supply its own position
/// (University of Ilorin main campus).
pub const FALLBACK_LOCATION: GeoPoint = GeoPoint {
    latitude: 8.47997,
    longitude: 4.54179,
};

/// Closest graph node to `point` by great-circle distance.
///
/// Ties resolve to the lexicographically smallest id. Returns `None` for an
/// empty graph.
pub fn nearest_node<'g>(graph: &'g Graph, point: &GeoPoint) -> Option<&'g Node> {
    graph
        .nodes()
        .map(|node| (node.position.distance_to(point), node))
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)))
        .map(|(_, node)| node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::{GraphData, GraphNode};

    fn node(id: &str, latitude: f64, longitude: f64) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            latitude,
            longitude,
            connections: Vec::new(),
        }
    }

    #[test]
    fn picks_the_closest_node() {
        let graph = Graph::from_data(&GraphData {
            nodes: vec![
                node("gate", 8.4700, 4.5300),
                node("library", 8.4800, 4.5418),
                node("senate", 8.4900, 4.5500),
            ],
            edges: Vec::new(),
        })
        .expect("valid graph");

        let nearest = nearest_node(&graph, &FALLBACK_LOCATION).expect("non-empty graph");
        assert_eq!(nearest.id, "library");
    }

    #[test]
    fn equidistant_nodes_resolve_to_smallest_id() {
        let graph = Graph::from_data(&GraphData {
            nodes: vec![node("b", 0.0, 1.0), node("a", 0.0, -1.0)],
            edges: Vec::new(),
        })
        .expect("valid graph");

        let nearest = nearest_node(&graph, &GeoPoint::new(0.0, 0.0)).expect("non-empty graph");
        assert_eq!(nearest.id, "a");
    }

    #[test]
    fn empty_graph_has_no_nearest_node() {
        assert!(nearest_node(&Graph::default(), &FALLBACK_LOCATION).is_none());
    }
}

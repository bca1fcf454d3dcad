use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::campus::GraphData;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Minimum Jaro-Winkler similarity for an identifier to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Identifier for a campus location (building or waypoint).
pub type NodeId = String;

/// Validated graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub position: GeoPoint,
}

/// Adjacency entry: a walkway to `target` of `distance` meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
}

/// Immutable, undirected walkway graph used by pathfinding algorithms.
///
/// Both maps live behind [`Arc`] so a loaded graph can be cloned cheaply and
/// shared between threads running independent queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<HashMap<NodeId, Node>>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Build and validate a graph from its wire representation.
    ///
    /// Edges are authoritative: every valid edge is inserted in both
    /// directions. Node `connections` are only checked for consistency.
    pub fn from_data(data: &GraphData) -> Result<Self> {
        let mut nodes: HashMap<NodeId, Node> = HashMap::with_capacity(data.nodes.len());
        for raw in &data.nodes {
            let position = GeoPoint::new(raw.latitude, raw.longitude);
            if !position.is_valid() {
                return Err(Error::InvalidCoordinate {
                    id: raw.id.clone(),
                    latitude: raw.latitude,
                    longitude: raw.longitude,
                });
            }
            if nodes.contains_key(&raw.id) {
                return Err(Error::DuplicateNode { id: raw.id.clone() });
            }
            nodes.insert(
                raw.id.clone(),
                Node {
                    id: raw.id.clone(),
                    position,
                },
            );
        }

        let mut adjacency: HashMap<NodeId, Vec<Edge>> = nodes
            .keys()
            .map(|id| (id.clone(), Vec::new()))
            .collect();

        for edge in &data.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !nodes.contains_key(endpoint) {
                    return Err(Error::UnknownEdgeEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if !edge.distance.is_finite() || edge.distance < 0.0 {
                return Err(Error::InvalidEdgeWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    distance: edge.distance,
                });
            }
            if edge.from == edge.to {
                debug!(node = %edge.from, "ignoring self-loop edge");
                continue;
            }

            insert_min_edge(&mut adjacency, &edge.from, &edge.to, edge.distance);
            insert_min_edge(&mut adjacency, &edge.to, &edge.from, edge.distance);
        }

        // Bounds every simple path, so tentative distances stay finite.
        let total_distance: f64 = adjacency
            .values()
            .flatten()
            .map(|edge| edge.distance / 2.0)
            .sum();
        if !total_distance.is_finite() {
            return Err(Error::TotalDistanceOverflow {
                total: total_distance,
            });
        }

        let mut dangling_connections = 0usize;
        for raw in &data.nodes {
            for neighbour in &raw.connections {
                if !nodes.contains_key(neighbour) {
                    return Err(Error::UnknownEdgeEndpoint {
                        from: raw.id.clone(),
                        to: neighbour.clone(),
                        missing: neighbour.clone(),
                    });
                }
                let linked = adjacency
                    .get(&raw.id)
                    .is_some_and(|edges| edges.iter().any(|e| &e.target == neighbour));
                if !linked && neighbour != &raw.id {
                    debug!(node = %raw.id, neighbour = %neighbour, "connection has no edge");
                    dangling_connections += 1;
                }
            }
        }

        if dangling_connections > 0 {
            warn!(
                dangling_connections,
                "ignored node connections without a matching edge"
            );
        }

        for edges in adjacency.values_mut() {
            edges.sort_by(|a, b| a.target.cmp(&b.target));
        }

        debug!(
            nodes = nodes.len(),
            edges = data.edges.len(),
            "built campus graph"
        );

        Ok(Self {
            nodes: Arc::new(nodes),
            adjacency: Arc::new(adjacency),
        })
    }

    /// Lookup a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the neighbours for a given node identifier, sorted by id.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    pub fn edge_distance(&self, a: &str, b: &str) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance)
    }

    /// Node identifiers similar to `query`, best match first.
    pub fn fuzzy_node_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.nodes.keys().map(String::as_str), query, limit)
    }
}

fn insert_min_edge(
    adjacency: &mut HashMap<NodeId, Vec<Edge>>,
    from: &str,
    to: &str,
    distance: f64,
) {
    let entry = adjacency.entry(from.to_string()).or_default();
    if let Some(existing) = entry.iter_mut().find(|edge| edge.target == to) {
        if distance < existing.distance {
            existing.distance = distance;
        }
        return;
    }
    entry.push(Edge {
        target: to.to_string(),
        distance,
    });
}

/// Rank `candidates` by case-insensitive Jaro-Winkler similarity to `query`.
pub(crate) fn fuzzy_matches<'a>(
    candidates: impl Iterator<Item = &'a str>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            (
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_matches_prefers_closest_name() {
        let names = ["library", "lecture-hall", "senate"];
        let matches = fuzzy_matches(names.iter().copied(), "libary", 3);
        assert_eq!(matches.first().map(String::as_str), Some("library"));
        assert!(!matches.contains(&"senate".to_string()));
    }

    #[test]
    fn fuzzy_matches_respects_limit() {
        let names = ["hall-a", "hall-b", "hall-c"];
        assert_eq!(fuzzy_matches(names.iter().copied(), "hall", 2).len(), 2);
    }

    #[test]
    fn default_graph_is_empty() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert!(graph.neighbours("anything").is_empty());
    }
}

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Number of "did you mean" suggestions attached to unknown node errors.
const MAX_SUGGESTIONS: usize = 3;

/// Ordered walk from a source node to a destination node, both inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub nodes: Vec<Node>,
    /// Sum of edge weights along the walk, in meters.
    pub distance: f64,
}

impl Path {
    fn trivial(node: &Node) -> Self {
        Self {
            nodes: vec![node.clone()],
            distance: 0.0,
        }
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn start(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&Node> {
        self.nodes.last()
    }
}

/// Find the lowest-cost path between `from` and `to` with Dijkstra's
/// algorithm over a binary-heap priority queue.
///
/// Returns `Ok(None)` when `to` is unreachable from `from`, and
/// [`Error::UnknownNode`] when either identifier is not in the graph. Equal
/// tentative distances settle the lexicographically smallest id first, so the
/// result is deterministic.
pub fn find_path(graph: &Graph, from: &str, to: &str) -> Result<Option<Path>> {
    let (start, goal) = resolve_endpoints(graph, from, to)?;
    if start.id == goal.id {
        return Ok(Some(Path::trivial(start)));
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(&start.id, 0.0);
    queue.push(QueueEntry::new(&start.id, 0.0));

    while let Some(entry) = queue.pop() {
        // Stale entries for already-settled nodes are skipped.
        if !settled.insert(entry.node) {
            continue;
        }

        if entry.node == goal.id {
            return Ok(Some(reconstruct_path(
                graph,
                &parents,
                &start.id,
                &goal.id,
                entry.cost.0,
            )));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if settled.contains(next) {
                continue;
            }

            let next_cost = entry.cost.0 + edge.distance;
            if is_improvement(&distances, next, next_cost) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(None)
}

/// Same contract as [`find_path`], selecting the next node with a full scan of
/// the tentative distances instead of a priority queue.
///
/// Suitable for campus-sized graphs; path costs always match [`find_path`].
pub fn find_path_linear(graph: &Graph, from: &str, to: &str) -> Result<Option<Path>> {
    let (start, goal) = resolve_endpoints(graph, from, to)?;
    if start.id == goal.id {
        return Ok(Some(Path::trivial(start)));
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();

    distances.insert(&start.id, 0.0);

    loop {
        let closest = distances
            .iter()
            .filter(|(node, _)| !settled.contains(*node))
            .min_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(node, cost)| (*node, *cost));

        // Nothing left with a finite distance: the goal is unreachable.
        let Some((current, current_cost)) = closest else {
            return Ok(None);
        };

        if current == goal.id {
            return Ok(Some(reconstruct_path(
                graph,
                &parents,
                &start.id,
                &goal.id,
                current_cost,
            )));
        }

        settled.insert(current);

        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            if settled.contains(next) {
                continue;
            }

            let next_cost = current_cost + edge.distance;
            if is_improvement(&distances, next, next_cost) {
                distances.insert(next, next_cost);
                parents.insert(next, current);
            }
        }
    }
}

/// A node without a tentative distance has not been reached yet.
fn is_improvement(distances: &HashMap<&str, f64>, node: &str, cost: f64) -> bool {
    distances.get(node).map_or(true, |&known| cost < known)
}

fn resolve_endpoints<'g>(graph: &'g Graph, from: &str, to: &str) -> Result<(&'g Node, &'g Node)> {
    let start = lookup(graph, from)?;
    let goal = lookup(graph, to)?;
    Ok((start, goal))
}

fn lookup<'g>(graph: &'g Graph, id: &str) -> Result<&'g Node> {
    graph.node(id).ok_or_else(|| Error::UnknownNode {
        id: id.to_string(),
        suggestions: graph.fuzzy_node_matches(id, MAX_SUGGESTIONS),
    })
}

fn reconstruct_path(
    graph: &Graph,
    parents: &HashMap<&str, &str>,
    start: &str,
    goal: &str,
    distance: f64,
) -> Path {
    let mut ids = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        ids.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied();
    }
    ids.reverse();

    Path {
        nodes: ids
            .into_iter()
            .filter_map(|id| graph.node(id).cloned())
            .collect(),
        distance,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

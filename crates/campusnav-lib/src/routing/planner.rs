//! Route planning strategies implementing the Strategy pattern.
//!
//! Each planner wraps one shortest-path implementation so `plan_route` can
//! dispatch on [`RouteAlgorithm`] without knowing how the search is run.

use crate::error::Result;
use crate::graph::Graph;
use crate::path::{find_path, find_path_linear, Path};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Ok(None)` when the goal is unreachable from the start.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Result<Option<Path>>;
}

/// Dijkstra over a binary-heap priority queue.
#[derive(Debug, Clone, Default)]
pub struct HeapPlanner;

impl RoutePlanner for HeapPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Result<Option<Path>> {
        find_path(graph, start, goal)
    }
}

/// Dijkstra selecting the closest unsettled node by linear scan.
#[derive(Debug, Clone, Default)]
pub struct LinearScanPlanner;

impl RoutePlanner for LinearScanPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::LinearScan
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Result<Option<Path>> {
        find_path_linear(graph, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(HeapPlanner),
        RouteAlgorithm::LinearScan => Box::new(LinearScanPlanner),
    }
}

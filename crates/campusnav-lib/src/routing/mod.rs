//! Route planning over campus locations.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported shortest-path implementations
//! - [`RouteRequest`] - Route request naming locations by node id or building
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Unlike [`crate::path::find_path`], which reports an unreachable goal as
//! `Ok(None)`, [`plan_route`] turns it into [`Error::RouteNotFound`] so callers
//! presenting a single result can propagate it with `?`.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{load_campus, plan_route, RouteRequest};
//!
//! let campus = load_campus("path/to/data".as_ref())?;
//! let plan = plan_route(&campus, &RouteRequest::dijkstra("library", "senate"))?;
//! println!("Route: {} hops, {:.0} m", plan.hop_count(), plan.total_distance());
//! ```

mod planner;

pub use planner::{select_planner, HeapPlanner, LinearScanPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::campus::CampusData;
use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::locate::nearest_node;
use crate::path::Path;

/// Supported shortest-path implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm with a binary-heap priority queue.
    #[default]
    Dijkstra,
    /// Dijkstra's algorithm selecting the next node by linear scan.
    LinearScan,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::LinearScan => "linear-scan",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "heap" => Ok(RouteAlgorithm::Dijkstra),
            "linear-scan" | "linear_scan" | "linear" => Ok(RouteAlgorithm::LinearScan),
            _ => Err(Error::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
///
/// `start` and `goal` may name a graph node id, a building id, or a building
/// name (case-insensitive).
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for heap-based Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub path: Path,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    /// Total walking distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.path.distance
    }

    pub fn steps(&self) -> Vec<&str> {
        self.path.ids()
    }
}

/// Resolve a user-supplied location to a graph node id.
///
/// Graph node ids win, then building ids, then building names. A building
/// without a node of the same id is snapped to the nearest graph node.
pub fn resolve_location(campus: &CampusData, name: &str) -> Result<NodeId> {
    if campus.graph.contains(name) {
        return Ok(name.to_string());
    }

    let building = campus
        .building(name)
        .or_else(|| campus.building_by_name(name));

    if let Some(building) = building {
        if campus.graph.contains(&building.id) {
            return Ok(building.id.clone());
        }
        if let Some(node) = nearest_node(&campus.graph, &building.position()) {
            debug!(building = %building.id, node = %node.id, "snapped building to nearest node");
            return Ok(node.id.clone());
        }
    }

    Err(Error::UnknownNode {
        id: name.to_string(),
        suggestions: campus.fuzzy_matches(name, 3),
    })
}

/// Compute a route using the requested algorithm.
///
/// 1. Resolve both locations to graph node ids.
/// 2. Run the selected planner.
/// 3. Map an unreachable goal to [`Error::RouteNotFound`].
pub fn plan_route(campus: &CampusData, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_location(campus, &request.start)?;
    let goal_id = resolve_location(campus, &request.goal)?;

    let planner = select_planner(request.algorithm);
    let path = planner
        .find_path(&campus.graph, &start_id, &goal_id)?
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        algorithm = %request.algorithm,
        start = %start_id,
        goal = %goal_id,
        hops = path.hop_count(),
        distance = path.distance,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start_id,
        goal: goal_id,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::graph::Node;

    #[test]
    fn algorithm_round_trips_through_display() {
        for algorithm in [RouteAlgorithm::Dijkstra, RouteAlgorithm::LinearScan] {
            let parsed: RouteAlgorithm = algorithm.to_string().parse().expect("parses");
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn algorithm_serializes_snake_case() {
        let json = serde_json::to_string(&RouteAlgorithm::LinearScan).expect("serializes");
        assert_eq!(json, "\"linear_scan\"");
        assert_eq!(RouteAlgorithm::LinearScan.to_string(), "linear-scan");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = "a-star".parse::<RouteAlgorithm>().expect_err("unsupported");
        assert!(err.to_string().contains("a-star"));
    }

    #[test]
    fn default_request_algorithm_is_heap_dijkstra() {
        assert_eq!(RouteAlgorithm::default(), RouteAlgorithm::Dijkstra);
        let request = RouteRequest::dijkstra("a", "b").with_algorithm(RouteAlgorithm::LinearScan);
        assert_eq!(request.algorithm, RouteAlgorithm::LinearScan);
    }

    #[test]
    fn route_plan_hop_count() {
        let node = |id: &str| Node {
            id: id.to_string(),
            position: GeoPoint::new(0.0, 0.0),
        };
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: "a".to_string(),
            goal: "c".to_string(),
            path: Path {
                nodes: vec![node("a"), node("b"), node("c")],
                distance: 12.5,
            },
        };
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.total_distance(), 12.5);
        assert_eq!(plan.steps(), vec!["a", "b", "c"]);
    }
}

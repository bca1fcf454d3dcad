//! Campus navigation library entry points.
//!
//! This crate exposes helpers to locate the campus data directory, load the
//! building and walkway data into memory, build a validated graph, and run
//! shortest-path queries over it. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod directions;
pub mod error;
pub mod geo;
pub mod graph;
pub mod locate;
pub mod path;
pub mod routing;
pub mod saved;

pub use campus::{
    default_data_dir, load_campus, resolve_data_dir, Building, CampusData, GraphData, GraphEdge,
    GraphNode, Room,
};
pub use directions::{DirectionStep, Maneuver, RenderMode, RouteEndpoint, RouteSummary};
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::{Edge, Graph, Node, NodeId};
pub use locate::{nearest_node, FALLBACK_LOCATION};
pub use path::{find_path, find_path_linear, Path};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use saved::SavedLocations;

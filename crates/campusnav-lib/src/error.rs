use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required campus data file was not present in the data directory.
    #[error("campus data file not found at {path}")]
    DataFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for campus data")]
    ProjectDirsUnavailable,

    /// Raised when a node identifier appears more than once in the graph data.
    #[error("duplicate node identifier: {id}")]
    DuplicateNode { id: String },

    /// Raised when an edge or connection names a node that is not in the graph.
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownEdgeEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    /// Raised when an edge weight is negative or not a finite number.
    #[error("edge {from} -> {to} has invalid distance {distance}")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        distance: f64,
    },

    /// Raised when the summed walkway distances do not fit in an `f64`.
    #[error("total walkway distance is not finite ({total})")]
    TotalDistanceOverflow { total: f64 },

    /// Raised when a node position is outside valid latitude/longitude ranges.
    #[error("node {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinate {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    /// Raised when a query names a node that is not part of the graph.
    #[error("unknown node: {id}{}", format_suggestions(.suggestions))]
    UnknownNode {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a building identifier is not present in the campus data.
    #[error("unknown building: {id}")]
    UnknownBuilding { id: String },

    /// Raised when an algorithm name cannot be parsed.
    #[error("unsupported routing algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

//! Campus data model and loaders.
//!
//! A campus data directory holds two JSON documents:
//!
//! - `buildings.json`: `{ "buildings": [ { "id", "name", "description",
//!   "latitude", "longitude", "rooms": [...] } ] }`
//! - `graph.json`: `{ "nodes": [ { "id", "latitude", "longitude",
//!   "connections": [...] } ], "edges": [ { "from", "to", "distance" } ] }`
//!
//! [`load_campus`] parses both and validates the walkway graph before handing
//! back an immutable [`CampusData`] snapshot.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::{fuzzy_matches, Graph};

/// Filename of the building catalogue inside the data directory.
pub const BUILDINGS_FILENAME: &str = "buildings.json";
/// Filename of the walkway graph inside the data directory.
pub const GRAPH_FILENAME: &str = "graph.json";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CAMPUSNAV_DATA_DIR";

/// A room inside a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub floor: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// A campus building shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<Room>,
}

impl Building {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Deserialize)]
struct BuildingsFile {
    buildings: Vec<Building>,
}

/// Node as stored in `graph.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// Undirected walkway as stored in `graph.json`; `distance` is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Unvalidated graph document. Convert with [`Graph::from_data`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// Buildings plus the validated walkway graph.
#[derive(Debug, Clone, Default)]
pub struct CampusData {
    pub buildings: Vec<Building>,
    pub graph: Graph,
}

impl CampusData {
    /// Lookup a building by exact identifier.
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Lookup a building by case-insensitive name.
    pub fn building_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Display name for a node: the building name when one shares its id.
    pub fn display_name(&self, node_id: &str) -> Option<&str> {
        self.building(node_id).map(|b| b.name.as_str())
    }

    /// Case-insensitive substring search over building names and descriptions.
    pub fn search_buildings(&self, query: &str) -> Vec<&Building> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.buildings.iter().collect();
        }
        self.buildings
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&needle)
                    || b.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Node identifiers and building names similar to `query`.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let candidates = self
            .graph
            .nodes()
            .map(|n| n.id.as_str())
            .chain(self.buildings.iter().map(|b| b.name.as_str()));
        fuzzy_matches(candidates, query, limit)
    }
}

/// Load `buildings.json` and `graph.json` from `dir`.
pub fn load_campus(dir: &Path) -> Result<CampusData> {
    let buildings: BuildingsFile = read_json(&dir.join(BUILDINGS_FILENAME))?;
    let data: GraphData = read_json(&dir.join(GRAPH_FILENAME))?;
    let graph = Graph::from_data(&data)?;

    debug!(
        path = %dir.display(),
        buildings = buildings.buildings.len(),
        nodes = graph.len(),
        "loaded campus data"
    );

    Ok(CampusData {
        buildings: buildings.buildings,
        graph,
    })
}

/// Parse a single JSON document, mapping a missing file to [`Error::DataFileNotFound`].
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Resolve the platform-specific campus data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "campusnav", "campusnav")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Pick the data directory to use.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

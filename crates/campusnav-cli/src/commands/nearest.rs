//! Nearest command handler: snap a coordinate to the walkway graph.

use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

use campusnav_cli::output::{to_json, OutputFormat};
use campusnav_lib::{nearest_node, GeoPoint, FALLBACK_LOCATION};

use super::load_campus_data;

#[derive(Debug, Serialize)]
struct NearestOutput<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    distance_m: f64,
    latitude: f64,
    longitude: f64,
}

/// Handle the nearest subcommand.
///
/// Without coordinates the campus fallback location is used, mirroring what
/// a client does when geolocation is unavailable.
pub fn handle_nearest_command(
    data_dir: &Path,
    format: OutputFormat,
    coordinates: Option<(f64, f64)>,
) -> Result<()> {
    let point = match coordinates {
        Some((lat, lng)) => GeoPoint::new(lat, lng),
        None => {
            info!("no coordinates supplied; using fallback campus location");
            FALLBACK_LOCATION
        }
    };
    if !point.is_valid() {
        return Err(anyhow!(
            "invalid coordinates ({}, {})",
            point.latitude,
            point.longitude
        ));
    }

    let campus = load_campus_data(data_dir)?;
    let node = nearest_node(&campus.graph, &point)
        .ok_or_else(|| anyhow!("campus graph has no nodes"))?;

    let output = NearestOutput {
        id: &node.id,
        name: campus.display_name(&node.id),
        distance_m: node.position.distance_to(&point),
        latitude: node.position.latitude,
        longitude: node.position.longitude,
    };

    match format {
        OutputFormat::Json => print!("{}", to_json(&output)?),
        OutputFormat::Compact => println!("{}", output.id),
        OutputFormat::Text => match output.name {
            Some(name) => println!(
                "Nearest node: {} ({}), {:.0} m away",
                output.id, name, output.distance_m
            ),
            None => println!(
                "Nearest node: {}, {:.0} m away",
                output.id, output.distance_m
            ),
        },
    }
    Ok(())
}

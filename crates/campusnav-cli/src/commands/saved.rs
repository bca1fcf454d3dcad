//! Saved command handler for managing favourite locations.

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

use campusnav_cli::output::{to_json, OutputFormat};
use campusnav_lib::{CampusData, Error as CampusError, SavedLocations};

use super::load_campus_data;

/// Saved-location actions.
#[derive(Subcommand, Debug, Clone)]
pub enum SavedAction {
    /// List saved locations.
    List,
    /// Save a building by id or name.
    Add { building: String },
    /// Remove a saved building by id or name.
    Remove { building: String },
}

/// Handle the saved subcommand.
pub fn handle_saved_command(
    data_dir: &Path,
    format: OutputFormat,
    action: &SavedAction,
) -> Result<()> {
    let mut saved = SavedLocations::load_in(data_dir)?;

    match action {
        SavedAction::List => {
            if format == OutputFormat::Json {
                print!("{}", to_json(saved.ids())?);
                return Ok(());
            }
            if saved.ids().is_empty() && format == OutputFormat::Text {
                println!("No saved locations.");
                return Ok(());
            }
            // Ids are still listed when the campus data cannot be loaded.
            let campus = match format {
                OutputFormat::Text => optional_campus(data_dir),
                _ => None,
            };
            for id in saved.ids() {
                match campus.as_ref().and_then(|c| c.display_name(id)) {
                    Some(name) => println!("{id:<16} {name}"),
                    None => println!("{id}"),
                }
            }
        }
        SavedAction::Add { building } => {
            let campus = load_campus_data(data_dir)?;
            let id = resolve_building(&campus, building)?;
            if saved.add(&id) {
                saved.save()?;
                println!("Saved {id}");
            } else {
                println!("{id} is already saved");
            }
        }
        SavedAction::Remove { building } => {
            // Exact saved ids need no lookup; names are resolved when data is available.
            let id = if saved.contains(building) {
                building.clone()
            } else {
                optional_campus(data_dir)
                    .and_then(|campus| resolve_building(&campus, building).ok())
                    .unwrap_or_else(|| building.clone())
            };
            if saved.remove(&id) {
                saved.save()?;
                println!("Removed {id}");
            } else {
                println!("{id} was not saved");
            }
        }
    }
    Ok(())
}

fn optional_campus(data_dir: &Path) -> Option<CampusData> {
    match load_campus_data(data_dir) {
        Ok(campus) => Some(campus),
        Err(err) => {
            debug!(error = %err, "campus data unavailable; using saved ids as given");
            None
        }
    }
}

fn resolve_building(campus: &CampusData, query: &str) -> Result<String, CampusError> {
    campus
        .building(query)
        .or_else(|| campus.building_by_name(query))
        .map(|b| b.id.clone())
        .ok_or_else(|| CampusError::UnknownBuilding {
            id: query.to_string(),
        })
}

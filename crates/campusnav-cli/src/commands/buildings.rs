//! Buildings command handler for listing and searching campus buildings.

use std::path::Path;

use anyhow::Result;

use campusnav_cli::output::{to_json, OutputFormat};

use super::load_campus_data;

/// Handle the buildings subcommand.
pub fn handle_buildings_command(
    data_dir: &Path,
    format: OutputFormat,
    search: Option<&str>,
) -> Result<()> {
    let campus = load_campus_data(data_dir)?;
    let mut buildings = campus.search_buildings(search.unwrap_or_default());
    buildings.sort_by(|a, b| a.name.cmp(&b.name));

    match format {
        OutputFormat::Json => print!("{}", to_json(&buildings)?),
        OutputFormat::Compact => {
            for building in &buildings {
                println!("{}", building.id);
            }
        }
        OutputFormat::Text => {
            if buildings.is_empty() {
                println!("No buildings match.");
            }
            for building in &buildings {
                println!("{:<16} {}", building.id, building.name);
            }
        }
    }
    Ok(())
}

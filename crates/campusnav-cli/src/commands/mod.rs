// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches to these handlers.

pub mod buildings;
pub mod nearest;
pub mod route;
pub mod saved;

use std::path::Path;

use anyhow::{Context, Result};

use campusnav_lib::{load_campus, CampusData};

/// Load campus data from `data_dir` with a path-bearing error message.
pub fn load_campus_data(data_dir: &Path) -> Result<CampusData> {
    load_campus(data_dir)
        .with_context(|| format!("failed to load campus data from {}", data_dir.display()))
}

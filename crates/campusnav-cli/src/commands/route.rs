//! Route command handler for computing walking directions.

use std::path::Path;

use anyhow::Result;

use campusnav_cli::output::{render_summary, OutputFormat};
use campusnav_lib::{plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

use super::load_campus_data;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location.
    pub from: String,
    /// Destination location.
    pub to: String,
    /// Shortest-path implementation to run.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::dijkstra(self.from.clone(), self.to.clone()).with_algorithm(self.algorithm)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    data_dir: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let campus = load_campus_data(data_dir)?;
    let plan = plan_route(&campus, &args.to_request())?;
    let summary = RouteSummary::from_plan(&campus, &plan)?;
    print!("{}", render_summary(&summary, format)?);
    Ok(())
}

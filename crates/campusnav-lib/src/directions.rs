//! Turn-by-turn directions for planned routes.
//!
//! A [`RouteSummary`] is the structured, serialisable form of a
//! [`RoutePlan`]: one [`DirectionStep`] per node, each carrying the maneuver
//! taken there and the length of the walk to the next node.

use std::fmt::Write;

use serde::Serialize;

use crate::campus::CampusData;
use crate::error::{Error, Result};
use crate::graph::{Node, NodeId};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Walking pace used for time estimates (100 m takes about two minutes).
pub const WALKING_SPEED_M_PER_MIN: f64 = 50.0;

/// Maneuver performed at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Maneuver {
    Depart,
    Straight,
    SlightLeft,
    SlightRight,
    Left,
    Right,
    SharpLeft,
    SharpRight,
    UTurn,
    Arrive,
}

impl Maneuver {
    /// Classify a signed turn angle in degrees; positive turns are clockwise.
    pub fn from_turn(angle: f64) -> Self {
        let magnitude = angle.abs();
        let right = angle > 0.0;
        if magnitude < 20.0 {
            Maneuver::Straight
        } else if magnitude < 60.0 {
            if right {
                Maneuver::SlightRight
            } else {
                Maneuver::SlightLeft
            }
        } else if magnitude < 135.0 {
            if right {
                Maneuver::Right
            } else {
                Maneuver::Left
            }
        } else if magnitude < 170.0 {
            if right {
                Maneuver::SharpRight
            } else {
                Maneuver::SharpLeft
            }
        } else {
            Maneuver::UTurn
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Maneuver::Depart => "Depart from",
            Maneuver::Straight => "Continue straight past",
            Maneuver::SlightLeft => "Bear left at",
            Maneuver::SlightRight => "Bear right at",
            Maneuver::Left => "Turn left at",
            Maneuver::Right => "Turn right at",
            Maneuver::SharpLeft => "Turn sharp left at",
            Maneuver::SharpRight => "Turn sharp right at",
            Maneuver::UTurn => "Make a U-turn at",
            Maneuver::Arrive => "Arrive at",
        }
    }
}

/// Signed difference between two compass bearings, normalised to `(-180, 180]`.
pub fn turn_angle(incoming: f64, outgoing: f64) -> f64 {
    let mut delta = (outgoing - incoming) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Header plus one numbered line per step.
    PlainText,
    /// Single line of location names.
    Compact,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// One instruction in a turn-by-turn listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectionStep {
    pub index: usize,
    pub node_id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub maneuver: Maneuver,
    pub instruction: String,
    /// Meters walked from this node to the next one.
    pub distance_m: f64,
    pub time_min: u32,
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub total_distance_m: f64,
    pub total_time_min: u32,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<DirectionStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into directions with resolved building names.
    pub fn from_plan(campus: &CampusData, plan: &RoutePlan) -> Result<Self> {
        let nodes = &plan.path.nodes;
        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let endpoint = |node: &Node| RouteEndpoint {
            id: node.id.clone(),
            name: campus.display_name(&node.id).map(str::to_string),
        };

        let legs: Vec<f64> = nodes
            .windows(2)
            .map(|pair| leg_distance(campus, &pair[0], &pair[1]))
            .collect();

        let steps = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let maneuver = maneuver_at(nodes, index);
                let name = campus.display_name(&node.id).map(str::to_string);
                let distance_m = legs.get(index).copied().unwrap_or(0.0);
                DirectionStep {
                    index,
                    node_id: node.id.clone(),
                    instruction: format!(
                        "{} {}",
                        maneuver.verb(),
                        name.as_deref().unwrap_or(&node.id)
                    ),
                    name,
                    maneuver,
                    distance_m,
                    time_min: walking_minutes(distance_m),
                }
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            total_distance_m: plan.total_distance(),
            total_time_min: walking_minutes(plan.total_distance()),
            start: endpoint(first),
            goal: endpoint(last),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.0} m, ~{} min, algorithm: {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_distance_m,
            self.total_time_min,
            self.algorithm
        );
        for step in &self.steps {
            if step.maneuver == Maneuver::Arrive {
                let _ = writeln!(buffer, "{:>3}. {}", step.index + 1, step.instruction);
            } else {
                let _ = writeln!(
                    buffer,
                    "{:>3}. {} ({:.0} m, {} min)",
                    step.index + 1,
                    step.instruction,
                    step.distance_m,
                    step.time_min
                );
            }
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.name.as_deref().unwrap_or(&step.node_id))
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined} ({:.0} m)\n", self.total_distance_m)
    }
}

fn walking_minutes(distance_m: f64) -> u32 {
    (distance_m / WALKING_SPEED_M_PER_MIN).ceil() as u32
}

fn leg_distance(campus: &CampusData, from: &Node, to: &Node) -> f64 {
    campus
        .graph
        .edge_distance(&from.id, &to.id)
        .unwrap_or_else(|| from.position.distance_to(&to.position))
}

fn maneuver_at(nodes: &[Node], index: usize) -> Maneuver {
    if index + 1 == nodes.len() {
        return Maneuver::Arrive;
    }
    if index == 0 {
        return Maneuver::Depart;
    }

    let (prev, here, next) = (
        &nodes[index - 1].position,
        &nodes[index].position,
        &nodes[index + 1].position,
    );
    // Coincident waypoints have no meaningful bearing.
    if prev.distance_to(here) == 0.0 || here.distance_to(next) == 0.0 {
        return Maneuver::Straight;
    }
    Maneuver::from_turn(turn_angle(prev.bearing_to(here), here.bearing_to(next)))
}

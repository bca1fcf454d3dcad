mod common;

use campusnav_lib::{
    plan_route, Error, Maneuver, Path, RenderMode, RouteAlgorithm, RoutePlan, RouteRequest,
    RouteSummary,
};

use common::fixture_campus;

#[test]
fn summary_rejects_empty_plans() {
    let campus = fixture_campus();
    let plan = RoutePlan {
        algorithm: RouteAlgorithm::Dijkstra,
        start: "library".to_string(),
        goal: "library".to_string(),
        path: Path {
            nodes: Vec::new(),
            distance: 0.0,
        },
    };

    let err = RouteSummary::from_plan(&campus, &plan).expect_err("empty plans are rejected");
    assert!(matches!(err, Error::EmptyRoutePlan));
}

#[test]
fn summary_turns_right_at_junction() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("main-gate", "faculty-cs"))
        .expect("route exists");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    let maneuvers: Vec<_> = summary.steps.iter().map(|s| s.maneuver).collect();
    assert_eq!(
        maneuvers,
        vec![
            Maneuver::Depart,
            Maneuver::Right,
            Maneuver::Straight,
            Maneuver::Arrive
        ]
    );

    assert_eq!(summary.start.name.as_deref(), Some("Main Gate"));
    assert_eq!(summary.goal.name.as_deref(), Some("Faculty of Computer Science"));
    assert_eq!(summary.steps[1].name, None, "junctions are not buildings");
    assert_eq!(summary.steps[0].distance_m, 167.0);
    assert_eq!(summary.steps[3].distance_m, 0.0);
    assert_eq!(summary.total_time_min, 13);
    assert_eq!(summary.hops, 3);
}

#[test]
fn step_distances_add_up_to_total() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("hostel", "faculty-cs"))
        .expect("route exists");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    let sum: f64 = summary.steps.iter().map(|s| s.distance_m).sum();
    assert!((sum - summary.total_distance_m).abs() < 1e-9);
}

#[test]
fn trivial_route_only_arrives() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("senate", "senate")).expect("trivial");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    assert_eq!(summary.steps.len(), 1);
    assert_eq!(summary.steps[0].maneuver, Maneuver::Arrive);
    assert_eq!(summary.steps[0].instruction, "Arrive at Senate Building");
}

#[test]
fn plain_text_render_lists_numbered_steps() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("main-gate", "faculty-cs"))
        .expect("route exists");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    let text = summary.render(RenderMode::PlainText);
    let lines: Vec<_> = text.lines().collect();
    let header = "Route: Main Gate -> Faculty of Computer Science \
                  (3 hops, 607 m, ~13 min, algorithm: dijkstra)";
    assert_eq!(lines[0], header);
    assert_eq!(lines[1], "  1. Depart from Main Gate (167 m, 4 min)");
    assert_eq!(lines[2], "  2. Turn right at junction-a (220 m, 5 min)");
    assert_eq!(lines[4], "  4. Arrive at Faculty of Computer Science");
}

#[test]
fn compact_render_is_single_line() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("library", "hostel"))
        .expect("route exists");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    assert_eq!(
        summary.render(RenderMode::Compact),
        "University Library -> Students Hostel (280 m)\n"
    );
}

#[test]
fn summary_serialises_maneuvers_in_snake_case() {
    let campus = fixture_campus();
    let plan = plan_route(&campus, &RouteRequest::dijkstra("main-gate", "faculty-cs"))
        .expect("route exists");
    let summary = RouteSummary::from_plan(&campus, &plan).expect("summary builds");

    let json = serde_json::to_value(&summary).expect("serialises");
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["steps"][0]["maneuver"], "depart");
    assert_eq!(json["steps"][1]["maneuver"], "right");
    assert!(json["steps"][1].get("name").is_none());
}

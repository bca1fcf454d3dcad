use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus")
        .canonicalize()
        .expect("fixture campus present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixture_dir());
    cmd
}

#[test]
fn route_prints_turn_by_turn_directions() {
    cli()
        .args(["route", "--from", "main-gate", "--to", "faculty-cs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Main Gate -> Faculty of Computer Science (3 hops, 607 m",
        ))
        .stdout(predicate::str::contains("Turn right at junction-a"))
        .stdout(predicate::str::contains("Arrive at Faculty of Computer Science"));
}

#[test]
fn linear_scan_algorithm_is_supported() {
    cli()
        .args([
            "route",
            "--from",
            "Students Hostel",
            "--to",
            "Main Gate",
            "--algorithm",
            "linear-scan",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: linear-scan"))
        .stdout(predicate::str::contains("614 m"));
}

#[test]
fn compact_format_outputs_single_line() {
    cli()
        .args(["--format", "compact", "route", "--from", "library", "--to", "hostel"])
        .assert()
        .success()
        .stdout(predicate::eq("University Library -> Students Hostel (280 m)\n"));
}

#[test]
fn json_format_outputs_summary() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "main-gate", "--to", "faculty-cs"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["hops"], 3);
    assert_eq!(json["total_distance_m"], 607.0);
    assert_eq!(json["steps"][1]["maneuver"], "right");
}

#[test]
fn disconnected_destination_reports_no_route() {
    cli()
        .args(["route", "--from", "library", "--to", "sports-complex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no route found between library and sports-complex",
        ));
}

#[test]
fn unknown_location_error_is_friendly() {
    cli()
        .args(["route", "--from", "libary", "--to", "senate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node: libary"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn unsupported_algorithm_is_rejected_by_parser() {
    cli()
        .args(["route", "--from", "library", "--to", "senate", "--algorithm", "a-star"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported routing algorithm"));
}

#[test]
fn missing_data_directory_fails_with_context() {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env("RUST_LOG", "error")
        .args(["--data-dir", "/nonexistent/campusnav-data"])
        .args(["route", "--from", "a", "--to", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus data"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/judge_grant_rates.json");

fn cmd() -> Command {
    Command::cargo_bin("courtstats").unwrap()
}

#[test]
fn city_default_text() {
    cmd()
        .args(["city", TABLE])
        .assert()
        .success()
        .stdout(contains("San Francisco (City)"))
        .stdout(contains("Out of 2000 cases in San Francisco, 742 were granted asylum, 163 were granted other relief, and 1095 were denied."));
}

#[test]
fn city_tiers_color_the_judge_rings() {
    cmd()
        .args(["city", TABLE, "--tiers", "three"])
        .assert()
        .success()
        .stdout(contains("Laura Ramirez"))
        .stdout(contains("#FFBD7A"));
    cmd()
        .args(["city", TABLE, "--tiers", "two"])
        .assert()
        .success()
        .stdout(contains("#9DE580"))
        .stdout(contains("#FFBD7A").not());
}

#[test]
fn city_json_spanish_sorted() {
    let output = cmd()
        .args(["city", TABLE, "Los%20Angeles", "--sort", "alpha", "--lang", "es", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cityName"], "Los Angeles");
    assert_eq!(json["sortPolicy"], "alpha");
    assert_eq!(json["aggregate"]["totalCases"], 760);
    assert_eq!(json["rings"][0]["title"], "Asilo Otorgado");
}

#[test]
fn judge_found_and_missing() {
    cmd()
        .args(["judge", TABLE, "dennis holt"])
        .assert()
        .success()
        .stdout(contains("Out of 1290 cases for Dennis Holt, 245 were granted asylum or other forms of relief."));

    cmd()
        .args(["judge", TABLE, "Nobody", "--lang", "ht"])
        .assert()
        .success()
        .stdout(contains("Jij pa jwenn: Nobody"));
}

#[test]
fn missing_table_fails() {
    cmd()
        .args(["city", "/nonexistent/table.json"])
        .assert()
        .failure()
        .stderr(contains("[data::table] Failed to open"));
}

#[test]
fn ring_writes_svg_and_respects_force() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ring.svg");
    let out_str = out.to_str().unwrap();

    cmd()
        .args(["ring", "43%", "-o", out_str, "--mark", "50", "--tiers", "two"])
        .assert()
        .success()
        .stdout(contains("Wrote ring"));
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(">43%</text>"));
    assert!(svg.contains("#FF7A7A"));
    assert!(svg.contains("<line "));

    cmd().args(["ring", "43", "-o", out_str]).assert().failure().stderr(contains("--force"));
    cmd().args(["ring", "43", "-o", out_str, "--force", "--no-animate"]).assert().success();
    assert!(!std::fs::read_to_string(&out).unwrap().contains("<animate"));
}

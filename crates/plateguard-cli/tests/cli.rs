//! Command-level tests: single-item decisions, rendering, explain, error handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn plateguard_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("plateguard").expect("plateguard binary");
    // Relative default paths (plateguard.toml, artifacts/) resolve inside the temp dir.
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).expect("write file");
}

#[test]
fn food_decision_uses_name_only() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args(["--allergy", "Cheese", "food", "Cheese Quesadilla"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "not eligible: Cheese Quesadilla (may not be safe for you)",
        ))
        .stdout(predicate::str::contains("allergen.food_name/allergen_in_food_name"));

    plateguard_cmd(temp.path())
        .args([
            "--allergy",
            "Peanuts",
            "food",
            "Trail Mix",
            "--ingredient",
            "Peanuts",
        ])
        .assert()
        .success()
        .stdout("eligible: Trail Mix\n");
}

#[test]
fn food_decision_reads_config_file() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "plateguard.toml", "dietary_preference = \"vegetarian\"\n");

    plateguard_cmd(temp.path())
        .args(["food", "Scrambled Eggs"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("egg_food"));

    plateguard_cmd(temp.path())
        .args(["--diet", "eggtarian", "food", "Scrambled Eggs"])
        .assert()
        .success();
}

#[test]
fn recipe_decision_covers_allergens_and_diet() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args([
            "--diet",
            "vegetarian",
            "recipe",
            "--ingredient",
            "Broccoli",
            "--ingredient",
            "Olive Oil",
        ])
        .assert()
        .success()
        .stdout("eligible: recipe\n");

    plateguard_cmd(temp.path())
        .args([
            "--allergy",
            "Milk/Dairy",
            "recipe",
            "--ingredient",
            "Macaroni",
            "--allergen",
            "Dairy",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("allergen_in_recipe_tag"));
}

#[test]
fn unknown_diet_falls_back_to_non_vegetarian() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args(["--diet", "pescatarian", "food", "Baked Salmon"])
        .assert()
        .success()
        .stderr(predicate::str::contains("pescatarian"));
}

#[test]
fn check_then_md_and_badges() {
    let temp = TempDir::new().expect("temp dir");
    write(
        temp.path(),
        "plateguard.toml",
        "dietary_preference = \"vegetarian\"\nallergies = [\"Peanuts\"]\n",
    );

    plateguard_cmd(temp.path())
        .args(["check", "--write-markdown"])
        .assert()
        .code(2);

    let report = temp.path().join("artifacts/plateguard/report.json");
    assert!(report.exists());
    let comment = std::fs::read_to_string(temp.path().join("artifacts/plateguard/comment.md"))
        .expect("markdown written");
    assert!(comment.contains("# Plateguard report"));
    assert!(comment.contains("may not be safe for you"));

    plateguard_cmd(temp.path())
        .args(["md", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: **FAIL**"));

    plateguard_cmd(temp.path())
        .args(["badges", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ok] Fruit Bowl"))
        .stdout(predicate::str::contains(
            "[!!] Scrambled Eggs (may not be safe for you)",
        ))
        // Literal matching: "Peanut Butter" does not contain "Peanuts".
        .stdout(predicate::str::contains("[ok] Peanut Butter Toast"))
        .stdout(predicate::str::contains("[!!] Baked Salmon"));
}

#[test]
fn check_report_matches_json_schema() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args(["--diet", "vegetarian", "check", "--report-out", "out/report.json"])
        .assert()
        .code(2);

    let text = std::fs::read_to_string(temp.path().join("out/report.json")).expect("report");
    let instance: serde_json::Value = serde_json::from_str(&text).expect("report JSON");

    let schema = schemars::schema_for!(plateguard_types::PlateguardReportV1);
    let schema = serde_json::to_value(&schema).expect("schema JSON");
    let validator = jsonschema::validator_for(&schema).expect("compile schema");
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}

#[test]
fn clean_check_exits_zero() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args(["check"])
        .assert()
        .success();
}

#[test]
fn broken_catalog_writes_error_report() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "catalog.json", "{ \"foods\": [");

    plateguard_cmd(temp.path())
        .args(["check", "--catalog", "catalog.json", "--report-out", "report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("plateguard error"));

    let text = std::fs::read_to_string(temp.path().join("report.json")).expect("error report");
    let report: serde_json::Value = serde_json::from_str(&text).expect("report JSON");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["rule_id"], "tool.runtime");
    assert_eq!(report["findings"][0]["code"], "runtime_error");
}

#[test]
fn invalid_config_severity_is_a_tool_error() {
    let temp = TempDir::new().expect("temp dir");
    write(
        temp.path(),
        "plateguard.toml",
        "[rules.\"diet.food_name\"]\nseverity = \"fatal\"\n",
    );

    plateguard_cmd(temp.path())
        .args(["check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid severity for diet.food_name"));
}

#[test]
fn explain_known_and_unknown() {
    let temp = TempDir::new().expect("temp dir");

    plateguard_cmd(temp.path())
        .args(["explain", "allergen.recipe_tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));

    plateguard_cmd(temp.path())
        .args(["explain", "diet.vegan"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown rule id or code: diet.vegan"))
        .stderr(predicate::str::contains("egg_food"));
}

#[test]
fn allergens_lists_catalog() {
    let temp = TempDir::new().expect("temp dir");

    let out = plateguard_cmd(temp.path())
        .arg("allergens")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).expect("utf8");
    let labels: Vec<&str> = text.lines().collect();
    assert_eq!(labels.len(), 10);
    assert_eq!(labels[0], "Peanuts");
    assert!(labels.contains(&"Milk/Dairy"));
}

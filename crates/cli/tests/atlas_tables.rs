use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const EXTRA_YAML: &str = r#"
- id: Aeon-1
  name: Relativity Aeon 1
  country: USA
  propellants: CH4/LOX
  fuel: Liquid Methane
  oxidizer: Liquid Oxygen
  chamber_pressure_mpa: 8.0
  engine_cycle: Gas-Generator
  base_thrust_kn: 100.0
  base_isp_s: 310.0
  dry_weight_kg: 110.0
  diagram:
    type: gas-generator
    nozzle_ratio: 1.2
"#;

fn bin() -> Command {
    Command::cargo_bin("atlas_tables").expect("atlas_tables bin")
}

#[test]
fn bundle_to_stdout_by_default() {
    let output = bin().assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json bundle");
    assert!(value.get("generatedAt").is_some());
    assert_eq!(value["engines"].as_array().unwrap().len(), 22);
    assert_eq!(value["carrierGases"].as_array().unwrap().len(), 8);
}

#[test]
fn csv_table_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("cathodes.csv");

    bin()
        .args([
            "--format",
            "csv",
            "--table",
            "cathodes",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&path).expect("csv output");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "id,name,description,efficiency_factor");
    assert!(lines[1].starts_with("tungsten,Tungsten (Standard),"));
}

#[test]
fn csv_without_table_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("never.csv");

    bin()
        .args(["--format", "csv", "--output", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--table"));
    assert!(!path.exists());
}

#[test]
fn unknown_table_is_rejected() {
    bin()
        .args(["--table", "boosters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table"));
}

#[test]
fn extra_engines_are_appended() {
    let dir = tempfile::tempdir().expect("tempdir");
    let extra = dir.path().join("extra.yaml");
    fs::write(&extra, EXTRA_YAML).expect("write extra");

    let output = bin()
        .args(["--table", "engines", "--extra-engines", extra.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let engines: serde_json::Value = serde_json::from_slice(&output).expect("engines json");
    let engines = engines.as_array().unwrap();
    assert_eq!(engines.len(), 23);
    assert_eq!(engines[22]["id"], "Aeon-1");
    assert_eq!(engines[22]["thrustToWeightRatio"], 93);
}

#[test]
fn duplicate_extra_engine_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let extra = dir.path().join("extra.yaml");
    fs::write(&extra, EXTRA_YAML.replace("Aeon-1", "Raptor")).expect("write extra");

    bin()
        .args(["--extra-engines", extra.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Raptor"));
}

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn analyze_prints_both_counts() {
    Command::cargo_bin("dicecount")
        .unwrap()
        .args(["analyze", "--rolls", "2", "--target", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ways to total 7 with 2 roll(s): 6"))
        .stdout(predicate::str::contains("Total combinations: 36"))
        .stdout(predicate::str::contains("Chance of exactly 7: 16.67%"));
}

#[test]
fn analyze_json_has_the_counts() {
    let out = Command::cargo_bin("dicecount")
        .unwrap()
        .args(["analyze", "--rolls", "3", "--target", "10", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["iterative_ways"], 27);
    assert_eq!(v["recursive_ways"], 27);
    assert_eq!(v["total_combinations"], 216);
}

#[test]
fn out_of_range_rolls_fail() {
    Command::cargo_bin("dicecount")
        .unwrap()
        .args(["analyze", "--rolls", "21", "--target", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rolls must be in 1..=20"));
}

#[test]
fn table_prints_every_row() {
    Command::cargo_bin("dicecount")
        .unwrap()
        .args(["table", "--rolls", "2", "--target", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2    0 0 1 2 3"));
}

#[test]
fn batch_reads_a_bom_prefixed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\xEF\xBB\xBF[{\"rolls\":1,\"target_sum\":3},{\"rolls\":2,\"target_sum\":7}]")
        .unwrap();
    let out = Command::cargo_bin("dicecount")
        .unwrap()
        .arg("batch")
        .arg("--file")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let ways: Vec<u64> = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["iterative_ways"]
            .as_u64()
            .unwrap())
        .collect();
    assert_eq!(ways, vec![1, 6]);
}

#[test]
fn config_can_skip_the_recursive_baseline() {
    let mut cfg = tempfile::NamedTempFile::new().unwrap();
    writeln!(cfg, "skip_recursive: true").unwrap();
    Command::cargo_bin("dicecount")
        .unwrap()
        .arg("--config")
        .arg(cfg.path())
        .args(["analyze", "--rolls", "20", "--target", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recursive skipped"));
}

#[test]
fn simulate_dice_reports_the_exact_chance() {
    Command::cargo_bin("simulate-dice")
        .unwrap()
        .args(["--rolls", "2", "--target", "7", "--samples", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exact chance:       16.67%"));
}

#[test]
fn simulate_dice_rejects_too_many_dice() {
    Command::cargo_bin("simulate-dice")
        .unwrap()
        .args(["--rolls", "50", "--target", "60", "--samples", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rolls must be at most 49"));
}

#[test]
fn simulate_dice_json_has_the_estimate() {
    let out = Command::cargo_bin("simulate-dice")
        .unwrap()
        .args(["--rolls", "2", "--target", "13", "--samples", "200", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["samples"], 200);
    assert_eq!(v["hits"], 0);
}

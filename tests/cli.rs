use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("sales.csv");
    std::fs::write(&path, "Region,Revenue\nEU,10%\nUS,\"20,5%\"\nAsia,30%\n").unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tabdash").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tabdash"));
}

#[test]
fn columns_lists_classification() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("tabdash").unwrap();
    cmd.args(["columns", "--input"]).arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Region  [categorical]"))
        .stdout(predicate::str::contains("Revenue  [numeric]"));
}

#[test]
fn chart_writes_file_and_prints_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let out = dir.path().join("chart.svg");

    let mut cmd = Command::cargo_bin("tabdash").unwrap();
    cmd.args(["chart", "--x", "Region", "--y", "Revenue", "--style", "bar", "--stats"]);
    cmd.args(["--input"]).arg(&input);
    cmd.args(["--out"]).arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Max Revenue: 30.00 (Asia)"))
        .stdout(predicate::str::contains("Average Revenue: 20.17"));
    assert!(out.exists());
}

#[test]
fn chart_fails_without_a_usable_axis_pair() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("numbers.csv");
    std::fs::write(&input, "A,B\n1,2\n3,4\n").unwrap();

    let mut cmd = Command::cargo_bin("tabdash").unwrap();
    cmd.args(["chart", "--x", "A", "--y", "B"]);
    cmd.args(["--input"]).arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no usable axis pair"));
}

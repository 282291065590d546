use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn csvtable() -> Command {
    Command::cargo_bin("csvtable").unwrap()
}

#[test]
fn prints_json_and_skips_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    fs::write(&path, "# exported scores\nname,score\n\"Lovelace, Ada\",97\n").unwrap();

    csvtable()
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Lovelace, Ada\""))
        .stdout(predicate::str::contains("exported").not());
}

#[test]
fn converts_separator_with_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out/converted.csv");
    fs::write(&input, "a\t\"say \"\"hi\"\"\"\nb\tc\n").unwrap();

    csvtable()
        .arg(&input)
        .args(["--separator", "\t", "--output-separator", ",", "--quote"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "\"a\",\"say \"\"hi\"\"\"\n\"b\",\"c\"\n"
    );
}

#[test]
fn expands_and_trims_before_printing_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, " a ,b\nc\n").unwrap();

    csvtable()
        .arg(&path)
        .args(["--trim", "--expand", "3", "2", "--format", "csv"])
        .assert()
        .success()
        .stdout("a,b\nc,\n,\n");
}

#[test]
fn terminal_output_without_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.csv");
    fs::write(&path, "x,y\n").unwrap();

    csvtable()
        .arg(&path)
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 rows, up to 2 columns"))
        .stdout(predicate::str::contains("x"));
}

#[test]
fn missing_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();

    csvtable()
        .arg(dir.path().join("nope.csv"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load file"));
}

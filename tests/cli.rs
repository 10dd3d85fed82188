use std::path::{Path, PathBuf};

use assert_cmd::Command;
use clap::Parser;
use kira_tumorstudy::cli::{Cli, Commands, ViewArg};
use kira_tumorstudy::views::View;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("kira-tumorstudy").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn view_defaults() {
    let cli = Cli::parse_from(["kira-tumorstudy", "view", "--view", "final-volume"]);
    match cli.command {
        Commands::View(args) => {
            assert_eq!(args.view, ViewArg::FinalVolume);
            assert_eq!(View::from(args.view), View::FinalVolume);
            assert_eq!(
                args.input.metadata,
                PathBuf::from("./Resources/Mouse_metadata.csv")
            );
            assert_eq!(args.output.regimen, "Capomulin");
            assert!(!args.output.json);
        }
        _ => panic!("expected view command"),
    }
}

#[test]
fn view_prints_correlation() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-tumorstudy").unwrap();
    cmd.args(["view", "--view", "weight-vs-volume", "--metadata"])
        .arg(fixture("Mouse_metadata.csv"))
        .arg("--results")
        .arg(fixture("Study_results.csv"))
        .arg("--out")
        .arg(tmp.path());
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("The correlation between mouse weight and the average tumor volume is 1.00"));
    assert!(tmp.path().join("weight_vs_volume.svg").exists());
}

#[test]
fn validate_reports_counts() {
    let mut cmd = Command::cargo_bin("kira-tumorstudy").unwrap();
    cmd.args(["validate", "--metadata"])
        .arg(fixture("Mouse_metadata.csv"))
        .arg("--results")
        .arg(fixture("Study_results.csv"));
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("joined: 17 rows, duplicates dropped: 1, kept: 16"));
    assert!(stdout.contains("z9"));
}

#[test]
fn missing_file_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-tumorstudy").unwrap();
    cmd.args(["validate", "--metadata"])
        .arg(tmp.path().join("nope.csv"))
        .arg("--results")
        .arg(fixture("Study_results.csv"));
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input file not found"));
}

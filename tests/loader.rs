use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use kira_tumorstudy::StudyError;
use kira_tumorstudy::io::metadata::read_metadata;
use kira_tumorstudy::io::results::read_results;
use kira_tumorstudy::io::detect_delimiter;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn reads_fixture_tables() {
    let subjects = read_metadata(&fixture("Mouse_metadata.csv")).unwrap();
    assert_eq!(subjects.len(), 8);
    assert_eq!(subjects[0].mouse_id, "a1");
    assert_eq!(subjects[0].drug_regimen.as_deref(), Some("Capomulin"));
    assert_eq!(subjects[0].sex.as_deref(), Some("Female"));
    assert_eq!(subjects[0].age_months, Some(9));
    assert_eq!(subjects[0].weight_g, Some(20.0));

    let observations = read_results(&fixture("Study_results.csv")).unwrap();
    assert_eq!(observations.len(), 17);
    assert_eq!(observations[16].mouse_id, "a1");
    assert_eq!(observations[16].timepoint, 5);
    assert!((observations[16].tumor_volume - 41.0).abs() < 1e-12);
}

#[test]
fn missing_regimen_column_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("meta.csv");
    fs::write(&path, "Mouse ID,Sex,Weight (g)\na1,Female,20\n").unwrap();

    let err = read_metadata(&path).unwrap_err();
    assert!(err.is_parse());
    match err {
        StudyError::MissingColumn { column, .. } => assert_eq!(column, "Drug Regimen"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nonexistent_path_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = read_results(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, StudyError::NotFound { .. }));
}

#[test]
fn bad_number_reports_line_and_column() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("results.csv");
    fs::write(
        &path,
        "Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites\na1,0,45.0,0\na1,5,big,0\n",
    )
    .unwrap();

    match read_results(&path).unwrap_err() {
        StudyError::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Tumor Volume (mm3)");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_row_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("results.csv");
    fs::write(
        &path,
        "Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites\na1,0,45.0\n",
    )
    .unwrap();
    assert!(read_results(&path).unwrap_err().is_parse());
}

#[test]
fn empty_metadata_attributes_are_missing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("meta.csv");
    fs::write(
        &path,
        "Mouse ID,Drug Regimen,Sex,Weight (g)\na1,,Female,\n",
    )
    .unwrap();

    let subjects = read_metadata(&path).unwrap();
    assert_eq!(subjects[0].drug_regimen, None);
    assert_eq!(subjects[0].weight_g, None);
    assert_eq!(subjects[0].age_months, None);
}

#[test]
fn tsv_and_gzip_inputs() {
    assert_eq!(detect_delimiter(Path::new("x.tsv")), b'\t');
    assert_eq!(detect_delimiter(Path::new("x.TSV.gz")), b'\t');
    assert_eq!(detect_delimiter(Path::new("x.csv.gz")), b',');

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("results.tsv.gz");
    let file = fs::File::create(&path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(
        b"Mouse ID\tTimepoint\tTumor Volume (mm3)\tMetastatic Sites\nq1\t10\t51.5\t2\n",
    )
    .unwrap();
    enc.finish().unwrap();

    let observations = read_results(&path).unwrap();
    assert_eq!(observations.len(), 1);
    assert_eq!(observations[0].timepoint, 10);
    assert_eq!(observations[0].metastatic_sites, 2);
}

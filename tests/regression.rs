use std::path::{Path, PathBuf};

use kira_tumorstudy::StudyError;
use kira_tumorstudy::analysis::weight_vs_volume;
use kira_tumorstudy::io::metadata::read_metadata;
use kira_tumorstudy::io::results::read_results;
use kira_tumorstudy::io::summary::correlation_sentence;
use kira_tumorstudy::math::regression::{linregress, pearson};
use kira_tumorstudy::study::StudyData;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn two_points_are_perfectly_correlated() {
    let x = [20.0, 22.0];
    let y = [40.0, 44.0];
    let r = pearson(&x, &y).unwrap();
    assert_eq!(format!("{:.2}", r), "1.00");

    let fit = linregress(&x, &y).unwrap();
    assert!(fit.slope > 0.0);
    assert!((fit.slope - 2.0).abs() < 1e-12);
    assert!(fit.intercept.abs() < 1e-9);
    assert_eq!(fit.p_value, 0.0);
    assert_eq!(fit.slope_stderr, 0.0);
}

#[test]
fn linregress_matches_reference_values() {
    let fit = linregress(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]).unwrap();
    assert!((fit.slope - 0.6).abs() < 1e-12);
    assert!((fit.intercept - 2.2).abs() < 1e-12);
    assert!((fit.r_value - 0.7745966692414833).abs() < 1e-12);
    assert!((fit.p_value - 0.12402706265755459).abs() < 1e-6);
    assert!((fit.slope_stderr - 0.28284271247461906).abs() < 1e-9);
    assert!((fit.intercept_stderr - 0.9380831519646861).abs() < 1e-9);
}

#[test]
fn fewer_than_two_points_is_insufficient() {
    let err = pearson(&[20.0], &[40.0]).unwrap_err();
    assert!(matches!(err, StudyError::InsufficientData { needed: 2, got: 1, .. }));
}

#[test]
fn constant_weights_are_insufficient() {
    let err = linregress(&[20.0, 20.0, 20.0], &[40.0, 41.0, 42.0]).unwrap_err();
    assert!(matches!(err, StudyError::InsufficientData { .. }));
}

#[test]
fn capomulin_weight_vs_volume() {
    let subjects = read_metadata(&fixture("Mouse_metadata.csv")).unwrap();
    let observations = read_results(&fixture("Study_results.csv")).unwrap();
    let study = StudyData::new(&subjects, &observations);

    let wv = weight_vs_volume(&study, "Capomulin").unwrap();
    let ids: Vec<&str> = wv.subjects.iter().map(|s| s.mouse_id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
    assert!((wv.subjects[0].avg_tumor_volume - 43.0).abs() < 1e-12);
    assert!((wv.correlation - 0.9981491375112745).abs() < 1e-9);
    assert!((wv.fit.slope - 0.8728070175438601).abs() < 1e-9);
    assert!((wv.fit.intercept - 25.451754385964907).abs() < 1e-9);
    assert!((wv.mean_subject_volume - 44.94444444444445).abs() < 1e-9);
    assert_eq!(
        correlation_sentence(wv.correlation),
        "The correlation between mouse weight and the average tumor volume is 1.00"
    );

    // One Ceftamin mouse is not enough for a fit.
    let err = weight_vs_volume(&study, "Ceftamin").unwrap_err();
    assert!(matches!(err, StudyError::InsufficientData { got: 1, .. }));
}

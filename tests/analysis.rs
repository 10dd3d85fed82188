use std::path::{Path, PathBuf};

use kira_tumorstudy::analysis::{
    BoxStats, FINAL_VOLUME_REGIMENS, drug_summary, final_tumor_volume, final_volume_boxes,
    regimen_counts, sex_counts,
};
use kira_tumorstudy::io::metadata::read_metadata;
use kira_tumorstudy::io::results::read_results;
use kira_tumorstudy::study::StudyData;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_study() -> StudyData {
    let subjects = read_metadata(&fixture("Mouse_metadata.csv")).unwrap();
    let observations = read_results(&fixture("Study_results.csv")).unwrap();
    StudyData::new(&subjects, &observations)
}

#[test]
fn merged_fixture_shape() {
    let study = fixture_study();
    assert_eq!(study.rows().len(), 16);
    assert_eq!(study.stats().duplicates_dropped, 1);
    assert_eq!(study.stats().unmatched_subjects, vec!["z9".to_string()]);
    assert_eq!(study.subject_count(), 9);
}

#[test]
fn summary_per_regimen() {
    let study = fixture_study();
    let rows = drug_summary(&study);
    let names: Vec<&str> = rows.iter().map(|r| r.drug_regimen.as_str()).collect();
    assert_eq!(
        names,
        vec!["Capomulin", "Ceftamin", "Infubinol", "Placebo", "Ramicane"]
    );

    let capo = &rows[0];
    assert_eq!(capo.count, 7);
    assert!((capo.mean - 45.285714285714285).abs() < 1e-9);
    assert!((capo.median - 45.0).abs() < 1e-12);
    assert!((capo.variance - 7.571428571428571).abs() < 1e-9);

    let ceft = &rows[1];
    assert_eq!(ceft.count, 1);
    assert_eq!(ceft.variance, 0.0);
    assert_eq!(ceft.std_dev, 0.0);
    assert_eq!(ceft.std_err, 0.0);

    let infu = &rows[2];
    assert!((infu.variance - 4.5).abs() < 1e-12);
    assert!((infu.std_err - 1.5).abs() < 1e-12);
}

#[test]
fn aggregation_is_repeatable() {
    let study = fixture_study();
    assert_eq!(drug_summary(&study), drug_summary(&study));
    assert_eq!(regimen_counts(&study), regimen_counts(&study));
    assert_eq!(
        final_tumor_volume(&study, &FINAL_VOLUME_REGIMENS),
        final_tumor_volume(&study, &FINAL_VOLUME_REGIMENS)
    );
}

#[test]
fn counts_are_ordered_by_frequency() {
    let study = fixture_study();
    let counts = regimen_counts(&study);
    let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(
        pairs,
        vec![
            ("Capomulin", 7),
            ("Ramicane", 3),
            ("Infubinol", 2),
            ("Placebo", 2),
            ("Ceftamin", 1),
        ]
    );

    let sexes = sex_counts(&study);
    assert_eq!(sexes[0].label, "Female");
    assert_eq!(sexes[0].count, 11);
    assert_eq!(sexes[1].count, 4);
    assert!((sexes[0].fraction_of(15) - 11.0 / 15.0).abs() < 1e-12);
}

#[test]
fn final_volume_respects_allow_list() {
    let study = fixture_study();
    let rows = final_tumor_volume(&study, &FINAL_VOLUME_REGIMENS);
    assert!(
        rows.iter()
            .all(|r| FINAL_VOLUME_REGIMENS.contains(&r.drug_regimen.as_str()))
    );

    let ids: Vec<&str> = rows.iter().map(|r| r.mouse_id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3", "b1", "b2", "c1", "d1"]);

    // a1's duplicated last timepoint resolves to the later record.
    assert!((rows[0].tumor_volume - 41.0).abs() < 1e-12);
    assert_eq!(rows[2].timepoint, 10);
    // d1 has a single observation.
    assert!((rows[6].tumor_volume - 45.0).abs() < 1e-12);
}

#[test]
fn boxes_follow_display_order() {
    let study = fixture_study();
    let boxes = final_volume_boxes(&study);
    let names: Vec<&str> = boxes.iter().map(|b| b.drug_regimen.as_str()).collect();
    assert_eq!(names, FINAL_VOLUME_REGIMENS.to_vec());
    assert_eq!(boxes[0].volumes.len(), 3);
    assert_eq!(boxes[1].volumes.len(), 2);
    assert!(boxes.iter().all(|b| b.stats.is_some()));
}

#[test]
fn box_stats_flag_outliers() {
    let s = BoxStats::from_values(&[40.0, 44.0, 47.0, 50.0, 60.0, 100.0]).unwrap();
    assert!((s.q1 - 44.75).abs() < 1e-12);
    assert!((s.median - 48.5).abs() < 1e-12);
    assert!((s.q3 - 57.5).abs() < 1e-12);
    assert_eq!(s.whisker_low, 40.0);
    assert_eq!(s.whisker_high, 60.0);
    assert_eq!(s.outliers, vec![100.0]);
    assert!(BoxStats::from_values(&[]).is_none());
}

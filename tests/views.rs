use std::path::{Path, PathBuf};

use kira_tumorstudy::io::metadata::read_metadata;
use kira_tumorstudy::io::results::read_results;
use kira_tumorstudy::io::summary::{format_view, format_view_list};
use kira_tumorstudy::study::StudyData;
use kira_tumorstudy::views::{View, ViewOptions, ViewOutput, render};

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
fn dispatch_table_matches_enum() {
    for view in View::ALL {
        assert_eq!(view.entry().view, view);
        assert_eq!(View::from_key(view.key()), Some(view));
    }
    assert_eq!(View::from_key("nope"), None);
}

#[test]
fn titles_match_menu() {
    let opts = ViewOptions::default();
    let titles: Vec<String> = View::ALL.iter().map(|v| v.title(&opts)).collect();
    assert_eq!(
        titles,
        vec![
            "Drug Summary Statistics",
            "Number of Mice Tested per Drug Regimen",
            "Distribution of Mice Sex",
            "Final Tumor Volume across Four Treatment Regimens",
            "Mouse Weight vs. Average Tumor Volume for Capomulin Treatment Regimen",
        ]
    );
    let listing = format_view_list(&opts);
    assert_eq!(listing.lines().count(), 5);
    assert!(listing.starts_with("summary\tDrug Summary Statistics"));
}

#[test]
fn every_view_renders_on_fixture() {
    let study = fixture_study();
    let opts = ViewOptions::default();
    for view in View::ALL {
        let rendered = render(view, &study, &opts).unwrap();
        let text = format_view(&rendered).unwrap();
        assert!(text.starts_with(&rendered.title));
    }
}

#[test]
fn view_outputs_carry_expected_payloads() {
    let study = fixture_study();
    let opts = ViewOptions::default();

    match View::FinalVolume.compute(&study, &opts).unwrap() {
        ViewOutput::FinalVolume { rows, boxes } => {
            assert_eq!(rows.len(), 7);
            assert_eq!(boxes.len(), 4);
        }
        other => panic!("unexpected output {other:?}"),
    }

    let rendered = render(View::WeightVsVolume, &study, &opts).unwrap();
    let text = format_view(&rendered).unwrap();
    assert!(text.contains("The correlation between mouse weight and the average tumor volume is 1.00"));

    let rendered = render(View::SexDistribution, &study, &opts).unwrap();
    let text = format_view(&rendered).unwrap();
    assert!(text.contains("Female\t11\t73.3%"));
}

#[test]
fn regression_regimen_is_configurable() {
    let study = fixture_study();
    let opts = ViewOptions {
        regression_regimen: "Ramicane".to_string(),
    };
    assert_eq!(
        View::WeightVsVolume.title(&opts),
        "Mouse Weight vs. Average Tumor Volume for Ramicane Treatment Regimen"
    );
    // b1 and b2 both weigh in; two subjects are enough.
    let rendered = render(View::WeightVsVolume, &study, &opts).unwrap();
    assert!(matches!(rendered.output, ViewOutput::WeightVsVolume(_)));
}

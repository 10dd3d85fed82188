//! The five dashboard views and their dispatch table.

use serde::Serialize;

use crate::analysis::{
    self, CategoryCount, FinalObservationRow, RegimenBox, SummaryRow, WeightVolume,
};
use crate::error::StudyResult;
use crate::study::StudyData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Summary,
    MicePerRegimen,
    SexDistribution,
    FinalVolume,
    WeightVsVolume,
}

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub regression_regimen: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            regression_regimen: analysis::DEFAULT_REGRESSION_REGIMEN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewOutput {
    Summary(Vec<SummaryRow>),
    MicePerRegimen(Vec<CategoryCount>),
    SexDistribution(Vec<CategoryCount>),
    FinalVolume {
        rows: Vec<FinalObservationRow>,
        boxes: Vec<RegimenBox>,
    },
    WeightVsVolume(WeightVolume),
}

type ComputeFn = fn(&StudyData, &ViewOptions) -> StudyResult<ViewOutput>;

pub struct ViewEntry {
    pub view: View,
    pub key: &'static str,
    pub title: &'static str,
    /// File stem for the chart, if the view draws one.
    pub chart: Option<&'static str>,
    compute: ComputeFn,
}

/// Indexed by `View as usize`; the order is the menu order.
static VIEW_TABLE: [ViewEntry; 5] = [
    ViewEntry {
        view: View::Summary,
        key: "summary",
        title: "Drug Summary Statistics",
        chart: None,
        compute: |study, _| Ok(ViewOutput::Summary(analysis::drug_summary(study))),
    },
    ViewEntry {
        view: View::MicePerRegimen,
        key: "mice-per-regimen",
        title: "Number of Mice Tested per Drug Regimen",
        chart: Some("mice_per_regimen"),
        compute: |study, _| Ok(ViewOutput::MicePerRegimen(analysis::regimen_counts(study))),
    },
    ViewEntry {
        view: View::SexDistribution,
        key: "sex-distribution",
        title: "Distribution of Mice Sex",
        chart: Some("sex_distribution"),
        compute: |study, _| Ok(ViewOutput::SexDistribution(analysis::sex_counts(study))),
    },
    ViewEntry {
        view: View::FinalVolume,
        key: "final-volume",
        title: "Final Tumor Volume across Four Treatment Regimens",
        chart: Some("final_volume"),
        compute: |study, _| {
            Ok(ViewOutput::FinalVolume {
                rows: analysis::final_tumor_volume(study, &analysis::FINAL_VOLUME_REGIMENS),
                boxes: analysis::final_volume_boxes(study),
            })
        },
    },
    ViewEntry {
        view: View::WeightVsVolume,
        key: "weight-vs-volume",
        title: "Mouse Weight vs. Average Tumor Volume for Capomulin Treatment Regimen",
        chart: Some("weight_vs_volume"),
        compute: |study, opts| {
            analysis::weight_vs_volume(study, &opts.regression_regimen)
                .map(ViewOutput::WeightVsVolume)
        },
    },
];

impl View {
    pub const ALL: [View; 5] = [
        View::Summary,
        View::MicePerRegimen,
        View::SexDistribution,
        View::FinalVolume,
        View::WeightVsVolume,
    ];

    pub fn entry(self) -> &'static ViewEntry {
        &VIEW_TABLE[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.entry().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        VIEW_TABLE.iter().find(|e| e.key == key).map(|e| e.view)
    }

    /// Menu title; the regression title names the regimen actually used.
    pub fn title(self, opts: &ViewOptions) -> String {
        match self {
            View::WeightVsVolume => format!(
                "Mouse Weight vs. Average Tumor Volume for {} Treatment Regimen",
                opts.regression_regimen
            ),
            _ => self.entry().title.to_string(),
        }
    }

    pub fn compute(self, study: &StudyData, opts: &ViewOptions) -> StudyResult<ViewOutput> {
        (self.entry().compute)(study, opts)
    }
}

/// A computed view ready for the writers.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub view: View,
    pub title: String,
    pub output: ViewOutput,
}

pub fn render(view: View, study: &StudyData, opts: &ViewOptions) -> StudyResult<RenderedView> {
    Ok(RenderedView {
        view,
        title: view.title(opts),
        output: view.compute(study, opts)?,
    })
}

use std::path::PathBuf;

use anyhow::Context;

use crate::model::{Observation, SubjectRecord};
use crate::schema::v1::TumorStudyV1;
use crate::study::StudyData;
use crate::views::{RenderedView, View, ViewOptions};

pub const DEFAULT_METADATA_PATH: &str = "./Resources/Mouse_metadata.csv";
pub const DEFAULT_RESULTS_PATH: &str = "./Resources/Study_results.csv";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
}

impl OutputPaths {
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}.svg", stem))
    }

    pub fn tsv_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}.tsv", stem))
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub metadata_path: PathBuf,
    pub results_path: PathBuf,
    pub views: Vec<View>,
    pub options: ViewOptions,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_charts: bool,
    pub subjects: Vec<SubjectRecord>,
    pub observations: Vec<Observation>,
    pub study: Option<StudyData>,
    pub rendered: Vec<RenderedView>,
    pub charts: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: TumorStudyV1,
}

impl Ctx {
    pub fn new(
        metadata_path: PathBuf,
        results_path: PathBuf,
        out_dir: PathBuf,
        views: Vec<View>,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("tumorstudy.json");
        Self {
            metadata_path,
            results_path,
            views,
            options: ViewOptions::default(),
            write_json: false,
            write_tsv: false,
            write_charts: true,
            subjects: Vec::new(),
            observations: Vec::new(),
            study: None,
            rendered: Vec::new(),
            charts: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths { out_dir, json_path },
            report: TumorStudyV1::empty(tool_version),
        }
    }

    /// Whether any stage needs the output directory.
    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv || self.write_charts
    }

    pub fn study(&self) -> anyhow::Result<&StudyData> {
        self.study.as_ref().context("study data not merged")
    }
}

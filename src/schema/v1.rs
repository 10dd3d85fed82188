use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub metadata_path: String,
    pub results_path: String,
    pub metadata_rows: u64,
    pub result_rows: u64,
    pub joined_rows: u64,
    pub duplicates_dropped: u64,
    pub kept_rows: u64,
    pub subjects: u64,
    pub unmatched_subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Drug Regimen")]
    pub drug_regimen: String,
    pub n: u64,
    #[serde(rename = "Mean Tumor Volume")]
    pub mean: f64,
    #[serde(rename = "Median Tumor Volume")]
    pub median: f64,
    #[serde(rename = "Tumor Volume Variance")]
    pub variance: f64,
    #[serde(rename = "Tumor Volume Std. Dev.")]
    pub std_dev: f64,
    #[serde(rename = "Tumor Volume Std. Err.")]
    pub std_err: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: u64,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalVolumeRow {
    pub mouse_id: String,
    pub drug_regimen: String,
    pub timepoint: u32,
    pub tumor_volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxSummary {
    pub drug_regimen: String,
    pub n: u64,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub whisker_low: Option<f64>,
    pub whisker_high: Option<f64>,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalVolume {
    pub rows: Vec<FinalVolumeRow>,
    pub boxes: Vec<BoxSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPoint {
    pub mouse_id: String,
    pub avg_weight_g: f64,
    pub avg_tumor_volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVolume {
    pub drug_regimen: String,
    pub correlation: f64,
    pub slope: f64,
    pub intercept: f64,
    pub r_value: f64,
    pub p_value: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
    pub mean_subject_volume: f64,
    pub subjects: Vec<SubjectPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Views {
    pub summary: Option<Vec<SummaryRow>>,
    pub mice_per_regimen: Option<Vec<CountEntry>>,
    pub sex_distribution: Option<Vec<CountEntry>>,
    pub final_volume: Option<FinalVolume>,
    pub weight_vs_volume: Option<WeightVolume>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TumorStudyV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub views: Views,
    pub charts: Vec<String>,
    pub warnings: Vec<String>,
}

impl TumorStudyV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "kira-tumorstudy".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                metadata_path: String::new(),
                results_path: String::new(),
                metadata_rows: 0,
                result_rows: 0,
                joined_rows: 0,
                duplicates_dropped: 0,
                kept_rows: 0,
                subjects: 0,
                unmatched_subjects: Vec::new(),
            },
            views: Views::default(),
            charts: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::math::stats;
use crate::study::StudyData;

/// Tumor volume statistics for one drug regimen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub drug_regimen: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub std_err: f64,
}

/// One row per regimen, sorted by regimen name. Rows without a regimen are
/// not grouped.
pub fn drug_summary(study: &StudyData) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in study.rows() {
        if let Some(regimen) = row.drug_regimen.as_deref() {
            groups.entry(regimen).or_default().push(row.tumor_volume);
        }
    }

    groups
        .into_iter()
        .map(|(regimen, mut volumes)| SummaryRow {
            drug_regimen: regimen.to_string(),
            count: volumes.len(),
            mean: stats::mean(&volumes),
            variance: stats::sample_variance(&volumes),
            std_dev: stats::sample_std(&volumes),
            std_err: stats::standard_error(&volumes),
            median: stats::median(&mut volumes),
        })
        .collect()
}

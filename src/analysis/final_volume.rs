use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::FINAL_VOLUME_REGIMENS;
use crate::math::stats;
use crate::study::StudyData;

/// Tumor volume of one mouse at its last recorded timepoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalObservationRow {
    pub mouse_id: String,
    pub drug_regimen: String,
    pub timepoint: u32,
    pub tumor_volume: f64,
}

/// Last-timepoint row per mouse, restricted to `regimens`, sorted by mouse id.
///
/// The last timepoint is taken over all of a mouse's rows before the regimen
/// filter, so a mouse outside the list is dropped entirely.
pub fn final_tumor_volume(study: &StudyData, regimens: &[&str]) -> Vec<FinalObservationRow> {
    let mut last: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, row) in study.rows().iter().enumerate() {
        let slot = last.entry(row.mouse_id.as_str()).or_insert(i);
        if row.timepoint > study.rows()[*slot].timepoint {
            *slot = i;
        }
    }

    last.into_values()
        .filter_map(|i| {
            let row = &study.rows()[i];
            let regimen = row.drug_regimen.as_deref()?;
            regimens.contains(&regimen).then(|| FinalObservationRow {
                mouse_id: row.mouse_id.clone(),
                drug_regimen: regimen.to_string(),
                timepoint: row.timepoint,
                tumor_volume: row.tumor_volume,
            })
        })
        .collect()
}

/// Box-and-whisker geometry; whiskers reach the furthest point within
/// 1.5 IQR of the box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub n: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        let q1 = stats::quantile(&mut sorted, 0.25);
        let median = stats::quantile(&mut sorted, 0.5);
        let q3 = stats::quantile(&mut sorted, 0.75);
        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let inside = sorted
            .iter()
            .copied()
            .filter(|v| *v >= lower_fence && *v <= upper_fence);
        let whisker_low = inside.clone().fold(f64::INFINITY, f64::min).min(q1);
        let whisker_high = inside.fold(f64::NEG_INFINITY, f64::max).max(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < lower_fence || *v > upper_fence)
            .collect();

        Some(Self {
            n: sorted.len(),
            q1,
            median,
            q3,
            iqr,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimenBox {
    pub drug_regimen: String,
    pub volumes: Vec<f64>,
    /// `None` when no mouse on this regimen made it into the subset.
    pub stats: Option<BoxStats>,
}

/// Final volumes grouped in the fixed display order of
/// [`FINAL_VOLUME_REGIMENS`].
pub fn final_volume_boxes(study: &StudyData) -> Vec<RegimenBox> {
    let rows = final_tumor_volume(study, &FINAL_VOLUME_REGIMENS);
    FINAL_VOLUME_REGIMENS
        .iter()
        .map(|regimen| {
            let volumes: Vec<f64> = rows
                .iter()
                .filter(|r| r.drug_regimen == *regimen)
                .map(|r| r.tumor_volume)
                .collect();
            RegimenBox {
                drug_regimen: regimen.to_string(),
                stats: BoxStats::from_values(&volumes),
                volumes,
            }
        })
        .collect()
}

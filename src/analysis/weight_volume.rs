use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{StudyError, StudyResult};
use crate::math::regression::{LinearFit, linregress, pearson};
use crate::math::stats;
use crate::study::StudyData;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAverage {
    pub mouse_id: String,
    pub avg_weight_g: f64,
    pub avg_tumor_volume: f64,
}

/// Mouse weight against average tumor volume within one regimen.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVolume {
    pub drug_regimen: String,
    pub subjects: Vec<SubjectAverage>,
    pub correlation: f64,
    pub fit: LinearFit,
    /// Mean over mice of each mouse's average tumor volume.
    pub mean_subject_volume: f64,
}

impl WeightVolume {
    pub fn weights(&self) -> Vec<f64> {
        self.subjects.iter().map(|s| s.avg_weight_g).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.subjects.iter().map(|s| s.avg_tumor_volume).collect()
    }
}

/// Per-mouse averages for `regimen`, sorted by mouse id. Rows without a
/// weight are skipped for the weight average only.
pub fn subject_averages(study: &StudyData, regimen: &str) -> Vec<SubjectAverage> {
    let mut by_mouse: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for row in study.rows_for_regimen(regimen) {
        let (weights, volumes) = by_mouse.entry(row.mouse_id.as_str()).or_default();
        if let Some(w) = row.weight_g {
            weights.push(w);
        }
        volumes.push(row.tumor_volume);
    }

    by_mouse
        .into_iter()
        .filter(|(_, (weights, _))| !weights.is_empty())
        .map(|(mouse_id, (weights, volumes))| SubjectAverage {
            mouse_id: mouse_id.to_string(),
            avg_weight_g: stats::mean(&weights),
            avg_tumor_volume: stats::mean(&volumes),
        })
        .collect()
}

pub fn weight_vs_volume(study: &StudyData, regimen: &str) -> StudyResult<WeightVolume> {
    let subjects = subject_averages(study, regimen);
    if subjects.len() < 2 {
        return Err(StudyError::insufficient(
            format!("weight/volume regression on '{}' mice", regimen),
            2,
            subjects.len(),
        ));
    }
    let x: Vec<f64> = subjects.iter().map(|s| s.avg_weight_g).collect();
    let y: Vec<f64> = subjects.iter().map(|s| s.avg_tumor_volume).collect();

    let correlation = pearson(&x, &y)?;
    let fit = linregress(&x, &y)?;
    debug!(
        regimen,
        subjects = subjects.len(),
        r = correlation,
        slope = fit.slope,
        "weight_volume_fit"
    );

    Ok(WeightVolume {
        drug_regimen: regimen.to_string(),
        mean_subject_volume: stats::mean(&y),
        subjects,
        correlation,
        fit,
    })
}

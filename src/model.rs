//! Row types for the two input tables and the joined study table.

use serde::{Deserialize, Serialize};

/// One row of the mouse metadata file.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRecord {
    pub mouse_id: String,
    pub drug_regimen: Option<String>,
    pub sex: Option<String>,
    pub age_months: Option<u32>,
    pub weight_g: Option<f64>,
}

/// One row of the study results file.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub mouse_id: String,
    pub timepoint: u32,
    pub tumor_volume: f64,
    pub metastatic_sites: u32,
}

/// An observation with the attributes of its subject attached.
///
/// Subject fields are `None` when the observation had no metadata match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedObservation {
    pub mouse_id: String,
    pub timepoint: u32,
    pub tumor_volume: f64,
    pub metastatic_sites: u32,
    pub drug_regimen: Option<String>,
    pub sex: Option<String>,
    pub age_months: Option<u32>,
    pub weight_g: Option<f64>,
}

impl JoinedObservation {
    pub fn new(obs: &Observation, subject: Option<&SubjectRecord>) -> Self {
        Self {
            mouse_id: obs.mouse_id.clone(),
            timepoint: obs.timepoint,
            tumor_volume: obs.tumor_volume,
            metastatic_sites: obs.metastatic_sites,
            drug_regimen: subject.and_then(|s| s.drug_regimen.clone()),
            sex: subject.and_then(|s| s.sex.clone()),
            age_months: subject.and_then(|s| s.age_months),
            weight_g: subject.and_then(|s| s.weight_g),
        }
    }

    pub fn has_regimen(&self, regimen: &str) -> bool {
        self.drug_regimen.as_deref() == Some(regimen)
    }
}

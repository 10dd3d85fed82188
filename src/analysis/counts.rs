use std::collections::HashMap;

use serde::Serialize;

use crate::study::StudyData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn fraction_of(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Counts by descending frequency, ties broken by label.
fn value_counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values.flatten() {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Observations (mouse/timepoint pairs) per drug regimen.
pub fn regimen_counts(study: &StudyData) -> Vec<CategoryCount> {
    value_counts(study.rows().iter().map(|r| r.drug_regimen.as_deref()))
}

/// Observations per recorded sex.
pub fn sex_counts(study: &StudyData) -> Vec<CategoryCount> {
    value_counts(study.rows().iter().map(|r| r.sex.as_deref()))
}

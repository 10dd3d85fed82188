//! The joined, deduplicated study table every view is computed from.

mod merge;

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::model::{JoinedObservation, Observation, SubjectRecord};

pub use merge::{MergeStats, dedup_keep_last, left_join};

/// Immutable snapshot of the merged study, built once per run.
#[derive(Debug, Clone)]
pub struct StudyData {
    rows: Vec<JoinedObservation>,
    stats: MergeStats,
}

impl StudyData {
    pub fn new(subjects: &[SubjectRecord], observations: &[Observation]) -> Self {
        let (joined, mut stats) = left_join(observations, subjects);
        let (rows, dropped) = dedup_keep_last(joined);
        stats.duplicates_dropped = dropped;

        for w in &stats.warnings {
            warn!(warning = %w, "metadata");
        }
        if !stats.unmatched_subjects.is_empty() {
            warn!(
                count = stats.unmatched_subjects.len(),
                "observations without metadata kept with empty attributes"
            );
        }
        info!(
            observations = observations.len(),
            joined = stats.joined_rows,
            kept = rows.len(),
            duplicates_dropped = dropped,
            "study_merged"
        );
        Self { rows, stats }
    }

    pub fn rows(&self) -> &[JoinedObservation] {
        &self.rows
    }

    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    pub fn subject_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.mouse_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn rows_for_regimen<'a>(
        &'a self,
        regimen: &'a str,
    ) -> impl Iterator<Item = &'a JoinedObservation> + 'a {
        self.rows.iter().filter(move |r| r.has_regimen(regimen))
    }
}

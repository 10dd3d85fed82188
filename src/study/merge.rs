use std::collections::{BTreeSet, HashMap};

use crate::model::{JoinedObservation, Observation, SubjectRecord};

#[derive(Debug, Clone, Default)]
pub struct MergeStats {
    pub joined_rows: usize,
    pub duplicates_dropped: usize,
    /// Sorted ids present in results with no metadata row.
    pub unmatched_subjects: Vec<String>,
    pub warnings: Vec<String>,
}

/// Left-joins observations to subjects on mouse id.
///
/// Output follows observation order. A mouse id repeated in the metadata
/// produces one joined row per metadata match.
pub fn left_join(
    observations: &[Observation],
    subjects: &[SubjectRecord],
) -> (Vec<JoinedObservation>, MergeStats) {
    let mut by_id: HashMap<&str, Vec<&SubjectRecord>> = HashMap::new();
    let mut stats = MergeStats::default();

    for (i, subject) in subjects.iter().enumerate() {
        let entry = by_id.entry(subject.mouse_id.as_str()).or_default();
        if !entry.is_empty() {
            stats.warnings.push(format!(
                "duplicate mouse id '{}' in metadata at row {}",
                subject.mouse_id,
                i + 1
            ));
        }
        entry.push(subject);
    }

    let mut unmatched = BTreeSet::new();
    let mut joined = Vec::with_capacity(observations.len());
    for obs in observations {
        match by_id.get(obs.mouse_id.as_str()) {
            Some(matches) => {
                for &subject in matches {
                    joined.push(JoinedObservation::new(obs, Some(subject)));
                }
            }
            None => {
                unmatched.insert(obs.mouse_id.clone());
                joined.push(JoinedObservation::new(obs, None));
            }
        }
    }

    stats.joined_rows = joined.len();
    stats.unmatched_subjects = unmatched.into_iter().collect();
    (joined, stats)
}

/// Keeps the last row for each (mouse id, timepoint), preserving the relative
/// order of the survivors. Returns the number of rows removed.
pub fn dedup_keep_last(rows: Vec<JoinedObservation>) -> (Vec<JoinedObservation>, usize) {
    let keep: Vec<bool> = {
        let mut last: HashMap<(&str, u32), usize> = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            last.insert((row.mouse_id.as_str(), row.timepoint), i);
        }
        rows.iter()
            .enumerate()
            .map(|(i, row)| last.get(&(row.mouse_id.as_str(), row.timepoint)) == Some(&i))
            .collect()
    };

    let before = rows.len();
    let out: Vec<JoinedObservation> = rows
        .into_iter()
        .zip(keep)
        .filter_map(|(row, k)| k.then_some(row))
        .collect();
    let dropped = before - out.len();
    (out, dropped)
}

//! Derived tables over [`StudyData`](crate::study::StudyData).
//!
//! Every function here is a pure read of the joined table and returns full
//! precision numbers; rounding belongs to the writers.

pub mod counts;
pub mod final_volume;
pub mod summary;
pub mod weight_volume;

/// Regimens compared in the final-volume view, in display order.
pub const FINAL_VOLUME_REGIMENS: [&str; 4] = ["Capomulin", "Ramicane", "Infubinol", "Ceftamin"];

pub const DEFAULT_REGRESSION_REGIMEN: &str = "Capomulin";

pub use counts::{CategoryCount, regimen_counts, sex_counts};
pub use final_volume::{BoxStats, FinalObservationRow, RegimenBox, final_tumor_volume, final_volume_boxes};
pub use summary::{SummaryRow, drug_summary};
pub use weight_volume::{SubjectAverage, WeightVolume, weight_vs_volume};

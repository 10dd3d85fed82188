pub mod regression;
pub mod stats;

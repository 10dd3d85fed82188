use std::path::Path;

use tracing::debug;

use crate::error::StudyResult;
use crate::io::{Columns, Row, csv_error, open_table};
use crate::model::Observation;

pub const COL_MOUSE_ID: &str = "Mouse ID";
pub const COL_TIMEPOINT: &str = "Timepoint";
pub const COL_TUMOR_VOLUME: &str = "Tumor Volume (mm3)";
pub const COL_METASTATIC_SITES: &str = "Metastatic Sites";

/// Reads the per-timepoint study results table. Every column is mandatory.
pub fn read_results(path: &Path) -> StudyResult<Vec<Observation>> {
    let source_name = path.display().to_string();
    let mut rdr = open_table(path)?;
    let headers = rdr
        .headers()
        .map_err(|e| csv_error(&source_name, e))?
        .clone();
    let cols = Columns::from_headers(&source_name, &headers);
    let id_idx = cols.required(COL_MOUSE_ID)?;
    let tp_idx = cols.required(COL_TIMEPOINT)?;
    let vol_idx = cols.required(COL_TUMOR_VOLUME)?;
    let sites_idx = cols.required(COL_METASTATIC_SITES)?;

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| csv_error(&source_name, e))?;
        let row = Row {
            source_name: &source_name,
            line: record.position().map_or(i + 2, |p| p.line() as usize),
            record: &record,
        };
        out.push(Observation {
            mouse_id: row.text(id_idx, COL_MOUSE_ID)?,
            timepoint: row.count(tp_idx, COL_TIMEPOINT)?,
            tumor_volume: row.float(vol_idx, COL_TUMOR_VOLUME)?,
            metastatic_sites: row.count(sites_idx, COL_METASTATIC_SITES)?,
        });
    }

    debug!(path = %source_name, rows = out.len(), "results_loaded");
    Ok(out)
}

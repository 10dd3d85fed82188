use std::path::Path;

use tracing::debug;

use crate::error::StudyResult;
use crate::io::{Columns, Row, csv_error, open_table};
use crate::model::SubjectRecord;

pub const COL_MOUSE_ID: &str = "Mouse ID";
pub const COL_DRUG_REGIMEN: &str = "Drug Regimen";
pub const COL_SEX: &str = "Sex";
pub const COL_AGE_MONTHS: &str = "Age_months";
pub const COL_WEIGHT: &str = "Weight (g)";

/// Reads the per-mouse metadata table.
///
/// Empty attribute cells become `None`; only the mouse id must be present.
pub fn read_metadata(path: &Path) -> StudyResult<Vec<SubjectRecord>> {
    let source_name = path.display().to_string();
    let mut rdr = open_table(path)?;
    let headers = rdr
        .headers()
        .map_err(|e| csv_error(&source_name, e))?
        .clone();
    let cols = Columns::from_headers(&source_name, &headers);
    let id_idx = cols.required(COL_MOUSE_ID)?;
    let regimen_idx = cols.required(COL_DRUG_REGIMEN)?;
    let sex_idx = cols.required(COL_SEX)?;
    let weight_idx = cols.required(COL_WEIGHT)?;
    let age_idx = cols.optional(COL_AGE_MONTHS);

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| csv_error(&source_name, e))?;
        let row = Row {
            source_name: &source_name,
            line: record.position().map_or(i + 2, |p| p.line() as usize),
            record: &record,
        };
        out.push(SubjectRecord {
            mouse_id: row.text(id_idx, COL_MOUSE_ID)?,
            drug_regimen: row.opt_text(Some(regimen_idx)),
            sex: row.opt_text(Some(sex_idx)),
            age_months: row.opt_count(age_idx, COL_AGE_MONTHS)?,
            weight_g: row.opt_float(Some(weight_idx), COL_WEIGHT)?,
        });
    }

    debug!(path = %source_name, rows = out.len(), "metadata_loaded");
    Ok(out)
}

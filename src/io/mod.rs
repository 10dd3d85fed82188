use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use flate2::read::GzDecoder;

use crate::error::{StudyError, StudyResult};

pub mod json_writer;
pub mod metadata;
pub mod results;
pub mod summary;
pub mod svg;
pub mod tsv_writer;

pub(crate) fn open_maybe_gz(path: &Path) -> StudyResult<Box<dyn Read>> {
    if !path.is_file() {
        return Err(StudyError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| StudyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Tab for `*.tsv` / `*.tsv.gz`, comma otherwise.
pub fn detect_delimiter(path: &Path) -> u8 {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") { b'\t' } else { b',' }
}

pub(crate) fn open_table(path: &Path) -> StudyResult<csv::Reader<Box<dyn Read>>> {
    let reader = open_maybe_gz(path)?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(path))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader))
}

/// Header name to column position, resolved once per file.
pub(crate) struct Columns {
    source_name: String,
    index: HashMap<String, usize>,
}

impl Columns {
    pub(crate) fn from_headers(source_name: &str, headers: &StringRecord) -> Self {
        let mut index = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            // First occurrence wins for repeated header names.
            index.entry(name.to_string()).or_insert(i);
        }
        Self {
            source_name: source_name.to_string(),
            index,
        }
    }

    pub(crate) fn required(&self, column: &str) -> StudyResult<usize> {
        self.index
            .get(column)
            .copied()
            .ok_or_else(|| StudyError::MissingColumn {
                source_name: self.source_name.clone(),
                column: column.to_string(),
            })
    }

    pub(crate) fn optional(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }
}

/// Cursor over one data record that knows where it came from.
pub(crate) struct Row<'a> {
    pub(crate) source_name: &'a str,
    pub(crate) line: usize,
    pub(crate) record: &'a StringRecord,
}

impl Row<'_> {
    fn error(&self, column: &str, message: impl Into<String>) -> StudyError {
        StudyError::Parse {
            source_name: self.source_name.to_string(),
            line: self.line,
            column: column.to_string(),
            message: message.into(),
        }
    }

    fn raw(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or_default()
    }

    pub(crate) fn text(&self, idx: usize, column: &str) -> StudyResult<String> {
        let value = self.raw(idx);
        if value.is_empty() {
            return Err(self.error(column, "empty value"));
        }
        Ok(value.to_string())
    }

    pub(crate) fn opt_text(&self, idx: Option<usize>) -> Option<String> {
        idx.map(|i| self.raw(i))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub(crate) fn float(&self, idx: usize, column: &str) -> StudyResult<f64> {
        let value = self.raw(idx);
        let parsed: f64 = value
            .parse()
            .map_err(|_| self.error(column, format!("expected a number, got '{}'", value)))?;
        if !parsed.is_finite() {
            return Err(self.error(column, format!("non-finite number '{}'", value)));
        }
        Ok(parsed)
    }

    pub(crate) fn opt_float(&self, idx: Option<usize>, column: &str) -> StudyResult<Option<f64>> {
        match idx {
            Some(i) if !self.raw(i).is_empty() => self.float(i, column).map(Some),
            _ => Ok(None),
        }
    }

    pub(crate) fn count(&self, idx: usize, column: &str) -> StudyResult<u32> {
        let value = self.raw(idx);
        value.parse().map_err(|_| {
            self.error(
                column,
                format!("expected a non-negative integer, got '{}'", value),
            )
        })
    }

    pub(crate) fn opt_count(&self, idx: Option<usize>, column: &str) -> StudyResult<Option<u32>> {
        match idx {
            Some(i) if !self.raw(i).is_empty() => self.count(i, column).map(Some),
            _ => Ok(None),
        }
    }
}

pub(crate) fn csv_error(source_name: &str, source: csv::Error) -> StudyError {
    StudyError::Csv {
        source_name: source_name.to_string(),
        source,
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("{source_name}:{line} column '{column}': {message}")]
    Parse {
        source_name: String,
        line: usize,
        column: String,
        message: String,
    },

    #[error("{source_name}: missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("insufficient data for {what}: need at least {needed}, got {got}")]
    InsufficientData {
        what: String,
        needed: usize,
        got: usize,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}: malformed delimited record")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },
}

impl StudyError {
    /// True for the parse family (`Parse`, `MissingColumn`, `Csv`).
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::MissingColumn { .. } | Self::Csv { .. }
        )
    }

    pub(crate) fn insufficient(what: impl Into<String>, needed: usize, got: usize) -> Self {
        Self::InsufficientData {
            what: what.into(),
            needed,
            got,
        }
    }
}

pub type StudyResult<T> = std::result::Result<T, StudyError>;

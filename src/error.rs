use std::path::PathBuf;
use thiserror::Error;

use crate::models::Dataset;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing {dataset} file for {year}: {}", path.display())]
    MissingFile {
        dataset: Dataset,
        year: i32,
        path: PathBuf,
    },

    #[error("Malformed {dataset} file for {year} ({}): required column '{column}' is absent", path.display())]
    MissingColumn {
        dataset: Dataset,
        year: i32,
        path: PathBuf,
        column: String,
    },

    #[error("Malformed {dataset} file for {year} ({}), line {line}: {reason}", path.display())]
    MalformedRecord {
        dataset: Dataset,
        year: i32,
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Failed to move output into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Roster reduction error: {0}")]
    Reduction(String),
}

impl ProcessingError {
    /// True for the missing/malformed input failures that abort a run.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ProcessingError::MissingFile { .. }
                | ProcessingError::MissingColumn { .. }
                | ProcessingError::MalformedRecord { .. }
        )
    }
}

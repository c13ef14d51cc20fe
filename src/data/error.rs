use std::path::PathBuf;

use thiserror::Error;

/// Why a dataset could not be produced from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source path does not resolve to a file. The caller may fall back
    /// to synthetic data.
    #[error("data file '{}' not found", path.display())]
    DataUnavailable { path: PathBuf },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The schema was valid but no row survived cleaning.
    #[error("dataset is empty after dropping incomplete rows")]
    EmptyDataset,

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("failed to read '{}': {source:#}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl LoadError {
    /// Whether the synthetic fallback should be offered for this failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadError::DataUnavailable { .. })
    }
}

/// The source table does not fit the song schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error(
        "data file is missing required columns [{}]; available columns: [{}]",
        missing.join(", "),
        available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("row {row}: year value '{value}' is not an integer")]
    NonIntegerYear { row: usize, value: String },
}

use thiserror::Error;

/// Error type for every fallible operation in gander
#[derive(Error, Debug)]
pub enum Error {
    #[error("ragged input: row {row} has {found} columns, expected {expected}")]
    RaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("input contains no rows")]
    EmptyInput,

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("column '{0}' does not exist")]
    ColumnNotFound(String),

    #[error("series '{0}' is not categorical")]
    NotCategorical(String),

    #[error("series '{0}' is categorical, numeric data is required")]
    NotNumeric(String),

    #[error("inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

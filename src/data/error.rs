use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning the model's output directory into tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read output directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("variable {0} not found in output directory")]
    MissingVariable(String),

    #[error("variable {variable} has no column {column}")]
    MissingColumn { variable: String, column: String },

    #[error("variable {variable}, row {row}: invalid year {value:?}")]
    InvalidYear {
        variable: String,
        row: usize,
        value: String,
    },

    #[error("variable {variable}, row {row}: column {column} is not a number ({value:?})")]
    InvalidNumber {
        variable: String,
        row: usize,
        column: String,
        value: String,
    },
}

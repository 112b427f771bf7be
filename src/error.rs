use std::path::PathBuf;

use thiserror::Error;

/// The trip source for a city could not be read or parsed.
///
/// A single malformed field fails the whole load: silently dropping rows
/// would skew every aggregate computed downstream.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("{path}: missing required column '{column}'")]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    #[error("{path}, row {row}: {message}")]
    Row {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

/// A statistic was requested that is undefined on zero records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no records to compute statistics on")]
pub struct EmptyDatasetError;

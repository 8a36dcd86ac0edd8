//! Error types for the Skyload conversion pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV row-reading errors
//! - [`TransformError`] - field normalization errors
//! - [`WriteError`] - JSON output errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading a delimited input file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open or read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV structure.
    #[error("Invalid CSV format: {0}")]
    Parse(String),

    /// File contains no content at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header row is missing or blank.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors during row normalization.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A numeric field holds non-numeric, non-empty text.
    #[error("Invalid integer for field '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },
}

// =============================================================================
// Writer Errors
// =============================================================================

/// Errors while writing an output document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Destination could not be created or written.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::run`].
/// It wraps all lower-level errors and adds the source dataset for context.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error, tagged with the input file.
    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: CsvError,
    },

    /// Transformation error, tagged with the input file and row.
    #[error("{path}, row {row}: {source}")]
    Transform {
        path: String,
        row: usize,
        #[source]
        source: TransformError,
    },

    /// Output error, tagged with the destination file.
    #[error("{path}: {source}")]
    Write {
        path: String,
        #[source]
        source: WriteError,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

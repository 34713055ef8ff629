//! Error types for the podex-core library.
//!
//! Extraction itself is fail-soft and never returns an error: missing or
//! malformed structure degrades the affected fields to empty instead. The
//! only true failure class is writing a rendered report to disk.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the podex library.
#[derive(Error, Debug)]
pub enum PodexError {
    /// Report rendering/output error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// Errors related to report output.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to create or write the report file.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the podex library.
pub type Result<T> = std::result::Result<T, PodexError>;

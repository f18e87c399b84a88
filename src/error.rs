// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating/reading the population table in a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No table carrying the wikitable class marker anywhere in the document.
    #[error("no wikitable found in document")]
    TableNotFound,
}

/// Contract misuse of `Table` accessors. These indicate caller defects,
/// not runtime conditions to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("row index {index} out of range ({rows} rows)")]
    IndexOutOfRange { index: usize, rows: usize },

    #[error("unknown column: {0:?}")]
    UnknownColumn(String),
}

/// Export sink failures. The export either produced the complete file or
/// failed as a whole; no ambiguous partial row is left behind.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

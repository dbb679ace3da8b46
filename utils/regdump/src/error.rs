use std::num::ParseIntError;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or interpreting register dumps.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: expected at least {expected} lines, found {found}")]
    TooFewLines {
        path: Utf8PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("{path}:{line}: invalid hex field {text:?} at column {column}: {source}")]
    InvalidField {
        path: Utf8PathBuf,
        line: usize,
        column: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{path}: expected {expected} register values, found {found}")]
    MissingRegisters {
        path: Utf8PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("invalid dump directory pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to list {path}: {source}")]
    Listing {
        path: Utf8PathBuf,
        #[source]
        source: glob::GlobError,
    },
}

pub type Result<T> = std::result::Result<T, DumpError>;

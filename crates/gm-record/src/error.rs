//! Error types for record decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while reading or decoding a `.grm` record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed header: expected {expected} bytes, got {actual}")]
    MalformedHeader { expected: usize, actual: usize },

    #[error("Truncated payload: expected {expected} bytes, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("Invalid sample count in header: {nt}")]
    InvalidSampleCount { nt: i64 },

    #[error("Invalid record: {what}")]
    InvalidRecord { what: &'static str },

    #[error("Failed to read record file: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type RecordResult<T> = Result<T, RecordError>;

impl From<gm_core::GmError> for RecordError {
    fn from(e: gm_core::GmError) -> Self {
        match e {
            gm_core::GmError::NonFinite { what, .. }
            | gm_core::GmError::InvalidArg { what }
            | gm_core::GmError::TooShort { what, .. }
            | gm_core::GmError::Invariant { what } => RecordError::InvalidRecord { what },
        }
    }
}

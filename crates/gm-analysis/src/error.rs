//! Error types for the analysis layer.

use std::path::PathBuf;

/// Failure to analyze one record. Every variant is terminal for that file
/// only; batch runs turn it into a skip.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Record error: {0}")]
    Record(#[from] gm_record::RecordError),

    #[error("Signal error: {0}")]
    Signal(#[from] gm_signal::SignalError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] gm_core::GmError),

    #[error("Record has {count} sample(s); at least 2 are needed for a sampling rate")]
    InsufficientSamples { count: usize },

    #[error("Invalid oscillator period: {period_s} s")]
    InvalidPeriod { period_s: f64 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for gm-analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

//! Per-file ground-motion duration analysis.
//!
//! This crate composes the record decoder and the signal stages into one
//! result per `.grm` file: the period-independent 5%-95% window plus one
//! bandpassed window per configured oscillator period. Batch helpers run
//! files in parallel and keep results in input order.

pub mod batch;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod period;
pub mod result;

// Re-export key types for convenience
pub use batch::{BatchReport, BatchSummary, FileOutcome, PeriodMean, analyze_batch};
pub use config::{AnalysisConfig, DEFAULT_PERIODS_S};
pub use error::{AnalysisError, AnalysisResult};
pub use orchestrator::{analyze_bytes, analyze_file, analyze_record};
pub use period::{PeriodDurationResult, period_dependent_duration, sampling_frequency_hz};
pub use result::{FieldValue, FileAnalysisResult, FlatRecord, period_label};

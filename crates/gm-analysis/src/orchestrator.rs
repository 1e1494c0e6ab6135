//! Per-file composition: decode → unfiltered window → per-period windows.

use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;
use crate::period::{PeriodDurationResult, period_dependent_duration, sampling_frequency_hz};
use crate::result::FileAnalysisResult;
use gm_core::timing::Timer;
use gm_record::{GroundMotionRecord, decode_with, read_grm_file};
use gm_signal::{arias_intensity, significant_duration};
use rayon::prelude::*;
use std::path::Path;

/// Analyze an already decoded record. The config is validated first.
pub fn analyze_record(
    filename: &str,
    record: &GroundMotionRecord,
    config: &AnalysisConfig,
) -> AnalysisResult<FileAnalysisResult> {
    config.validate()?;
    run_record(filename, record, config)
}

fn run_record(
    filename: &str,
    record: &GroundMotionRecord,
    config: &AnalysisConfig,
) -> AnalysisResult<FileAnalysisResult> {
    let timer = Timer::start("analyze_record");

    let sampling_frequency_hz = sampling_frequency_hz(record)?;
    let curve = arias_intensity(record.time(), record.acceleration_g(), &config.arias)?;
    let unfiltered = significant_duration(&curve, &config.thresholds);

    let per_period = |&period_s: &f64| period_dependent_duration(record, period_s, config);
    let periods: Vec<PeriodDurationResult> = if config.parallel_periods {
        config
            .periods_s
            .par_iter()
            .map(per_period)
            .collect::<AnalysisResult<_>>()?
    } else {
        config
            .periods_s
            .iter()
            .map(per_period)
            .collect::<AnalysisResult<_>>()?
    };

    let result = FileAnalysisResult {
        filename: filename.to_string(),
        sample_count: record.sample_count(),
        sampling_frequency_hz,
        peak_accel_g: record.peak_abs_acceleration_g(),
        total_duration_s: record.duration_s(),
        arias_total: curve.total(),
        unfiltered,
        periods,
    };

    tracing::debug!(
        filename,
        samples = result.sample_count,
        peak_accel_g = result.peak_accel_g,
        arias_total = result.arias_total,
        duration_s = result.unfiltered.duration,
        "analyzed record"
    );
    timer.stop_and_log();
    Ok(result)
}

/// Validate the config, decode raw `.grm` bytes and analyze them.
pub fn analyze_bytes(
    filename: &str,
    bytes: &[u8],
    config: &AnalysisConfig,
) -> AnalysisResult<FileAnalysisResult> {
    config.validate()?;
    let record = decode_with(bytes, &config.decode)?;
    run_record(filename, &record, config)
}

/// Read one file whole, then analyze it. The reported filename is the
/// path's final component.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> AnalysisResult<FileAnalysisResult> {
    let bytes = read_grm_file(path)?;
    analyze_bytes(&display_name(path), &bytes, config)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

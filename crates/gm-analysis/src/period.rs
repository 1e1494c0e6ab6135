//! Period-dependent duration: bandpass around 1/T, then energy and window.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use gm_core::units::{as_hz, frequency_of_period, s};
use gm_core::{GmError, mean_step};
use gm_record::GroundMotionRecord;
use gm_signal::{
    DurationWindow, FilterSpec, arias_intensity, design_bandpass, significant_duration,
    sosfiltfilt,
};

/// Duration of shaking as seen through one oscillator period's band.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodDurationResult {
    pub period_s: f64,
    pub filter_spec: FilterSpec,
    pub duration_window: DurationWindow,
    /// Total Arias Intensity of the filtered record (m/s)
    pub filtered_total_energy: f64,
}

/// Sampling frequency from the mean step of the record's time base.
pub fn sampling_frequency_hz(record: &GroundMotionRecord) -> AnalysisResult<f64> {
    let dt = mean_step(record.time()).map_err(|e| match e {
        GmError::TooShort { len, .. } => AnalysisError::InsufficientSamples { count: len },
        other => AnalysisError::Numeric(other),
    })?;
    Ok(1.0 / dt)
}

/// Analyze one record for one oscillator period.
///
/// Any positive finite period is accepted; the configured period list only
/// decides which ones the orchestrator asks for.
pub fn period_dependent_duration(
    record: &GroundMotionRecord,
    period_s: f64,
    config: &AnalysisConfig,
) -> AnalysisResult<PeriodDurationResult> {
    if !(period_s.is_finite() && period_s > 0.0) {
        return Err(AnalysisError::InvalidPeriod { period_s });
    }

    let fs = sampling_frequency_hz(record)?;
    let center_hz = as_hz(frequency_of_period(s(period_s)));
    let filter_spec = design_bandpass(center_hz, fs, &config.bandpass)?;

    let filtered = sosfiltfilt(&filter_spec.sections, record.acceleration_g())?;
    let curve = arias_intensity(record.time(), &filtered, &config.arias)?;
    let duration_window = significant_duration(&curve, &config.thresholds);

    tracing::debug!(
        period_s,
        low_hz = filter_spec.low_cutoff_hz,
        high_hz = filter_spec.high_cutoff_hz,
        duration_s = duration_window.duration,
        "period-dependent duration"
    );

    Ok(PeriodDurationResult {
        period_s,
        filter_spec,
        duration_window,
        filtered_total_energy: curve.total(),
    })
}
